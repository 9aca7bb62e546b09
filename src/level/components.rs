use bevy::prelude::*;

use crate::character::components::Facing;

/// 关卡中的一颗子弹（运动与碰撞不在这里）
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub position: Vec2,
    pub direction: Facing,
    pub owner: Entity,
}

/// 关卡的子弹列表
#[derive(Resource, Debug, Default)]
pub struct LevelBullets {
    pub bullets: Vec<Bullet>,
}
