use bevy::prelude::*;

use super::components::Facing;

/// 治疗事件
#[derive(Event)]
pub struct Heal {
    pub entity: Entity,
    pub amount: i32,
}

/// 改变朝向（CLI 输入）
#[derive(Event)]
pub struct FaceEvent {
    pub facing: Facing,
}
