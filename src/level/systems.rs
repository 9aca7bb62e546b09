use super::components::*;
use crate::core::bus::{EventBus, Signal, SignalKind};
use bevy::prelude::*;

/// 消费 BulletSpawn 信号，把子弹放进关卡
pub fn spawn_bullets(mut bus: ResMut<EventBus>, mut level: ResMut<LevelBullets>) {
    for signal in bus.drain(SignalKind::BulletSpawn) {
        let Signal::BulletSpawn(spawn) = signal else {
            continue;
        };
        debug!("bullet at ({}, {}) {:?}", spawn.x, spawn.y, spawn.direction);
        level.bullets.push(Bullet {
            position: Vec2::new(spawn.x, spawn.y),
            direction: spawn.direction,
            owner: spawn.owner,
        });
    }
}
