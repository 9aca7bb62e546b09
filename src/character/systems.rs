use super::{components::*, events::*};
use crate::core::bus::{EventBus, Signal, SignalKind};
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::inventory::components::Inventory;
use bevy::prelude::*;

/// 消费 Drink 信号：转成 Heal，喝掉的药水从背包移除
pub fn apply_drink_signals(
    mut bus: ResMut<EventBus>,
    mut inventory: ResMut<Inventory>,
    mut ev_heal: EventWriter<Heal>,
    player_query: Query<Entity, With<Player>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    for signal in bus.drain(SignalKind::Drink) {
        let Signal::Drink { item, heal_amount } = signal else {
            continue;
        };
        // 同一帧重复使用同一瓶时只生效一次
        if inventory.remove(item).is_none() {
            debug!("potion {item:?} already consumed");
            continue;
        }
        ev_heal.write(Heal {
            entity: player,
            amount: i32::try_from(heal_amount).unwrap_or(i32::MAX),
        });
    }
}

/// 处理治疗事件
pub fn handle_heal(
    mut ev_heal: EventReader<Heal>,
    mut ev_log: EventWriter<LogEvent>,
    mut player_query: Query<&mut Stats, With<Player>>,
) {
    for ev in ev_heal.read() {
        if let Ok(mut stats) = player_query.get_mut(ev.entity) {
            let old_hp = stats.hp;
            stats.heal(ev.amount);
            let healed = stats.hp - old_hp;

            ev_log.write(LogEvent(format!(
                "恢复 {} 点生命值，当前生命值：{}/{}",
                healed, stats.hp, stats.max_hp
            )));
        }
    }
}

/// 消费 AmmoGranted 信号：加到弹药池，拾取物从背包移除
pub fn apply_ammo_grants(
    mut bus: ResMut<EventBus>,
    mut inventory: ResMut<Inventory>,
    mut ev_log: EventWriter<LogEvent>,
    mut player_query: Query<&mut AmmoPool, With<Player>>,
) {
    let Ok(mut pool) = player_query.single_mut() else {
        return;
    };
    for signal in bus.drain(SignalKind::AmmoGranted) {
        let Signal::AmmoGranted { item, amount } = signal else {
            continue;
        };
        if inventory.remove(item).is_none() {
            debug!("ammo pickup {item:?} already consumed");
            continue;
        }
        pool.grant(amount);
        ev_log.write(LogEvent(format!(
            "拾取弹药 {}，备弹 {}",
            amount, pool.available
        )));
    }
}

/// 改变玩家朝向
pub fn handle_face(
    mut ev_face: EventReader<FaceEvent>,
    mut player_query: Query<&mut Body, With<Player>>,
) {
    for ev in ev_face.read() {
        if let Ok(mut body) = player_query.single_mut() {
            body.facing = ev.facing;
        }
    }
}

/// 初始化玩家实体
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    let player = &config.player;
    commands.spawn((
        Player,
        Stats::new(player.max_hp),
        AmmoPool::new(player.starting_ammo),
        Body {
            position: Vec2::from_array(player.position),
            size: Vec2::from_array(player.size),
            facing: player.facing,
        },
    ));
    info!("player spawned with {} spare rounds", player.starting_ammo);
}
