pub mod components;
pub mod events;
pub mod systems;

use crate::core::{FrameSet, states::AppState};
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册事件
            .add_event::<Heal>()
            .add_event::<FaceEvent>()
            // 在游戏开始时生成玩家
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            // 游戏中的系统
            .add_systems(
                Update,
                (
                    handle_face
                        .in_set(FrameSet::Act)
                        .before(crate::inventory::systems::dispatch_item_input),
                    (apply_drink_signals, handle_heal, apply_ammo_grants)
                        .chain()
                        .in_set(FrameSet::Consume),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
