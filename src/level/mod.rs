pub mod components;
pub mod systems;

use crate::core::{FrameSet, states::AppState};
use bevy::prelude::*;
use components::LevelBullets;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelBullets>().add_systems(
            Update,
            systems::spawn_bullets
                .in_set(FrameSet::Consume)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
