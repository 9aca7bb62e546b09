use std::time::Duration;

use anyhow::Context;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

mod character;
mod core;
mod data;
mod interface;
mod inventory;
mod items;
mod level;
mod media;

#[cfg(test)]
mod test_helpers;

use character::CharacterPlugin;
use crate::core::CorePlugin;
use crate::core::resources::{CONFIG_PATH, GameConfig};
use crate::core::states::AppState;
use data::DataPlugin;
use interface::debug_cli::DebugCliPlugin;
use inventory::InventoryPlugin;
use level::LevelPlugin;
use media::MediaPlugin;

fn main() -> anyhow::Result<()> {
    let config = GameConfig::load_or_default(CONFIG_PATH)
        .with_context(|| format!("读取配置 {CONFIG_PATH} 失败"))?;

    App::new()
        // 无窗口：固定 60 帧驱动
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins((
            bevy::log::LogPlugin::default(),
            bevy::asset::AssetPlugin::default(),
            bevy::state::app::StatesPlugin,
        ))
        .add_plugins(CorePlugin::new(config))
        .add_plugins((
            MediaPlugin,
            DataPlugin,
            CharacterPlugin,
            InventoryPlugin,
            LevelPlugin,
            DebugCliPlugin,
        ))
        .add_systems(Startup, |mut next: ResMut<NextState<AppState>>| {
            next.set(AppState::Loading);
        })
        .run();

    Ok(())
}
