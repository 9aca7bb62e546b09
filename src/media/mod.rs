pub mod audio;
pub mod resolver;

use bevy::prelude::*;

use crate::core::{FrameSet, resources::GameConfig};
use audio::{AudioOutput, SimulatedAudio};
use resolver::{AssetPaths, AssetResolver, FontHandle};

/// 物品名、弹数等文字用的字体
#[derive(Resource, Debug, Clone)]
pub struct UiFont(pub FontHandle);

impl FromWorld for UiFont {
    fn from_world(world: &mut World) -> Self {
        let size = world
            .get_resource::<GameConfig>()
            .map_or(15.0, |config| config.ui.label_size);
        Self(AssetPaths::from_world(world).load_font(size))
    }
}

impl FromWorld for AudioOutput {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<GameConfig>()
            .map(|config| config.audio.clone())
            .unwrap_or_default();
        let paths = AssetPaths::from_world(world);
        AudioOutput::new(SimulatedAudio::from_config(&config, &paths))
    }
}

/// 资源解析 + 音频后端
pub struct MediaPlugin;

impl Plugin for MediaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetPaths>()
            .init_resource::<UiFont>()
            .init_resource::<AudioOutput>()
            .add_systems(Update, audio::tick_audio.in_set(FrameSet::Simulate));
    }
}
