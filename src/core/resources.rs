use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::character::components::Facing;

/// 默认配置文件（相对工作目录）
pub const CONFIG_PATH: &str = "assets/config/game.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 全局游戏配置，所有字段都有默认值
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub inventory: InventoryConfig,
    pub player: PlayerConfig,
    pub firearm: FirearmConfig,
    pub potion: PotionConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// 文件不存在时用默认值，其它错误照常返回
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("未找到配置 {}，使用默认值", path.as_ref().display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub capacity: usize,
    pub slot_origin: [f32; 2],
    pub slot_spacing: f32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            slot_origin: [20.0, 620.0],
            slot_spacing: 90.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hp: i32,
    pub starting_ammo: u32,
    pub starting_items: Vec<String>,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub facing: Facing,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: 10,
            starting_ammo: 0,
            starting_items: vec!["pistol".to_string()],
            position: [100.0, 400.0],
            size: [40.0, 80.0],
            facing: Facing::Right,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirearmConfig {
    pub reload_sound: String,
    pub reload_channel: u8,
    /// 换弹音效放不出来时的兜底时长
    pub reload_fallback_secs: f32,
}

impl FirearmConfig {
    pub fn reload_fallback(&self) -> Duration {
        Duration::from_secs_f32(self.reload_fallback_secs.max(0.0))
    }
}

impl Default for FirearmConfig {
    fn default() -> Self {
        Self {
            reload_sound: "player/reload.wav".to_string(),
            reload_channel: 3,
            reload_fallback_secs: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PotionConfig {
    pub drink_sound: String,
}

impl Default for PotionConfig {
    fn default() -> Self {
        Self {
            drink_sound: "player/gulp.wav".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub muted: bool,
    /// 音效路径 → 时长（秒）
    pub clips: HashMap<String, f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            muted: false,
            clips: HashMap::from([
                ("player/reload.wav".to_string(), 1.3),
                ("player/gulp.wav".to_string(), 0.6),
            ]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font: String,
    pub label_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font: "pressstart.ttf".to_string(),
            label_size: 15.0,
        }
    }
}
