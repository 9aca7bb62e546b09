//! 资源句柄与解析
//!
//! 物品只引用句柄，不持有贴图 / 音效本身；真正的解码交给宿主。

use bevy::prelude::*;
use serde::Serialize;

use crate::core::resources::{GameConfig, UiConfig};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IconHandle(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SoundHandle(pub String);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontHandle {
    pub path: String,
    pub size: f32,
}

pub trait AssetResolver: Send + Sync {
    fn load_icon(&self, name: &str) -> IconHandle;
    fn load_sound(&self, name: &str) -> SoundHandle;
    fn load_font(&self, size: f32) -> FontHandle;
}

/// 按约定目录把名字映射成 assets 下的相对路径
#[derive(Resource, Debug, Clone)]
pub struct AssetPaths {
    pub font: String,
}

impl AssetPaths {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }
}

impl FromWorld for AssetPaths {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<GameConfig>() {
            Some(config) => Self::new(&config.ui.font),
            None => Self::new(UiConfig::default().font),
        }
    }
}

impl AssetResolver for AssetPaths {
    fn load_icon(&self, name: &str) -> IconHandle {
        IconHandle(format!("textures/items/{name}"))
    }

    fn load_sound(&self, name: &str) -> SoundHandle {
        SoundHandle(format!("sounds/{name}"))
    }

    fn load_font(&self, size: f32) -> FontHandle {
        FontHandle {
            path: format!("fonts/{}", self.font),
            size,
        }
    }
}
