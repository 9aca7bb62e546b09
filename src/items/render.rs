//! 物品格的绘制指令
//!
//! 只产出指令，真正的贴图 / 文字排版由宿主完成。

use bevy::prelude::*;
use serde::Serialize;

use super::components::ItemInfo;
use crate::media::resolver::{FontHandle, IconHandle};

/// 图标边长
pub const ICON_SIZE: f32 = 80.0;
/// 物品名在图标上方的距离
pub const LABEL_OFFSET: f32 = 20.0;
/// 弹数文字右下角相对格子左上角的位置
pub const COUNTER_INSET: f32 = 70.0;
/// 提示文字在图标下方的间距
pub const HINT_GAP: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// 以 position 为上边中点
    TopCenter,
    /// 以 position 为右下角
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    Icon {
        icon: IconHandle,
        position: Vec2,
        size: Vec2,
    },
    Text {
        text: String,
        font: FontHandle,
        position: Vec2,
        anchor: TextAnchor,
    },
}

impl DrawCommand {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            DrawCommand::Icon { .. } => None,
        }
    }
}

/// 绘制时需要的外部状态
#[derive(Debug, Clone)]
pub struct RenderView {
    pub ammo_available: u32,
    pub font: FontHandle,
}

/// 所有物品共用的画法：图标，选中时在上方居中写名字
pub fn draw_slot(info: &ItemInfo, slot: Vec2, selected: bool, view: &RenderView) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Icon {
        icon: info.icon.clone(),
        position: slot,
        size: Vec2::splat(ICON_SIZE),
    }];
    if selected {
        out.push(DrawCommand::Text {
            text: info.name.clone(),
            font: view.font.clone(),
            position: Vec2::new(slot.x + ICON_SIZE / 2.0, slot.y - LABEL_OFFSET),
            anchor: TextAnchor::TopCenter,
        });
    }
    out
}
