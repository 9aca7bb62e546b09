use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use super::firearm::Firearm;
use super::render::{DrawCommand, RenderView, draw_slot};
use crate::character::components::{AmmoPool, Body};
use crate::core::bus::EventBus;
use crate::media::audio::AudioBackend;
use crate::media::resolver::IconHandle;

/// 背包分配的物品实例 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// 构造即固定的名字与图标
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInfo {
    pub name: String,
    pub icon: IconHandle,
}

impl ItemInfo {
    pub fn new(name: impl Into<String>, icon: IconHandle) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

/// 违反物品不变量（只会出现在编程错误里）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("chamber count {count} exceeds capacity {capacity}")]
    ChamberOverflow { count: u32, capacity: u32 },
}

/// 使用 / 换弹时物品能接触到的外部状态
pub struct UseContext<'a> {
    pub item: ItemId,
    pub owner: Entity,
    pub body: &'a Body,
    pub ammo: &'a AmmoPool,
    pub bus: &'a mut EventBus,
    pub audio: &'a mut dyn AudioBackend,
}

/// 每帧推进时的外部状态
pub struct UpdateContext<'a> {
    pub ammo: &'a mut AmmoPool,
    pub audio: &'a dyn AudioBackend,
    pub delta: Duration,
}

/// 可放进背包的物品
pub trait InventoryItem: Send + Sync + 'static {
    fn info(&self) -> &ItemInfo;

    fn name(&self) -> &str {
        &self.info().name
    }

    fn render(&self, slot: Vec2, selected: bool, view: &RenderView) -> Vec<DrawCommand> {
        draw_slot(self.info(), slot, selected, view)
    }

    /// 默认什么也不做
    fn use_item(&mut self, _ctx: &mut UseContext) {}

    fn reload(&mut self, _ctx: &mut UseContext) {}

    fn update(&mut self, _ctx: &mut UpdateContext) {}

    fn as_firearm(&self) -> Option<&Firearm> {
        None
    }
}

/// 没有任何效果的普通物品
#[derive(Debug, Clone)]
pub struct PlainItem {
    info: ItemInfo,
}

impl PlainItem {
    pub fn new(info: ItemInfo) -> Self {
        Self { info }
    }
}

impl InventoryItem for PlainItem {
    fn info(&self) -> &ItemInfo {
        &self.info
    }
}
