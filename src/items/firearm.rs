//! 手枪：弹仓 / 换弹状态机
//!
//! ```text
//! Loaded(n) --use, n>1--> Loaded(n-1)
//! Loaded(1) --use-->      EmptyIdle
//! EmptyIdle --reload, 弹药池>0--> Reloading
//! Reloading --音效结束--> Loaded(min(3, 弹药池)) / EmptyIdle
//! ```
//!
//! 其余组合一律静默忽略。

use bevy::prelude::*;

use super::components::{InventoryItem, ItemError, ItemInfo, UpdateContext, UseContext};
use super::reload::{ReloadCue, ReloadTimer};
use super::render::{
    COUNTER_INSET, DrawCommand, HINT_GAP, ICON_SIZE, RenderView, TextAnchor, draw_slot,
};
use crate::character::components::AmmoPool;
use crate::core::bus::{BulletSpawn, Signal};

pub const CHAMBER_CAPACITY: u32 = 3;

pub const HINT_RELOAD: &str = "'R' to reload";
pub const HINT_NO_AMMO: &str = "No ammo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirearmState {
    Loaded(u32),
    EmptyIdle,
    Reloading,
}

#[derive(Debug, Clone)]
pub struct Firearm {
    info: ItemInfo,
    chamber: u32,
    reload: ReloadTimer,
    cue: ReloadCue,
}

impl Firearm {
    /// 新枪弹仓是满的
    pub fn new(info: ItemInfo, cue: ReloadCue) -> Self {
        Self {
            info,
            chamber: CHAMBER_CAPACITY,
            reload: ReloadTimer::Idle,
            cue,
        }
    }

    pub fn with_chamber(mut self, count: u32) -> Result<Self, ItemError> {
        if count > CHAMBER_CAPACITY {
            return Err(ItemError::ChamberOverflow {
                count,
                capacity: CHAMBER_CAPACITY,
            });
        }
        self.chamber = count;
        Ok(self)
    }

    pub fn chamber(&self) -> u32 {
        self.chamber
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_active()
    }

    pub fn is_empty_display(&self) -> bool {
        self.chamber == 0
    }

    pub fn state(&self) -> FirearmState {
        if self.reload.is_active() {
            FirearmState::Reloading
        } else if self.chamber > 0 {
            FirearmState::Loaded(self.chamber)
        } else {
            FirearmState::EmptyIdle
        }
    }

    /// 弹仓空时的提示文字
    pub fn reload_hint(&self, ammo_available: u32) -> Option<&'static str> {
        if self.chamber > 0 {
            return None;
        }
        Some(if ammo_available > 0 {
            HINT_RELOAD
        } else {
            HINT_NO_AMMO
        })
    }

    fn fire(&mut self, ctx: &mut UseContext) {
        if self.chamber == 0 || self.reload.is_active() {
            return;
        }
        let muzzle = ctx.body.muzzle();
        ctx.bus.publish(Signal::BulletSpawn(BulletSpawn {
            x: muzzle.x,
            y: muzzle.y,
            direction: ctx.body.facing,
            owner: ctx.owner,
        }));
        self.chamber -= 1;
        debug!("{} fired, {} left", self.info.name, self.chamber);
    }

    fn start_reload(&mut self, ctx: &mut UseContext) {
        if self.chamber > 0 || self.reload.is_active() || ctx.ammo.available == 0 {
            return;
        }
        // 换弹通道被别的枪占着时不能开始
        if ctx.audio.is_busy(self.cue.channel) {
            debug!("{} reload blocked: channel busy", self.info.name);
            return;
        }
        self.reload.start(&self.cue, ctx.audio);
        info!("{} reloading", self.info.name);
    }

    fn transfer_ammo(&mut self, pool: &mut AmmoPool) {
        self.chamber = pool.take(CHAMBER_CAPACITY);
        debug_assert!(self.chamber <= CHAMBER_CAPACITY);
        info!(
            "{} reloaded: chamber {}, pool {}",
            self.info.name, self.chamber, pool.available
        );
    }
}

impl InventoryItem for Firearm {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn render(&self, slot: Vec2, selected: bool, view: &RenderView) -> Vec<DrawCommand> {
        let mut out = draw_slot(&self.info, slot, selected, view);
        out.push(DrawCommand::Text {
            text: self.chamber.to_string(),
            font: view.font.clone(),
            position: slot + Vec2::splat(COUNTER_INSET),
            anchor: TextAnchor::BottomRight,
        });
        if let Some(hint) = self.reload_hint(view.ammo_available) {
            out.push(DrawCommand::Text {
                text: hint.to_string(),
                font: view.font.clone(),
                position: Vec2::new(slot.x + ICON_SIZE / 2.0, slot.y + ICON_SIZE + HINT_GAP),
                anchor: TextAnchor::TopCenter,
            });
        }
        out
    }

    fn use_item(&mut self, ctx: &mut UseContext) {
        self.fire(ctx);
    }

    fn reload(&mut self, ctx: &mut UseContext) {
        self.start_reload(ctx);
    }

    fn update(&mut self, ctx: &mut UpdateContext) {
        if self.reload.poll(ctx.audio, ctx.delta) {
            self.transfer_ammo(ctx.ammo);
        }
    }

    fn as_firearm(&self) -> Option<&Firearm> {
        Some(self)
    }
}
