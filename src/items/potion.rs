use bevy::prelude::*;

use super::components::{InventoryItem, ItemInfo, UseContext};
use crate::core::bus::Signal;
use crate::media::resolver::SoundHandle;

pub const DEFAULT_HEAL: u32 = 2;

/// 回血药水
#[derive(Debug, Clone)]
pub struct Potion {
    info: ItemInfo,
    heal_amount: u32,
    drink_sound: SoundHandle,
}

impl Potion {
    pub fn new(info: ItemInfo, heal_amount: u32, drink_sound: SoundHandle) -> Self {
        Self {
            info,
            heal_amount,
            drink_sound,
        }
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }
}

impl InventoryItem for Potion {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    /// 播放喝水声并投递 Drink；自身状态不变，是否移除由消费方决定
    fn use_item(&mut self, ctx: &mut UseContext) {
        if !ctx.audio.play(&self.drink_sound) {
            debug!("drink sound not played: {}", self.drink_sound.0);
        }
        ctx.bus.publish(Signal::Drink {
            item: ctx.item,
            heal_amount: self.heal_amount,
        });
    }
}
