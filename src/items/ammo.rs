use super::components::{InventoryItem, ItemInfo, UseContext};
use crate::core::bus::Signal;

pub const DEFAULT_AMOUNT: u32 = 10;

/// 弹药拾取物，使用后由弹药系统加到弹药池
#[derive(Debug, Clone)]
pub struct AmmoPickup {
    info: ItemInfo,
    amount: u32,
}

impl AmmoPickup {
    pub fn new(info: ItemInfo, amount: u32) -> Self {
        Self { info, amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl InventoryItem for AmmoPickup {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn use_item(&mut self, ctx: &mut UseContext) {
        ctx.bus.publish(Signal::AmmoGranted {
            item: ctx.item,
            amount: self.amount,
        });
    }
}
