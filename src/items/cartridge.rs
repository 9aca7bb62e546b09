use super::components::{InventoryItem, ItemInfo, UseContext};
use crate::core::bus::Signal;

/// 胜利卡带：用了就赢
#[derive(Debug, Clone)]
pub struct WinCartridge {
    info: ItemInfo,
}

impl WinCartridge {
    pub fn new(info: ItemInfo) -> Self {
        Self { info }
    }
}

impl InventoryItem for WinCartridge {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn use_item(&mut self, ctx: &mut UseContext) {
        ctx.bus.publish(Signal::Win);
    }
}
