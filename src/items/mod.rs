//! 背包物品：药水、胜利卡带、弹药、手枪
//!
//! 物品被使用时不直接调用消费方，只往 `EventBus` 投信号。

pub mod ammo;
pub mod cartridge;
pub mod components;
pub mod firearm;
pub mod potion;
pub mod reload;
pub mod render;

pub use ammo::AmmoPickup;
pub use cartridge::WinCartridge;
pub use components::{
    InventoryItem, ItemId, ItemInfo, PlainItem, UpdateContext, UseContext,
};
pub use firearm::{CHAMBER_CAPACITY, Firearm, FirearmState};
pub use potion::Potion;
pub use reload::ReloadCue;
pub use render::{DrawCommand, RenderView};
