use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::Deserialize;
use uuid::Uuid;

use crate::core::resources::GameConfig;
use crate::items::{
    AmmoPickup, Firearm, InventoryItem, ItemInfo, PlainItem, Potion, ReloadCue, WinCartridge,
    ammo, potion,
};
use crate::media::audio::ChannelId;
use crate::media::resolver::AssetResolver;

/// 物品种类，决定实例化成哪种物品
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ItemKind {
    Plain,
    Potion,
    Cartridge,
    Ammo,
    Firearm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub icon: String,
    #[serde(default = "default_heal")]
    pub heal: u32,
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_heal() -> u32 {
    potion::DEFAULT_HEAL
}

fn default_amount() -> u32 {
    ammo::DEFAULT_AMOUNT
}

impl ItemEntry {
    /// 由 id 派生的 v5 UUID，跨进程稳定
    pub fn uuid(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.id.as_bytes())
    }

    /// 按原型生成一个新的物品实例
    pub fn instantiate(
        &self,
        assets: &dyn AssetResolver,
        config: &GameConfig,
    ) -> Box<dyn InventoryItem> {
        let info = ItemInfo::new(&self.name, assets.load_icon(&self.icon));
        match self.kind {
            ItemKind::Plain => Box::new(PlainItem::new(info)),
            ItemKind::Potion => Box::new(Potion::new(
                info,
                self.heal,
                assets.load_sound(&config.potion.drink_sound),
            )),
            ItemKind::Cartridge => Box::new(WinCartridge::new(info)),
            ItemKind::Ammo => Box::new(AmmoPickup::new(info, self.amount)),
            ItemKind::Firearm => Box::new(Firearm::new(
                info,
                ReloadCue {
                    sound: assets.load_sound(&config.firearm.reload_sound),
                    channel: ChannelId(config.firearm.reload_channel),
                    fallback: config.firearm.reload_fallback(),
                },
            )),
        }
    }
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::resolver::AssetPaths;
    use bevy::asset::ron;

    const SHIPPED: &str = include_str!("../../assets/data/items.ron");

    #[test]
    fn shipped_catalog_parses() {
        let list: ItemList = ron::de::from_str(SHIPPED).unwrap();
        let ids: Vec<_> = list.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["potion", "magenta_cartridge", "ammo", "pistol"]);

        let potion = &list.items[0];
        assert_eq!(potion.kind, ItemKind::Potion);
        assert_eq!(potion.heal, 2);
        assert_eq!(list.items[2].amount, 10);
    }

    #[test]
    fn uuid_is_stable_per_id() {
        let list: ItemList = ron::de::from_str(SHIPPED).unwrap();
        assert_eq!(list.items[0].uuid(), list.items[0].clone().uuid());
        assert_ne!(list.items[0].uuid(), list.items[1].uuid());
    }

    #[test]
    fn firearm_entry_instantiates_full_pistol() {
        let list: ItemList = ron::de::from_str(SHIPPED).unwrap();
        let item = list.items[3].instantiate(&AssetPaths::new("pressstart.ttf"), &GameConfig::default());

        assert_eq!(item.name(), "Pistol");
        assert_eq!(item.info().icon.0, "textures/items/gun.png");
        assert_eq!(item.as_firearm().map(Firearm::chamber), Some(3));
    }
}
