use bevy::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::core::resources::GameConfig;
use crate::items::{DrawCommand, InventoryItem, ItemId};

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },
}

/// 背包里的一格
pub struct InventorySlot {
    pub id: ItemId,
    pub item: Box<dyn InventoryItem>,
}

/// 玩家背包（挂在 Resource）
///
/// 物品紧凑排在前面；选中的是格子序号，可以选中空格。
#[derive(Resource)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
    selected: usize,
    capacity: usize,
    next_id: u64,
    origin: Vec2,
    spacing: f32,
}

impl FromWorld for Inventory {
    fn from_world(world: &mut World) -> Self {
        let Some(config) = world.get_resource::<GameConfig>() else {
            return Self::with_capacity(DEFAULT_CAPACITY);
        };
        let mut inventory = Self::with_capacity(config.inventory.capacity);
        inventory.origin = Vec2::from_array(config.inventory.slot_origin);
        inventory.spacing = config.inventory.slot_spacing;
        inventory
    }
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            selected: 0,
            capacity,
            next_id: 1,
            origin: Vec2::new(20.0, 620.0),
            spacing: 90.0,
        }
    }

    pub fn insert(&mut self, item: Box<dyn InventoryItem>) -> Result<ItemId, InventoryError> {
        if self.slots.len() >= self.capacity {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.slots.push(InventorySlot { id, item });
        Ok(id)
    }

    /// 移除指定实例，后面的物品前移
    pub fn remove(&mut self, id: ItemId) -> Option<Box<dyn InventoryItem>> {
        let index = self.slots.iter().position(|s| s.id == id)?;
        Some(self.slots.remove(index).item)
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&InventorySlot> {
        self.slots.get(self.selected)
    }

    pub fn selected_slot_mut(&mut self) -> Option<&mut InventorySlot> {
        self.slots.get_mut(self.selected)
    }

    pub fn get(&self, id: ItemId) -> Option<&dyn InventoryItem> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.item.as_ref())
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut InventorySlot> {
        self.slots.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 第 index 格的左上角
    pub fn slot_position(&self, index: usize) -> Vec2 {
        self.origin + Vec2::new(index as f32 * self.spacing, 0.0)
    }
}

/// 本帧背包的绘制指令
#[derive(Resource, Debug, Default, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemInfo, PlainItem};
    use crate::media::resolver::IconHandle;

    fn rock() -> Box<dyn InventoryItem> {
        Box::new(PlainItem::new(ItemInfo::new(
            "Rock",
            IconHandle("textures/items/rock.png".into()),
        )))
    }

    #[test]
    fn insert_respects_capacity() {
        let mut inventory = Inventory::with_capacity(2);
        let a = inventory.insert(rock()).unwrap();
        let b = inventory.insert(rock()).unwrap();

        assert_ne!(a, b);
        assert_eq!(
            inventory.insert(rock()).unwrap_err(),
            InventoryError::Full { capacity: 2 }
        );
    }

    #[test]
    fn remove_shifts_later_items_and_keeps_ids() {
        let mut inventory = Inventory::with_capacity(DEFAULT_CAPACITY);
        let a = inventory.insert(rock()).unwrap();
        let b = inventory.insert(rock()).unwrap();

        assert!(inventory.remove(a).is_some());
        assert!(inventory.remove(a).is_none());
        assert_eq!(inventory.slots()[0].id, b);

        // 删除后新插入的实例不会复用旧 ID
        let c = inventory.insert(rock()).unwrap();
        assert_ne!(c, a);
    }

    #[test]
    fn selection_can_point_at_an_empty_slot() {
        let mut inventory = Inventory::with_capacity(DEFAULT_CAPACITY);
        inventory.insert(rock()).unwrap();

        assert!(inventory.select(3));
        assert!(inventory.selected_slot().is_none());
        assert!(!inventory.select(DEFAULT_CAPACITY));
        assert_eq!(inventory.selected(), 3);
    }

    #[test]
    fn slots_are_laid_out_left_to_right() {
        let inventory = Inventory::with_capacity(DEFAULT_CAPACITY);
        assert_eq!(inventory.slot_position(0), Vec2::new(20.0, 620.0));
        assert_eq!(inventory.slot_position(2), Vec2::new(200.0, 620.0));
    }
}
