use bevy::prelude::*;

#[derive(Event)]
pub struct GiveItemEvent {
    pub id:    String,
    pub count: u32,
}

#[derive(Event)]
pub struct ListInventoryEvent;   // 让 CLI 请求打印背包

/// 对背包的输入，按到达顺序处理
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemInput {
    Select(usize),
    Use,
    Reload,
}
