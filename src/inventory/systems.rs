use super::{components::*, events::*};
use crate::character::components::{AmmoPool, Body, Player};
use crate::core::bus::EventBus;
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::data::{ItemCatalog, schema::ItemEntry};
use crate::items::{CHAMBER_CAPACITY, InventoryItem, RenderView, UpdateContext, UseContext};
use crate::media::UiFont;
use crate::media::audio::AudioOutput;
use crate::media::resolver::{AssetPaths, AssetResolver};
use bevy::prelude::*;

/// 按原型往背包里放 count 个新实例，返回实际放进去的数量
fn grant_items(
    inventory: &mut Inventory,
    entry: &ItemEntry,
    count: u32,
    assets: &dyn AssetResolver,
    config: &GameConfig,
) -> u32 {
    let mut given = 0;
    for _ in 0..count {
        match inventory.insert(entry.instantiate(assets, config)) {
            Ok(_) => given += 1,
            Err(e) => {
                warn!("背包已满，无法获得 {}: {e}", entry.name);
                break;
            }
        }
    }
    given
}

/// 进入游戏时放入起始物品
pub fn stock_starting_inventory(
    mut inventory: ResMut<Inventory>,
    catalog: Res<ItemCatalog>,
    assets: Res<AssetPaths>,
    config: Res<GameConfig>,
) {
    for id in &config.player.starting_items {
        match catalog.get(id) {
            Some(entry) => {
                grant_items(&mut inventory, entry, 1, &*assets, &config);
            }
            None => warn!("起始物品 {id} 不在物品表中"),
        }
    }
}

/// 处理 give：往背包里塞新物品
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut inventory: ResMut<Inventory>,
    catalog: Res<ItemCatalog>,
    assets: Res<AssetPaths>,
    config: Res<GameConfig>,
    mut log_event: EventWriter<LogEvent>,
) {
    for ev in ev_give.read() {
        let Some(entry) = catalog.find(&ev.id) else {
            log_event.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };
        let given = grant_items(&mut inventory, entry, ev.count, &*assets, &config);
        if given < ev.count {
            log_event.write(LogEvent("背包已满".to_string()));
        }
        if given > 0 {
            log_event.write(LogEvent(format!("获得 {} ×{}", entry.name, given)));
        }
    }
}

/// 把选择 / 使用 / 换弹输入交给当前选中的物品
pub fn dispatch_item_input(
    mut ev_input: EventReader<ItemInput>,
    mut inventory: ResMut<Inventory>,
    mut bus: ResMut<EventBus>,
    mut audio: ResMut<AudioOutput>,
    player_query: Query<(Entity, &Body, &AmmoPool), With<Player>>,
    mut log_event: EventWriter<LogEvent>,
) {
    let Ok((owner, body, ammo)) = player_query.single() else {
        ev_input.clear();
        return;
    };

    for &input in ev_input.read() {
        if let ItemInput::Select(index) = input {
            if !inventory.select(index) {
                log_event.write(LogEvent("背包索引超出范围".to_string()));
            }
            continue;
        }

        let Some(slot) = inventory.selected_slot_mut() else {
            log_event.write(LogEvent("该背包格为空".to_string()));
            continue;
        };
        let mut ctx = UseContext {
            item: slot.id,
            owner,
            body,
            ammo,
            bus: &mut *bus,
            audio: audio.backend_mut(),
        };
        match input {
            ItemInput::Use => slot.item.use_item(&mut ctx),
            ItemInput::Reload => slot.item.reload(&mut ctx),
            ItemInput::Select(_) => {}
        }
    }
}

/// 每帧推进物品状态（换弹计时），在绘制之前
pub fn update_items(
    time: Res<Time>,
    mut inventory: ResMut<Inventory>,
    audio: Res<AudioOutput>,
    mut player_query: Query<&mut AmmoPool, With<Player>>,
) {
    let Ok(mut ammo) = player_query.single_mut() else {
        return;
    };
    let mut ctx = UpdateContext {
        ammo: &mut *ammo,
        audio: audio.backend(),
        delta: time.delta(),
    };
    for slot in inventory.slots_mut() {
        slot.item.update(&mut ctx);
    }
}

/// 生成本帧的绘制指令
pub fn render_inventory(
    inventory: Res<Inventory>,
    font: Res<UiFont>,
    player_query: Query<&AmmoPool, With<Player>>,
    mut draw_list: ResMut<DrawList>,
) {
    let view = RenderView {
        ammo_available: player_query.single().map_or(0, |a| a.available),
        font: font.0.clone(),
    };

    draw_list.commands.clear();
    for (index, slot) in inventory.slots().iter().enumerate() {
        let selected = index == inventory.selected();
        let commands = slot
            .item
            .render(inventory.slot_position(index), selected, &view);
        draw_list.commands.extend(commands);
    }
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    inventory: Res<Inventory>,
    player_query: Query<&AmmoPool, With<Player>>,
    mut log_event: EventWriter<LogEvent>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let ammo = player_query.single().map_or(0, |a| a.available);
    log_event.write(LogEvent(format!(
        "背包 {}/{}，选中第 {} 格，备弹 {}",
        inventory.len(),
        inventory.capacity(),
        inventory.selected(),
        ammo
    )));

    if inventory.is_empty() {
        log_event.write(LogEvent("  (empty)".to_string()));
        return;
    }

    for (idx, slot) in inventory.slots().iter().enumerate() {
        let marker = if idx == inventory.selected() { '*' } else { ' ' };
        log_event.write(LogEvent(format!(
            "{marker}[{idx}] {}{}",
            slot.item.name(),
            describe(slot.item.as_ref(), ammo)
        )));
    }
}

fn describe(item: &dyn InventoryItem, ammo: u32) -> String {
    let Some(gun) = item.as_firearm() else {
        return String::new();
    };
    let mut out = format!(" 弹仓 {}/{}", gun.chamber(), CHAMBER_CAPACITY);
    if gun.is_reloading() {
        out.push_str(" (换弹中)");
    } else if let Some(hint) = gun.reload_hint(ammo) {
        out.push_str(&format!(" [{hint}]"));
    }
    out
}
