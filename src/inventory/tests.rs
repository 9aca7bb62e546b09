//! 背包 + 信号消费方的整帧测试

use std::time::Duration;

use bevy::prelude::*;

use super::components::{DrawList, Inventory};
use super::events::{GiveItemEvent, ItemInput};
use crate::character::components::{Facing, Stats};
use crate::character::events::FaceEvent;
use crate::core::bus::EventBus;
use crate::core::resources::GameConfig;
use crate::core::states::AppState;
use crate::data::ItemCatalog;
use crate::data::schema::ItemList;
use crate::items::{
    AmmoPickup, CHAMBER_CAPACITY, Firearm, FirearmState, ItemId, ItemInfo, Potion, ReloadCue,
    WinCartridge,
};
use crate::level::components::LevelBullets;
use crate::media::UiFont;
use crate::media::audio::ChannelId;
use crate::media::resolver::{IconHandle, SoundHandle};
use crate::test_helpers::{ammo, build_test_app, give, player, set_ammo};

fn info(name: &str, icon: &str) -> ItemInfo {
    ItemInfo::new(name, IconHandle(format!("textures/items/{icon}")))
}

fn pistol() -> Firearm {
    Firearm::new(
        info("Pistol", "gun.png"),
        ReloadCue {
            sound: SoundHandle("sounds/player/reload.wav".into()),
            channel: ChannelId(3),
            fallback: Duration::from_secs(60),
        },
    )
}

fn press(app: &mut App, input: ItemInput) {
    app.world_mut().send_event(input);
    app.update();
}

fn firearm_state(app: &App, id: ItemId) -> Option<FirearmState> {
    app.world()
        .resource::<Inventory>()
        .get(id)
        .and_then(|item| item.as_firearm())
        .map(Firearm::state)
}

#[test]
fn drinking_a_potion_heals_and_removes_it() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    let entity = player(&mut app);
    app.world_mut().get_mut::<Stats>(entity).unwrap().hp = 4;
    let potion = give(
        &mut app,
        Potion::new(
            info("Potion", "potion.png"),
            2,
            SoundHandle("sounds/player/gulp.wav".into()),
        ),
    );

    press(&mut app, ItemInput::Use);

    assert_eq!(app.world().get::<Stats>(entity).unwrap().hp, 6);
    assert!(app.world().resource::<Inventory>().get(potion).is_none());
    assert!(app.world().resource::<EventBus>().is_empty());
}

#[test]
fn potion_used_twice_in_one_frame_heals_once() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    let entity = player(&mut app);
    app.world_mut().get_mut::<Stats>(entity).unwrap().hp = 4;
    let potion = give(
        &mut app,
        Potion::new(
            info("Potion", "potion.png"),
            2,
            SoundHandle("sounds/player/gulp.wav".into()),
        ),
    );

    app.world_mut().send_event(ItemInput::Use);
    app.world_mut().send_event(ItemInput::Use);
    app.update();

    assert_eq!(app.world().get::<Stats>(entity).unwrap().hp, 6);
    assert!(app.world().resource::<Inventory>().get(potion).is_none());
}

#[test]
fn inventory_and_font_follow_config() {
    let mut config = GameConfig::default();
    config.inventory.capacity = 2;
    config.inventory.slot_origin = [0.0, 10.0];
    config.ui.font = "mono.ttf".to_string();
    let (mut app, _audio) = build_test_app(config);
    let list: ItemList =
        bevy::asset::ron::de::from_str(include_str!("../../assets/data/items.ron")).unwrap();
    app.insert_resource(ItemCatalog::new(list.items));

    app.world_mut().send_event(GiveItemEvent {
        id: "potion".to_string(),
        count: 3,
    });
    app.update();

    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.capacity(), 2);
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.slot_position(1), Vec2::new(90.0, 10.0));
    assert_eq!(app.world().resource::<UiFont>().0.path, "fonts/mono.ttf");
}

#[test]
fn ammo_pickup_fills_the_pool() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    assert_eq!(ammo(&mut app), 0);
    let pickup = give(&mut app, AmmoPickup::new(info("Ammo", "ammo.png"), 10));

    press(&mut app, ItemInput::Use);

    assert_eq!(ammo(&mut app), 10);
    assert!(app.world().resource::<Inventory>().get(pickup).is_none());
}

#[test]
fn firing_spawns_bullet_at_the_player_edge() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    let gun = give(&mut app, pistol());

    app.world_mut().send_event(FaceEvent {
        facing: Facing::Left,
    });
    press(&mut app, ItemInput::Use);

    let bullets = &app.world().resource::<LevelBullets>().bullets;
    assert_eq!(bullets.len(), 1);
    // 默认玩家盒子：(100, 400) 大小 40×80
    assert_eq!(bullets[0].position, Vec2::new(100.0, 440.0));
    assert_eq!(bullets[0].direction, Facing::Left);
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::Loaded(2)));
}

#[test]
fn reload_completes_when_the_cue_stops() {
    let (mut app, audio) = build_test_app(GameConfig::default());
    let gun = give(&mut app, pistol());
    for _ in 0..CHAMBER_CAPACITY + 1 {
        press(&mut app, ItemInput::Use);
    }
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::EmptyIdle));
    assert_eq!(app.world().resource::<LevelBullets>().bullets.len(), 3);

    set_ammo(&mut app, 5);
    press(&mut app, ItemInput::Reload);
    assert!(audio.is_playing());
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::Reloading));

    app.update();
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::Reloading));
    assert_eq!(ammo(&mut app), 5);

    audio.finish();
    app.update();
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::Loaded(3)));
    assert_eq!(ammo(&mut app), 2);
}

#[test]
fn win_cartridge_moves_to_victory() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    give(&mut app, WinCartridge::new(info("Magenta Ink Cartridge", "magenta_cartridge.png")));

    press(&mut app, ItemInput::Use);
    app.update();

    assert_eq!(
        app.world().resource::<State<AppState>>().get(),
        &AppState::Victory
    );
}

#[test]
fn selection_picks_which_item_is_used() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    let gun = give(&mut app, pistol());
    give(&mut app, AmmoPickup::new(info("Ammo", "ammo.png"), 4));

    press(&mut app, ItemInput::Select(1));
    press(&mut app, ItemInput::Use);

    assert_eq!(ammo(&mut app), 4);
    assert_eq!(firearm_state(&app, gun), Some(FirearmState::Loaded(3)));

    // 选中空格 / 越界都不会出错
    press(&mut app, ItemInput::Select(4));
    press(&mut app, ItemInput::Use);
    press(&mut app, ItemInput::Select(99));
    assert_eq!(app.world().resource::<Inventory>().selected(), 4);
}

#[test]
fn draw_list_follows_selection() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    give(&mut app, pistol().with_chamber(0).unwrap());
    give(&mut app, AmmoPickup::new(info("Ammo", "ammo.png"), 4));
    app.update();

    let texts: Vec<String> = app
        .world()
        .resource::<DrawList>()
        .commands
        .iter()
        .filter_map(|c| c.text().map(str::to_owned))
        .collect();
    assert_eq!(texts, vec!["Pistol", "0", "No ammo"]);

    set_ammo(&mut app, 1);
    press(&mut app, ItemInput::Select(1));
    let draw_list = app.world().resource::<DrawList>();
    let texts: Vec<&str> = draw_list.commands.iter().filter_map(|c| c.text()).collect();
    assert_eq!(texts, vec!["0", "'R' to reload", "Ammo"]);
    assert_eq!(draw_list.commands.len(), 5);
}

#[test]
fn give_uses_the_catalog() {
    let (mut app, _audio) = build_test_app(GameConfig::default());
    let list: ItemList =
        bevy::asset::ron::de::from_str(include_str!("../../assets/data/items.ron")).unwrap();
    app.insert_resource(ItemCatalog::new(list.items));

    app.world_mut().send_event(GiveItemEvent {
        id: "potion".to_string(),
        count: 2,
    });
    app.world_mut().send_event(GiveItemEvent {
        id: "Pistol".to_string(),
        count: 9,
    });
    app.update();

    let inventory = app.world().resource::<Inventory>();
    let names: Vec<&str> = inventory.slots().iter().map(|s| s.item.name()).collect();
    assert_eq!(names, vec!["Potion", "Potion", "Pistol", "Pistol", "Pistol"]);
}
