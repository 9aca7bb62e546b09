use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::character::CharacterPlugin;
use crate::character::components::{AmmoPool, Body, Facing, Player};
use crate::core::bus::EventBus;
use crate::core::resources::GameConfig;
use crate::core::states::AppState;
use crate::core::CorePlugin;
use crate::inventory::InventoryPlugin;
use crate::inventory::components::Inventory;
use crate::items::{InventoryItem, ItemId, UpdateContext, UseContext};
use crate::level::LevelPlugin;
use crate::media::MediaPlugin;
use crate::media::audio::{AudioBackend, AudioOutput, ChannelId, SimulatedAudio};
use crate::media::resolver::SoundHandle;

pub const RELOAD_CLIP: Duration = Duration::from_millis(300);

/// 脱离 ECS 直接驱动单个物品
pub struct ItemHarness {
    pub bus: EventBus,
    pub ammo: AmmoPool,
    pub body: Body,
    pub audio: SimulatedAudio,
    pub owner: Entity,
    pub item: ItemId,
}

impl ItemHarness {
    pub fn new(ammo: u32) -> Self {
        Self {
            bus: EventBus::new(),
            ammo: AmmoPool::new(ammo),
            body: Body {
                position: Vec2::new(100.0, 400.0),
                size: Vec2::new(40.0, 80.0),
                facing: Facing::Right,
            },
            audio: SimulatedAudio::default()
                .with_clip(SoundHandle("sounds/player/reload.wav".into()), RELOAD_CLIP)
                .with_clip(
                    SoundHandle("sounds/player/gulp.wav".into()),
                    Duration::from_millis(100),
                ),
            owner: Entity::PLACEHOLDER,
            item: ItemId(1),
        }
    }

    pub fn use_item(&mut self, item: &mut dyn InventoryItem) {
        let mut ctx = self.use_context();
        item.use_item(&mut ctx);
    }

    pub fn reload(&mut self, item: &mut dyn InventoryItem) {
        let mut ctx = self.use_context();
        item.reload(&mut ctx);
    }

    /// 先推进音频，再推进物品，和帧内顺序一致
    pub fn update(&mut self, item: &mut dyn InventoryItem, delta: Duration) {
        self.audio.tick(delta);
        let mut ctx = UpdateContext {
            ammo: &mut self.ammo,
            audio: &self.audio,
            delta,
        };
        item.update(&mut ctx);
    }

    fn use_context(&mut self) -> UseContext<'_> {
        UseContext {
            item: self.item,
            owner: self.owner,
            body: &self.body,
            ammo: &self.ammo,
            bus: &mut self.bus,
            audio: &mut self.audio,
        }
    }
}

/// 由测试手动控制的换弹通道
#[derive(Clone, Default)]
pub struct ScriptedAudio {
    busy: Arc<AtomicBool>,
}

impl ScriptedAudio {
    pub fn finish(&self) {
        self.busy.store(false, Ordering::SeqCst);
    }

    pub fn is_playing(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

impl AudioBackend for ScriptedAudio {
    fn play(&mut self, _sound: &SoundHandle) -> bool {
        true
    }

    fn play_on(&mut self, _channel: ChannelId, _sound: &SoundHandle) -> bool {
        self.busy.store(true, Ordering::SeqCst);
        true
    }

    fn is_busy(&self, _channel: ChannelId) -> bool {
        self.is_playing()
    }
}

/// 无窗口的测试 App，已进入 InGame，玩家已生成
pub fn build_test_app(config: GameConfig) -> (App, ScriptedAudio) {
    let audio = ScriptedAudio::default();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(CorePlugin::new(config))
        .add_plugins((MediaPlugin, CharacterPlugin, InventoryPlugin, LevelPlugin))
        .insert_resource(AudioOutput::new(audio.clone()));

    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();

    (app, audio)
}

pub fn player(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world()).expect("player spawned")
}

pub fn ammo(app: &mut App) -> u32 {
    let entity = player(app);
    app.world().get::<AmmoPool>(entity).map_or(0, |a| a.available)
}

pub fn set_ammo(app: &mut App, available: u32) {
    let entity = player(app);
    app.world_mut()
        .entity_mut(entity)
        .insert(AmmoPool::new(available));
}

pub fn give(app: &mut App, item: impl InventoryItem) -> ItemId {
    app.world_mut()
        .resource_mut::<Inventory>()
        .insert(Box::new(item))
        .expect("inventory has room")
}
