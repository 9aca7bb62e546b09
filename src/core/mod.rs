use bevy::prelude::*;

pub mod bus;
pub mod events;
pub mod resources;
pub mod states;
pub mod systems;

use resources::GameConfig;

/// 每帧的固定阶段：读输入 → 作用到物品 → 推进计时 → 消费信号 → 绘制
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Act,
    Simulate,
    Consume,
    Render,
}

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin {
    pub config: GameConfig,
}

impl CorePlugin {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app.init_state::<AppState>()
            .insert_resource(self.config.clone())
            .init_resource::<bus::EventBus>()
            .add_event::<events::LogEvent>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Act,
                    FrameSet::Simulate,
                    FrameSet::Consume,
                    FrameSet::Render,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::handle_win
                    .in_set(FrameSet::Consume)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(Last, events::forward_log_event);
    }
}
