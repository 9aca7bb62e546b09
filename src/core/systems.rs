use super::bus::{EventBus, SignalKind};
use super::events::LogEvent;
use super::states::AppState;
use bevy::prelude::*;

/// 消费 Win 信号：切到胜利状态
pub fn handle_win(
    mut bus: ResMut<EventBus>,
    mut next: ResMut<NextState<AppState>>,
    mut log_event: EventWriter<LogEvent>,
) {
    if bus.drain(SignalKind::Win).count() == 0 {
        return;
    }
    info!("win signal received");
    log_event.write(LogEvent("墨盒已装入，你赢了！".to_string()));
    next.set(AppState::Victory);
}
