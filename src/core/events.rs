use bevy::prelude::*;

/// 面向玩家的一行输出（CLI 打印）
#[derive(Event, Debug, Clone)]
pub struct LogEvent(pub String);

/// 每帧把 LogEvent 打到 stdout
pub fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
