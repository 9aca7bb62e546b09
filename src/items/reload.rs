//! 换弹计时
//!
//! 正常情况下换弹时长就是换弹音效的长度：每帧看一眼通道是否还在播放。
//! 音效放不出来（静音、缺素材）时退回固定时长的计时器，避免永远卡在换弹中。

use std::time::Duration;

use bevy::prelude::*;

use crate::media::audio::{AudioBackend, ChannelId};
use crate::media::resolver::SoundHandle;

/// 换弹音效及其兜底时长
#[derive(Debug, Clone)]
pub struct ReloadCue {
    pub sound: SoundHandle,
    pub channel: ChannelId,
    pub fallback: Duration,
}

#[derive(Debug, Clone, Default)]
pub enum ReloadTimer {
    #[default]
    Idle,
    /// 等待音频通道空闲
    Cue(ChannelId),
    Fallback(Timer),
}

impl ReloadTimer {
    pub fn is_active(&self) -> bool {
        !matches!(self, ReloadTimer::Idle)
    }

    pub fn start(&mut self, cue: &ReloadCue, audio: &mut dyn AudioBackend) {
        *self = if audio.play_on(cue.channel, &cue.sound) {
            ReloadTimer::Cue(cue.channel)
        } else {
            warn!(
                "reload cue {} unavailable, using {:?} fallback",
                cue.sound.0, cue.fallback
            );
            ReloadTimer::Fallback(Timer::new(cue.fallback, TimerMode::Once))
        };
    }

    /// 完成的那一帧返回 true，之后回到 Idle
    pub fn poll(&mut self, audio: &dyn AudioBackend, delta: Duration) -> bool {
        let done = match self {
            ReloadTimer::Idle => return false,
            ReloadTimer::Cue(channel) => !audio.is_busy(*channel),
            ReloadTimer::Fallback(timer) => timer.tick(delta).finished(),
        };
        if done {
            *self = ReloadTimer::Idle;
        }
        done
    }
}
