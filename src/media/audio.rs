//! 音频通道抽象
//!
//! 换弹时长由换弹音效所在通道是否仍在播放决定，每帧采样一次。

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;

use super::resolver::{AssetResolver, SoundHandle};
use crate::core::resources::AudioConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u8);

pub trait AudioBackend: Send + Sync {
    /// 随便找个空闲声道播放，不关心结束
    fn play(&mut self, sound: &SoundHandle) -> bool;
    /// 在指定通道播放，返回是否真的开始播放
    fn play_on(&mut self, channel: ChannelId, sound: &SoundHandle) -> bool;
    fn is_busy(&self, channel: ChannelId) -> bool;
    fn tick(&mut self, _delta: Duration) {}
}

/// 无声的音频后端：按配置里的时长模拟通道占用
#[derive(Debug, Default)]
pub struct SimulatedAudio {
    muted: bool,
    clips: HashMap<SoundHandle, Duration>,
    channels: HashMap<ChannelId, Duration>,
}

impl SimulatedAudio {
    pub fn from_config(config: &AudioConfig, resolver: &dyn AssetResolver) -> Self {
        let clips = config
            .clips
            .iter()
            .map(|(name, secs)| {
                (
                    resolver.load_sound(name),
                    Duration::from_secs_f32(secs.max(0.0)),
                )
            })
            .collect();
        Self {
            muted: config.muted,
            clips,
            channels: HashMap::new(),
        }
    }

    pub fn with_clip(mut self, sound: SoundHandle, length: Duration) -> Self {
        self.clips.insert(sound, length);
        self
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.channels.clear();
        }
    }

    fn audible(&self, sound: &SoundHandle) -> Option<Duration> {
        if self.muted {
            return None;
        }
        let length = self.clips.get(sound).copied();
        if length.is_none() {
            debug!("未知音效 {}", sound.0);
        }
        length
    }
}

impl AudioBackend for SimulatedAudio {
    fn play(&mut self, sound: &SoundHandle) -> bool {
        self.audible(sound).is_some()
    }

    fn play_on(&mut self, channel: ChannelId, sound: &SoundHandle) -> bool {
        let Some(length) = self.audible(sound) else {
            return false;
        };
        if length.is_zero() {
            self.channels.remove(&channel);
        } else {
            self.channels.insert(channel, length);
        }
        true
    }

    fn is_busy(&self, channel: ChannelId) -> bool {
        self.channels.contains_key(&channel)
    }

    fn tick(&mut self, delta: Duration) {
        self.channels.retain(|_, remaining| {
            *remaining = remaining.saturating_sub(delta);
            !remaining.is_zero()
        });
    }
}

/// 当前使用的音频后端
#[derive(Resource)]
pub struct AudioOutput(Box<dyn AudioBackend>);

impl AudioOutput {
    pub fn new(backend: impl AudioBackend + 'static) -> Self {
        Self(Box::new(backend))
    }

    pub fn backend(&self) -> &dyn AudioBackend {
        self.0.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn AudioBackend {
        self.0.as_mut()
    }
}

/// 推进音频通道的播放进度
pub fn tick_audio(time: Res<Time>, mut audio: ResMut<AudioOutput>) {
    audio.backend_mut().tick(time.delta());
}
