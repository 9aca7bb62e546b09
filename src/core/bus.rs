//! 物品使用产生的信号队列
//!
//! 物品在 `use` 时只往总线上投递信号，由各消费系统每帧按种类取走。
//! 只保证同一种类内部的先后顺序。

use std::collections::VecDeque;
use std::collections::vec_deque;

use bevy::prelude::*;

use crate::character::components::Facing;
use crate::items::ItemId;

/// 子弹生成描述
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    pub x: f32,
    pub y: f32,
    pub direction: Facing,
    pub owner: Entity,
}

/// 信号，每次投递都构造新的值
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Drink { item: ItemId, heal_amount: u32 },
    Win,
    AmmoGranted { item: ItemId, amount: u32 },
    BulletSpawn(BulletSpawn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Drink,
    Win,
    AmmoGranted,
    BulletSpawn,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Drink { .. } => SignalKind::Drink,
            Signal::Win => SignalKind::Win,
            Signal::AmmoGranted { .. } => SignalKind::AmmoGranted,
            Signal::BulletSpawn(_) => SignalKind::BulletSpawn,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct EventBus {
    pending: VecDeque<Signal>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个信号，永不失败
    pub fn publish(&mut self, signal: Signal) {
        trace!("publish {:?}", signal.kind());
        self.pending.push_back(signal);
    }

    /// 取出某一种类的全部信号（按投递顺序），其余种类留在队列里
    pub fn drain(&mut self, kind: SignalKind) -> vec_deque::IntoIter<Signal> {
        let (matched, rest): (VecDeque<_>, VecDeque<_>) =
            self.pending.drain(..).partition(|s| s.kind() == kind);
        self.pending = rest;
        matched.into_iter()
    }

    /// 某一种类尚未被取走的数量
    pub fn pending(&self, kind: SignalKind) -> usize {
        self.pending.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
