use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// 角色属性组件
#[derive(Component, Debug, Clone)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self { hp: 10, max_hp: 10 }
    }
}

impl Stats {
    pub fn new(max_hp: i32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// 恢复生命值
    pub fn heal(&mut self, amount: i32) {
        self.hp += amount;
        if self.hp > self.max_hp {
            self.hp = self.max_hp;
        }
    }
}

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// 朝向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// 角色包围盒（左上角 + 尺寸，屏幕坐标 y 向下）
#[derive(Component, Debug, Clone)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Body {
    /// 子弹出生点：朝向那一侧的边缘，纵向居中
    pub fn muzzle(&self) -> Vec2 {
        let x = match self.facing {
            Facing::Left => self.position.x,
            Facing::Right => self.position.x + self.size.x,
        };
        Vec2::new(x, self.position.y + self.size.y / 2.0)
    }
}

/// 备用弹药池，枪和弹药拾取物共享
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct AmmoPool {
    pub available: u32,
}

impl AmmoPool {
    pub fn new(available: u32) -> Self {
        Self { available }
    }

    pub fn grant(&mut self, amount: u32) {
        self.available = self.available.saturating_add(amount);
    }

    /// 最多取出 `wanted` 发，返回实际取出的数量
    pub fn take(&mut self, wanted: u32) -> u32 {
        let taken = wanted.min(self.available);
        self.available -= taken;
        taken
    }
}
