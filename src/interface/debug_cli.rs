//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::character::components::{AmmoPool, Facing, Player, Stats};
use crate::character::events::FaceEvent;
use crate::core::{FrameSet, events::LogEvent, states::AppState};
use crate::data::ItemCatalog;
use crate::inventory::components::DrawList;
use crate::inventory::events::{GiveItemEvent, ItemInput, ListInventoryEvent};
use crate::level::components::LevelBullets;

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if !line.is_empty() {
                        let mut buf = buffer.lock().expect("cli buffer poisoned");
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            .add_systems(
                Update,
                (
                    // 每帧从 buffer 取出所有命令行写入事件
                    read_stdin,
                    // 仅在 InGame 处理命令
                    execute_cli_commands.run_if(in_state(AppState::InGame)),
                )
                    .chain()
                    .in_set(FrameSet::Input),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give { id: String, count: u32 },
    Inventory,
    Select(usize),
    Use,
    Reload,
    Face(Facing),
    Draw,
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let mut buffer = CLI_BUFFER.lock().expect("cli buffer poisoned");
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    catalog: Res<ItemCatalog>,
    draw_list: Res<DrawList>,
    bullets: Res<LevelBullets>,
    player_query: Query<(&Stats, &AmmoPool), With<Player>>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_input: EventWriter<ItemInput>,
    mut ev_face: EventWriter<FaceEvent>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  items                  列出所有物品
  items <token>          用 id / uuid / 名称 查询单个物品
  give <id> <count>      给予物品
  inventory              查看物品栏
  select <slot>          选中物品格
  use                    使用选中的物品
  reload / r             给选中的枪换弹
  face <left|right>      改变朝向
  draw                   以 JSON 打印本帧绘制指令
  ".into()));
            }

            Command::Status => {
                let (hp, ammo) = player_query
                    .single()
                    .map_or((0, 0), |(stats, pool)| (stats.hp, pool.available));
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, HP: {}, Ammo: {}, Bullets: {}",
                    state.get(),
                    catalog.items.len(),
                    hp,
                    ammo,
                    bullets.bullets.len()
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(token) => match token {
                None => {
                    // 全部列出
                    for entry in &catalog.items {
                        log.write(LogEvent(format!(
                            "{} | {} | {}",
                            entry.uuid(),
                            entry.id,
                            entry.name
                        )));
                    }
                }
                Some(t) => {
                    if let Some(e) = catalog.find(&t) {
                        log.write(LogEvent(format!(
                            "==================================================
UUID   : {}
ID     : {}
Name   : {}
Kind   : {:?}
Heal   : {}
Amount : {}
==================================================",
                            e.uuid(),
                            e.id,
                            e.name,
                            e.kind,
                            e.heal,
                            e.amount
                        )));
                    } else {
                        log.write(LogEvent("未找到匹配物品".into()));
                    }
                }
            },

            Command::Give { id, count } => {
                ev_give.write(GiveItemEvent { id, count });
            }

            Command::Inventory => {
                ev_list.write(ListInventoryEvent);
            }

            Command::Select(index) => {
                ev_input.write(ItemInput::Select(index));
            }

            Command::Use => {
                ev_input.write(ItemInput::Use);
            }

            Command::Reload => {
                ev_input.write(ItemInput::Reload);
            }

            Command::Face(facing) => {
                ev_face.write(FaceEvent { facing });
            }

            // 打印的是上一帧的绘制结果
            Command::Draw => match serde_json::to_string_pretty(&*draw_list) {
                Ok(json) => {
                    log.write(LogEvent(json));
                }
                Err(e) => warn!("draw list serialization failed: {e}"),
            },

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "give" => {
            let id = parts.next().unwrap_or("").to_string();
            let cnt = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Give { id, count: cnt }
        }
        "inventory" | "inv" => Command::Inventory,
        "select" | "sel" => match parts.next().and_then(|s| s.parse().ok()) {
            Some(index) => Command::Select(index),
            None => Command::Unsupported(input.to_string()),
        },
        "use" | "u" => Command::Use,
        "reload" | "r" => Command::Reload,
        "face" => match parts.next().map(str::to_lowercase).as_deref() {
            Some("left" | "l") => Command::Face(Facing::Left),
            Some("right" | "r") => Command::Face(Facing::Right),
            _ => Command::Unsupported(input.to_string()),
        },
        "draw" => Command::Draw,
        other => Command::Unsupported(other.into()),
    }
}
