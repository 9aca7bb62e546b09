pub mod loader;
pub mod schema;

use bevy::prelude::*;
use schema::{ItemEntry, ItemList};
use crate::core::states::AppState;

/// 物品表路径（相对 assets/）
pub const ITEM_LIST_PATH: &str = "data/items.ron";

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct ItemAssets {
    handle: Option<Handle<ItemList>>,
}

/// 载入完成后的物品表
#[derive(Resource, Debug, Clone, Default)]
pub struct ItemCatalog {
    pub items: Vec<ItemEntry>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemEntry>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&ItemEntry> {
        self.items.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }

    /// 按 id / 名称 / uuid 查找
    pub fn find(&self, token: &str) -> Option<&ItemEntry> {
        let t_low = token.to_lowercase();
        self.items.iter().find(|e| {
            e.id.eq_ignore_ascii_case(&t_low)
                || e.name.eq_ignore_ascii_case(&t_low)
                || e.uuid().to_string() == t_low
        })
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<ItemList>()
            .register_asset_loader(loader::ItemCatalogLoader)
            .init_resource::<ItemAssets>()
            .init_resource::<ItemCatalog>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut item_assets: ResMut<ItemAssets>,
    asset_server: Res<AssetServer>,
) {
    let handle: Handle<ItemList> = asset_server.load(ITEM_LIST_PATH);
    item_assets.handle = Some(handle);
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    mut catalog: ResMut<ItemCatalog>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
) {
    if let Some(h) = &item_assets.handle {
        if let Some(list) = lists.get(h) {
            info!("物品表已载入：{} 项", list.items.len());
            *catalog = ItemCatalog::new(list.items.clone());
            next.set(AppState::InGame);
        }
    }
}
