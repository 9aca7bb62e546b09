use bevy::asset::{AssetLoader, LoadContext, io::Reader, ron};
use std::collections::HashSet;
use std::future::Future;
use thiserror::Error;

use super::schema::ItemList;

/// `data/items.ron` → `ItemList`，按资产类型匹配
#[derive(Default)]
pub struct ItemCatalogLoader;

#[derive(Debug, Error)]
pub enum ItemCatalogLoaderError {
    #[error("Could not read item catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse item catalog: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Duplicate item id `{0}`")]
    DuplicateId(String),
}

/// id 大小写不敏感，重复会让 give / 起始物品查到错误的原型
fn validate(list: &ItemList) -> Result<(), ItemCatalogLoaderError> {
    let mut seen = HashSet::new();
    for entry in &list.items {
        if !seen.insert(entry.id.to_ascii_lowercase()) {
            return Err(ItemCatalogLoaderError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}

impl AssetLoader for ItemCatalogLoader {
    type Asset = ItemList;
    type Settings = ();
    type Error = ItemCatalogLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let list: ItemList = ron::de::from_bytes(&bytes)?;
            validate(&list)?;
            bevy::log::debug!(
                "{} 中有 {} 个物品原型",
                load_context.path().display(),
                list.items.len()
            );

            Ok(list)
        }
    }
}
