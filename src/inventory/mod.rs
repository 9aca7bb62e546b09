pub mod components;
pub mod events;
pub mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use crate::core::{FrameSet, states::AppState};
use crate::data::ItemCatalog;
use crate::media::audio::tick_audio;
use components::*;
use events::*;
use systems::*;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<Inventory>()
            .init_resource::<DrawList>()
            .init_resource::<ItemCatalog>()
            .add_event::<GiveItemEvent>()
            .add_event::<ListInventoryEvent>()
            .add_event::<ItemInput>()
            .add_systems(OnEnter(AppState::InGame), stock_starting_inventory)
            .add_systems(
                Update,
                (
                    (give_item, dispatch_item_input).chain().in_set(FrameSet::Act),
                    update_items.in_set(FrameSet::Simulate).after(tick_audio),
                    (render_inventory, print_inventory).in_set(FrameSet::Render),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
