//! Farming domain — planting, watering, tree chopping, growth.
//!
//! The authoritative state is the `FieldState` resource in `shared`;
//! this plugin advances it, applies tool use to it, and mirrors it into
//! sprite entities. Communicates with other domains exclusively through
//! crate::shared events/resources.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

pub mod actions;
pub mod growth;
pub mod render;
pub mod spawning;

/// Maps field object ids (plants and trees share one id space) to the
/// sprite entities mirroring them.
#[derive(Resource, Default, Debug)]
pub struct FieldEntities {
    pub by_id: HashMap<u32, Entity>,
}

/// Marker on a sprite entity mirroring one field object.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldSprite {
    pub id: u32,
}

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldEntities>()
            // World generation has already run in Loading, so tree
            // placement can query the finished grid here.
            .add_systems(OnEnter(GameState::Playing), spawning::spawn_initial_trees)
            .add_systems(
                Update,
                (actions::handle_tool_use, growth::tick_field_growth)
                    .run_if(in_state(GameState::Playing)),
            )
            // Visual sync runs after all state mutations.
            .add_systems(
                PostUpdate,
                render::sync_field_sprites.run_if(in_state(GameState::Playing)),
            );
    }
}
