//! Tool targeting and dispatch.
//!
//! The player only decides *where* a tool lands; what it does to the
//! field is the farming domain's business, reached through
//! `ToolUseEvent`.

use bevy::prelude::*;

use crate::shared::*;

/// The grid cell one tile-step ahead of the player's center, in the
/// direction they face.
pub fn target_tile(player_pos: Vec2, facing: Facing) -> (i32, i32) {
    let center = player_pos + Vec2::splat(PLAYER_SIZE / 2.0);
    let (gx, gy) = world_to_grid(center);
    let (dx, dy) = facing.grid_offset();
    (gx + dx, gy + dy)
}

/// Fire a `ToolUseEvent` at the target tile if a tool is equipped.
/// Bare hands do nothing.
pub fn use_equipped_tool(
    player_state: &PlayerState,
    movement: &PlayerMovement,
    player_pos: Vec2,
    tool_events: &mut EventWriter<ToolUseEvent>,
) {
    let Some(tool) = player_state.equipped_tool else {
        return;
    };

    let (tile_x, tile_y) = target_tile(player_pos, movement.facing);
    tool_events.send(ToolUseEvent {
        tool,
        tile_x,
        tile_y,
        pos: grid_to_world(tile_x, tile_y),
    });
}
