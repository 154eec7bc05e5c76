//! Tool-use dispatch onto the field collection.

use bevy::prelude::*;

use crate::shared::*;

/// Apply one tool use at a target tile. Returns whether anything changed:
/// - Axe: true only when the hit fells a mature tree (partial progress
///   is false).
/// - Hoe: plants wheat, but only on a Farmland tile and only if the spot
///   is free.
/// - WateringCan: true when a plant within range got watered.
///
/// Every failure is a plain `false` with no state change.
pub fn apply_tool(
    tool: Tool,
    tile: (i32, i32),
    pos: Vec2,
    tile_grid: &TileGrid,
    field: &mut FieldState,
) -> bool {
    match tool {
        Tool::Axe => field.chop(pos),
        Tool::Hoe => {
            if tile_grid.kind_at(tile.0, tile.1) != TileKind::Farmland {
                return false;
            }
            field.plant(pos, CropSpecies::Wheat)
        }
        Tool::WateringCan => field.water(pos),
    }
}

/// Consume `ToolUseEvent`s from the player domain.
pub fn handle_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    tile_grid: Res<TileGrid>,
    mut field: ResMut<FieldState>,
) {
    for event in tool_events.read() {
        let before = field.trees.len();
        let changed = apply_tool(
            event.tool,
            (event.tile_x, event.tile_y),
            event.pos,
            &tile_grid,
            &mut field,
        );

        if changed && field.trees.len() < before {
            info!("Tree felled at ({}, {})", event.tile_x, event.tile_y);
        } else {
            debug!(
                "Tool {:?} at tile ({}, {}): {}",
                event.tool,
                event.tile_x,
                event.tile_y,
                if changed { "ok" } else { "no effect" }
            );
        }
    }
}
