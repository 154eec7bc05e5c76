//! Initial tree placement at world start.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// How many trees the world starts with.
pub const INITIAL_TREE_COUNT: usize = 10;
/// Placement attempts per tree before giving up on it.
const PLACEMENT_ATTEMPTS: usize = 20;

/// Pick up to `INITIAL_TREE_COUNT` tree positions. Each candidate must
/// sit on a Grass tile and keep squared distance to the house center
/// above the clearance threshold; a tree that fails all its attempts is
/// simply skipped, so fewer than the full count can spawn.
pub fn plan_tree_positions(
    tile_grid: &TileGrid,
    house_center: Vec2,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    let mut positions = Vec::new();

    for _ in 0..INITIAL_TREE_COUNT {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = Vec2::new(
                rng.gen_range(50.0..WORLD_WIDTH - 100.0),
                rng.gen_range(50.0..WORLD_HEIGHT - 100.0),
            );

            if tile_grid.kind_at_world(pos) != TileKind::Grass {
                continue;
            }
            if (pos - house_center).length_squared()
                <= TREE_HOUSE_CLEARANCE * TREE_HOUSE_CLEARANCE
            {
                continue;
            }

            positions.push(pos);
            break;
        }
    }

    positions
}

pub fn spawn_initial_trees(
    tile_grid: Res<TileGrid>,
    house: Res<HouseLayout>,
    mut field: ResMut<FieldState>,
    mut rng: ResMut<GameRng>,
) {
    let positions = plan_tree_positions(&tile_grid, house.center(), &mut rng.0);
    if positions.len() < INITIAL_TREE_COUNT {
        debug!(
            "Only found {} of {} tree spots",
            positions.len(),
            INITIAL_TREE_COUNT
        );
    }
    for pos in positions {
        field.insert_spawned_tree(pos, &mut rng.0);
    }
    info!("Spawned {} trees", field.trees.len());
}
