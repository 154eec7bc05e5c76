//! One-shot world layout generation.
//!
//! Later steps overwrite earlier ones, so the order below matters:
//! grass → farmland → pond → path → beach pass → cliff bands → stones.
//! Shape (counts, sizes, band widths) is deterministic; exact placement
//! of cliffs and stones comes from the injected random source.

use rand::Rng;

use crate::shared::{TileGrid, TileKind};

/// Width of the stochastic cliff band along each edge, in tiles.
const CLIFF_BAND: i32 = 5;
/// Per-tile probability of a cliff inside the band.
const CLIFF_CHANCE: f64 = 0.7;
/// Number of stone scatter attempts (not guaranteed placements).
const STONE_ATTEMPTS: usize = 5;

const FARM_WIDTH: i32 = 8;
const FARM_HEIGHT: i32 = 6;
const POND_RADIUS: i32 = 3;

pub fn generate(grid: &mut TileGrid, rng: &mut impl Rng) {
    let w = grid.width;
    let h = grid.height;

    // 1. Grass everywhere.
    for y in 0..h {
        for x in 0..w {
            grid.set_kind(x, y, TileKind::Grass);
        }
    }

    // 2. Farmland block centered below the house anchor.
    let farm_cx = w / 2;
    let farm_cy = h / 2 + 3;
    for x in farm_cx - FARM_WIDTH / 2..farm_cx + FARM_WIDTH / 2 {
        for y in farm_cy - FARM_HEIGHT / 2..farm_cy + FARM_HEIGHT / 2 {
            grid.set_kind(x, y, TileKind::Farmland);
        }
    }

    // 3. Roughly circular pond to the side of the farmland.
    let pond_x = farm_cx + FARM_WIDTH;
    let pond_y = farm_cy;
    for x in pond_x - POND_RADIUS..pond_x + POND_RADIUS {
        for y in pond_y - POND_RADIUS..pond_y + POND_RADIUS {
            let d2 = (x - pond_x).pow(2) + (y - pond_y).pow(2);
            if d2 < POND_RADIUS.pow(2) {
                grid.set_kind(x, y, TileKind::Water);
            }
        }
    }

    // 4. Short path strip directly above the farmland.
    let path_y = farm_cy - FARM_HEIGHT / 2 - 1;
    for x in farm_cx - 4..farm_cx + 4 {
        grid.set_kind(x, path_y, TileKind::Path);
    }

    // 5. Beach: every grass tile 8-neighboring water. Water is finalized
    // by now, so this single pass is order-independent.
    let mut beach = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if grid.kind_at(x, y) != TileKind::Water {
                continue;
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx >= 0
                        && ny >= 0
                        && nx < w
                        && ny < h
                        && grid.kind_at(nx, ny) == TileKind::Grass
                    {
                        beach.push((nx, ny));
                    }
                }
            }
        }
    }
    for (x, y) in beach {
        grid.set_kind(x, y, TileKind::Beach);
    }

    // 6. Cliff bands along all four edges, independent 0.7 draws per tile.
    for x in 0..w {
        for y in 0..CLIFF_BAND {
            if rng.gen_bool(CLIFF_CHANCE) {
                grid.set_kind(x, y, TileKind::Cliff);
            }
        }
        for y in h - CLIFF_BAND..h {
            if rng.gen_bool(CLIFF_CHANCE) {
                grid.set_kind(x, y, TileKind::Cliff);
            }
        }
    }
    for y in 0..h {
        for x in 0..CLIFF_BAND {
            if rng.gen_bool(CLIFF_CHANCE) {
                grid.set_kind(x, y, TileKind::Cliff);
            }
        }
        for x in w - CLIFF_BAND..w {
            if rng.gen_bool(CLIFF_CHANCE) {
                grid.set_kind(x, y, TileKind::Cliff);
            }
        }
    }

    // 7. Stone scatter. Skips anything that is no longer grass, so the
    // final stone count is at most STONE_ATTEMPTS.
    for _ in 0..STONE_ATTEMPTS {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        if grid.kind_at(x, y) == TileKind::Grass {
            grid.set_kind(x, y, TileKind::Stone);
        }
    }
}

/// The farmland block's center tile, handy for placement sanity checks.
pub fn farm_center(grid: &TileGrid) -> (i32, i32) {
    (grid.width / 2, grid.height / 2 + 3)
}
