//! World domain plugin for Sproutvale.
//!
//! Responsible for:
//! - Generating the tile grid (once, during `GameState::Loading`)
//! - Spawning the static tile and house sprites
//! - Syncing `LogicalPosition` → `Transform` with y-sort depth

use bevy::prelude::*;

use crate::shared::*;

pub mod grid;
pub mod ysort;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            finish_world_loading.run_if(in_state(GameState::Loading)),
        )
        .add_systems(OnEnter(GameState::Playing), (spawn_tile_sprites, spawn_house))
        // Runs after every movement/growth system has written positions.
        .add_systems(PostUpdate, ysort::sync_position_and_ysort);
    }
}

/// Marker for a spawned tile sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct WorldTile {
    pub grid_x: i32,
    pub grid_y: i32,
}

/// Marker for the house sprite.
#[derive(Component, Debug)]
pub struct House;

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Generate the world grid and hand control to `Playing`. Runs exactly
/// once: the state transition takes it out of the schedule.
fn finish_world_loading(
    mut tile_grid: ResMut<TileGrid>,
    mut rng: ResMut<GameRng>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    grid::generate(&mut tile_grid, &mut rng.0);
    info!(
        "World generated: {}x{} tiles",
        tile_grid.width, tile_grid.height
    );
    next_state.set(GameState::Playing);
}

/// One colored sprite per tile. The grid never changes shape after
/// generation, so these are spawned once and left alone.
fn spawn_tile_sprites(mut commands: Commands, tile_grid: Res<TileGrid>) {
    for y in 0..tile_grid.height {
        for x in 0..tile_grid.width {
            let kind = tile_grid.kind_at(x, y);
            let center = grid_to_world(x, y) + Vec2::splat(TILE_SIZE / 2.0);
            let render = logical_to_render(center);
            commands.spawn((
                Sprite {
                    color: tile_color(kind),
                    custom_size: Some(Vec2::splat(TILE_SIZE)),
                    ..default()
                },
                Transform::from_xyz(render.x, render.y, Z_TILE),
                WorldTile {
                    grid_x: x,
                    grid_y: y,
                },
            ));
        }
    }
}

/// The house draws above tiles and below all y-sorted entities.
fn spawn_house(mut commands: Commands, house: Res<HouseLayout>) {
    let center = house.center();
    let render = logical_to_render(center);
    commands.spawn((
        Sprite {
            color: Color::srgb(0.65, 0.16, 0.16),
            custom_size: Some(house.size),
            ..default()
        },
        Transform::from_xyz(render.x, render.y, Z_HOUSE),
        House,
    ));
}

/// Placeholder palette until real tile art lands.
pub fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Grass => Color::srgb(0.13, 0.55, 0.13),
        TileKind::Farmland => Color::srgb(0.55, 0.27, 0.07),
        TileKind::Water => Color::srgb(0.12, 0.56, 1.0),
        TileKind::Stone => Color::srgb(0.66, 0.66, 0.66),
        TileKind::Path => Color::srgb(0.82, 0.71, 0.55),
        TileKind::Beach => Color::srgb(0.93, 0.84, 0.69),
        TileKind::Cliff => Color::srgb(0.41, 0.41, 0.41),
    }
}
