use bevy::prelude::*;

use crate::shared::*;

/// Where the player starts: roughly world center, just above the farm.
pub const PLAYER_START: Vec2 = Vec2::new(
    WORLD_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
    WORLD_HEIGHT / 2.0,
);

pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Sprite {
            color: Color::srgb(0.2, 0.4, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::default(),
        LogicalPosition(PLAYER_START),
        YSorted {
            size: Vec2::splat(PLAYER_SIZE),
        },
        Player,
        PlayerMovement::default(),
    ));

    info!("Player spawned at {PLAYER_START}");
}
