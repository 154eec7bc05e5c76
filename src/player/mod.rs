mod movement;
mod spawn;
mod tools;

use bevy::prelude::*;

use crate::shared::*;

pub use movement::{apply_player_movement, handle_player_commands};
pub use spawn::spawn_player;
pub use tools::{target_tile, use_equipped_tool};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        app.add_systems(
            Update,
            (
                // Commands set the movement level state that apply reads.
                movement::handle_player_commands,
                movement::apply_player_movement.after(movement::handle_player_commands),
                movement::animate_player.after(movement::apply_player_movement),
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
