//! Animal domain — the wandering herd.
//!
//! Animals are ECS entities: an `Animal` component (species, age class),
//! a `WanderState` (the Idle/Moving state machine), and an
//! `AnimalAnimation` frame counter, all from `shared`. They are spawned
//! once at world start and never removed during a session.

use bevy::prelude::*;

use crate::shared::*;

mod movement;
mod rendering;
mod spawning;

pub use movement::*;
pub use rendering::*;
pub use spawning::*;

pub struct AnimalPlugin;

impl Plugin for AnimalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_initial_herd)
            .add_systems(
                Update,
                (handle_animal_wander, handle_animal_aging, animate_animals)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
