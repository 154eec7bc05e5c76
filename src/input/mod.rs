//! The single point where hardware input becomes `PlayerCommand` events.
//!
//! Held movement keys are edge-detected against the previous frame so a
//! direction fires exactly one command when it changes, and StopMoving
//! fires once when all movement keys are released. Everything downstream
//! of this module is keyboard-free and therefore drivable from tests by
//! writing events directly.

use bevy::prelude::*;

use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldDirection>();
        app.add_systems(
            PreUpdate,
            read_gameplay_input.run_if(in_state(GameState::Playing)),
        );
        app.add_systems(Update, toggle_pause);
    }
}

/// The movement direction emitted last frame, for change detection.
#[derive(Resource, Debug, Default, PartialEq, Eq)]
struct HeldDirection(Option<Facing>);

fn read_gameplay_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut held: ResMut<HeldDirection>,
    mut commands: EventWriter<PlayerCommand>,
) {
    // Movement: last vertical key wins over horizontal, matching the
    // facing bias for a top-down farm (approaching plots head-on).
    let mut direction = None;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        direction = Some(Facing::Left);
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        direction = Some(Facing::Right);
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        direction = Some(Facing::Up);
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        direction = Some(Facing::Down);
    }

    if direction != held.0 {
        held.0 = direction;
        commands.send(match direction {
            Some(Facing::Up) => PlayerCommand::MoveUp,
            Some(Facing::Down) => PlayerCommand::MoveDown,
            Some(Facing::Left) => PlayerCommand::MoveLeft,
            Some(Facing::Right) => PlayerCommand::MoveRight,
            None => PlayerCommand::StopMoving,
        });
    }

    // Tool slots 1-3.
    for (slot, key) in [
        (1u8, KeyCode::Digit1),
        (2, KeyCode::Digit2),
        (3, KeyCode::Digit3),
    ] {
        if keys.just_pressed(key) {
            commands.send(PlayerCommand::SelectTool(slot));
        }
    }

    // Tool use is edge-triggered on both ends of the press.
    if keys.just_pressed(KeyCode::Space) {
        commands.send(PlayerCommand::UseToolStart);
    }
    if keys.just_released(KeyCode::Space) {
        commands.send(PlayerCommand::UseToolEnd);
    }
}

fn toggle_pause(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
        GameState::Loading => {}
    }
}
