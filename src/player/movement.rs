//! Command handling and continuous movement for the player.
//!
//! The input layer translates raw keys into `PlayerCommand` events;
//! nothing here touches the keyboard. Movement commands set level state
//! (facing + is_moving) that `apply_player_movement` integrates each
//! frame, so a single MoveLeft keeps the player walking until
//! StopMoving arrives.

use bevy::prelude::*;

use crate::shared::*;

pub fn handle_player_commands(
    mut commands: EventReader<PlayerCommand>,
    mut player_state: ResMut<PlayerState>,
    mut tool_events: EventWriter<ToolUseEvent>,
    mut query: Query<(&mut PlayerMovement, &LogicalPosition), With<Player>>,
) {
    let Ok((mut movement, logical_pos)) = query.get_single_mut() else {
        return;
    };

    for command in commands.read().copied() {
        match command {
            PlayerCommand::MoveUp => {
                movement.facing = Facing::Up;
                movement.is_moving = true;
            }
            PlayerCommand::MoveDown => {
                movement.facing = Facing::Down;
                movement.is_moving = true;
            }
            PlayerCommand::MoveLeft => {
                movement.facing = Facing::Left;
                movement.is_moving = true;
            }
            PlayerCommand::MoveRight => {
                movement.facing = Facing::Right;
                movement.is_moving = true;
            }
            PlayerCommand::StopMoving => {
                movement.is_moving = false;
            }
            PlayerCommand::SelectTool(slot) => {
                player_state.equipped_tool = match slot {
                    1 => Some(Tool::Axe),
                    2 => Some(Tool::Hoe),
                    3 => Some(Tool::WateringCan),
                    _ => None,
                };
                debug!("Equipped tool: {:?}", player_state.equipped_tool);
            }
            PlayerCommand::UseToolStart => {
                movement.is_acting = true;
                super::use_equipped_tool(
                    &player_state,
                    &movement,
                    logical_pos.0,
                    &mut tool_events,
                );
            }
            PlayerCommand::UseToolEnd => {
                movement.is_acting = false;
            }
        }
    }
}

pub fn apply_player_movement(
    time: Res<Time>,
    mut query: Query<(&PlayerMovement, &mut LogicalPosition), With<Player>>,
) {
    let Ok((movement, mut logical_pos)) = query.get_single_mut() else {
        return;
    };
    // Tool swings root the player in place.
    if !movement.is_moving || movement.is_acting {
        return;
    }

    let pos = &mut logical_pos.0;
    *pos += movement.facing.unit() * movement.speed * time.delta_secs();
    pos.x = pos.x.clamp(0.0, WORLD_WIDTH - PLAYER_SIZE);
    pos.y = pos.y.clamp(0.0, WORLD_HEIGHT - PLAYER_SIZE);
}

/// Walk cycle: 4 frames while moving, frame 0 at rest. Acting overrides
/// the walk with a 2-frame swing loop.
pub fn animate_player(time: Res<Time>, mut query: Query<&mut PlayerMovement, With<Player>>) {
    let Ok(mut movement) = query.get_single_mut() else {
        return;
    };

    let frame_count = if movement.is_acting {
        2
    } else if movement.is_moving {
        4
    } else {
        movement.anim_frame = 0;
        movement.anim_timer.reset();
        return;
    };

    movement.anim_timer.tick(time.delta());
    if movement.anim_timer.just_finished() {
        movement.anim_frame = (movement.anim_frame + 1) % frame_count;
    }
    if movement.anim_frame >= frame_count {
        movement.anim_frame = 0;
    }
}
