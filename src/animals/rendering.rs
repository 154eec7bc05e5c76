//! Animal animation frame stepping.
//!
//! Placeholder sprites only change color and size, but the frame counter
//! and horizontal flip are kept authoritative here so swapping in real
//! sheets later is a rendering-only change.

use bevy::prelude::*;

use crate::shared::*;

pub fn animate_animals(
    time: Res<Time>,
    mut query: Query<(&WanderState, &mut AnimalAnimation, &mut Sprite)>,
) {
    for (wander, mut anim, mut sprite) in query.iter_mut() {
        // Idle animals hold frame 0; moving ones alternate two frames.
        let frame_count = if wander.moving { 2 } else { 1 };

        anim.timer.tick(time.delta());
        if anim.timer.just_finished() {
            anim.frame = (anim.frame + 1) % frame_count;
        }
        if anim.frame >= frame_count {
            anim.frame = 0;
        }

        sprite.flip_x = wander.moving && wander.facing == Facing::Left;
    }
}
