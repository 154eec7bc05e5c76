//! The two orthogonal axes of animal behavior: random-walk movement and
//! one-shot baby→adult growth.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Movement axis: Idle ⇄ Moving
// ─────────────────────────────────────────────────────────────────────────────

/// Advance one animal's wander state machine by `dt` seconds.
///
/// Idle: wait out `cooldown`, then enter Moving with a fresh duration and
/// a uniformly random facing (repeats allowed). Moving: displace by
/// `speed * dt` along the facing, clamped into world bounds, until
/// `move_duration` elapses, then re-enter Idle with a fresh cooldown.
pub fn wander_step(
    wander: &mut WanderState,
    pos: &mut Vec2,
    size: Vec2,
    speed: f32,
    dt: f32,
    rng: &mut impl Rng,
) {
    wander.phase_timer += dt;

    if wander.moving {
        if wander.phase_timer >= wander.move_duration {
            wander.moving = false;
            wander.phase_timer = 0.0;
            wander.cooldown =
                rng.gen_range(WANDER_COOLDOWN_RANGE.0..=WANDER_COOLDOWN_RANGE.1);
        } else {
            *pos += wander.facing.unit() * speed * dt;
            pos.x = pos.x.clamp(0.0, WORLD_WIDTH - size.x);
            pos.y = pos.y.clamp(0.0, WORLD_HEIGHT - size.y);
        }
    } else if wander.phase_timer >= wander.cooldown {
        wander.moving = true;
        wander.phase_timer = 0.0;
        wander.move_duration = rng.gen_range(WANDER_MOVE_RANGE.0..=WANDER_MOVE_RANGE.1);
        wander.facing = Facing::random(rng);
    }
}

pub fn handle_animal_wander(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(&Animal, &mut WanderState, &mut LogicalPosition)>,
) {
    let dt = time.delta_secs();
    for (animal, mut wander, mut logical_pos) in query.iter_mut() {
        wander_step(
            &mut wander,
            &mut logical_pos.0,
            animal.size(),
            animal.speed,
            dt,
            &mut rng.0,
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Growth axis: baby → adult, exactly once
// ─────────────────────────────────────────────────────────────────────────────

/// Age a baby by `dt` seconds. Returns true on the tick the animal
/// becomes an adult; adults return false forever after, so the
/// transition can never re-fire.
pub fn age_step(animal: &mut Animal, dt: f32) -> bool {
    if !animal.is_baby {
        return false;
    }
    animal.age += ANIMAL_GROWTH_RATE * dt;
    if animal.age >= 1.0 {
        animal.is_baby = false;
        animal.speed = ANIMAL_ADULT_SPEED;
        return true;
    }
    false
}

/// Applies aging and, on the transition tick, swaps the visual to the
/// adult size, color, and sprite set.
pub fn handle_animal_aging(
    time: Res<Time>,
    mut query: Query<(&mut Animal, &mut Sprite, &mut YSorted)>,
) {
    let dt = time.delta_secs();
    for (mut animal, mut sprite, mut ysorted) in query.iter_mut() {
        if age_step(&mut animal, dt) {
            sprite.custom_size = Some(animal.size());
            sprite.color = super::animal_color(&animal);
            ysorted.size = animal.size();
            info!("A {:?} has grown into an adult", animal.species);
        }
    }
}
