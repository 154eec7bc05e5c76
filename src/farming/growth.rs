//! Growth state machines for plants and trees.
//!
//! Both use the same threshold-crossing policy: the accumulator is reset
//! to zero on each crossing and the remainder is dropped, so at most one
//! stage advances per tick no matter how large `dt` is. A long pause
//! never fast-forwards growth.

use bevy::prelude::*;

use crate::shared::*;

/// Advance one plant by `dt` seconds: drain water, then grow (watered
/// plants grow at double rate).
pub fn advance_plant(plant: &mut PlantInstance, dt: f32) {
    if plant.watered {
        plant.water_level -= WATER_DRAIN_RATE * dt;
        if plant.water_level <= 0.0 {
            plant.watered = false;
            plant.water_level = 0.0;
        }
    }

    if plant.growth_stage < MAX_GROWTH_STAGE {
        let multiplier = if plant.watered { 2.0 } else { 1.0 };
        plant.growth_timer += CROP_GROWTH_RATE * multiplier * dt;
        if plant.growth_timer >= 1.0 {
            plant.growth_timer = 0.0;
            plant.growth_stage += 1;
        }
    }
}

/// Advance one tree by `dt` seconds. No watering interaction; slower rate.
pub fn advance_tree(tree: &mut TreeInstance, dt: f32) {
    if tree.growth_stage < MAX_GROWTH_STAGE {
        tree.growth_timer += TREE_GROWTH_RATE * dt;
        if tree.growth_timer >= 1.0 {
            tree.growth_timer = 0.0;
            tree.growth_stage += 1;
        }
    }
}

/// Advance every owned plant and tree. No ordering dependency between
/// entities; nothing is inserted or removed here.
pub fn advance_field(field: &mut FieldState, dt: f32) {
    for plant in field.plants.iter_mut() {
        advance_plant(plant, dt);
    }
    for tree in field.trees.iter_mut() {
        advance_tree(tree, dt);
    }
}

/// Per-frame system wrapper around [`advance_field`].
pub fn tick_field_growth(time: Res<Time>, mut field: ResMut<FieldState>) {
    advance_field(&mut field, time.delta_secs());
}
