//! Mirrors `FieldState` into colored placeholder sprites.
//!
//! The collection is authoritative; sprites are spawned, restyled, and
//! despawned here to match it every frame. Depth comes from the same
//! `render_order` the collection exposes, so what tests assert about
//! ordering is exactly what gets painted.

use bevy::prelude::*;
use std::collections::HashSet;

use super::{FieldEntities, FieldSprite};
use crate::shared::*;

pub fn sync_field_sprites(
    mut commands: Commands,
    field: Res<FieldState>,
    mut field_entities: ResMut<FieldEntities>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<FieldSprite>>,
) {
    let mut seen: HashSet<u32> = HashSet::new();

    for renderable in field.render_order() {
        seen.insert(renderable.id);
        let (color, size, center) = styling(&renderable);
        let render = logical_to_render(center);
        let translation = Vec3::new(render.x, render.y, depth_to_z(renderable.depth));

        if let Some(&entity) = field_entities.by_id.get(&renderable.id) {
            if let Ok((mut sprite, mut transform)) = sprites.get_mut(entity) {
                sprite.color = color;
                sprite.custom_size = Some(size);
                transform.translation = translation;
            }
        } else {
            let entity = commands
                .spawn((
                    Sprite {
                        color,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_translation(translation),
                    FieldSprite { id: renderable.id },
                ))
                .id();
            field_entities.by_id.insert(renderable.id, entity);
        }
    }

    // Despawn mirrors of removed objects (felled trees).
    let stale: Vec<u32> = field_entities
        .by_id
        .keys()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();
    for id in stale {
        if let Some(entity) = field_entities.by_id.remove(&id) {
            commands.entity(entity).despawn();
        }
    }
}

/// Color, sprite size, and footprint-center for one field object.
fn styling(renderable: &FieldRenderable) -> (Color, Vec2, Vec2) {
    match &renderable.kind {
        FieldSpriteKind::Plant {
            species,
            growth_stage,
            watered,
        } => {
            let mut color = crop_stage_color(*species, *growth_stage);
            if *watered {
                // Blue shift stands in for the water indicator bar.
                color = color.mix(&Color::srgb(0.1, 0.3, 0.9), 0.2);
            }
            let center = renderable.pos + Vec2::splat(PLANT_SIZE / 2.0);
            (color, Vec2::splat(PLANT_SIZE), center)
        }
        FieldSpriteKind::Tree {
            growth_stage,
            cut_progress,
        } => {
            let size = tree_stage_size(*growth_stage);
            let mut color = tree_stage_color(*growth_stage);
            if *cut_progress > 0 {
                // Redden as cut progress builds, like the progress bar.
                let t = *cut_progress as f32 / TREE_CUT_THRESHOLD as f32;
                color = color.mix(&Color::srgb(0.8, 0.1, 0.1), 0.4 * t);
            }
            // Bottom-center aligned within the 64x96 footprint.
            let center = Vec2::new(
                renderable.pos.x + TREE_WIDTH / 2.0,
                renderable.pos.y + TREE_HEIGHT - size.y / 2.0,
            );
            (color, size, center)
        }
    }
}

/// Placeholder palette per species and stage.
pub fn crop_stage_color(species: CropSpecies, stage: u8) -> Color {
    let stage = stage.min(MAX_GROWTH_STAGE) as usize;
    let palette = match species {
        CropSpecies::Wheat => [
            Color::srgb(0.55, 0.27, 0.07),
            Color::srgb(0.80, 0.52, 0.25),
            Color::srgb(0.85, 0.65, 0.13),
            Color::srgb(1.0, 0.84, 0.0),
        ],
        CropSpecies::Carrot => [
            Color::srgb(0.55, 0.27, 0.07),
            Color::srgb(0.80, 0.52, 0.25),
            Color::srgb(1.0, 0.55, 0.0),
            Color::srgb(1.0, 0.27, 0.0),
        ],
        CropSpecies::Tomato => [
            Color::srgb(0.55, 0.27, 0.07),
            Color::srgb(0.13, 0.55, 0.13),
            Color::srgb(0.20, 0.80, 0.20),
            Color::srgb(1.0, 0.0, 0.0),
        ],
        CropSpecies::Generic => [
            Color::srgb(0.39, 0.39, 0.39),
            Color::srgb(0.59, 0.59, 0.59),
            Color::srgb(0.78, 0.78, 0.78),
            Color::srgb(0.98, 0.98, 0.98),
        ],
    };
    palette[stage]
}

/// Visual size per tree growth stage: sapling up to full canopy.
pub fn tree_stage_size(stage: u8) -> Vec2 {
    match stage.min(MAX_GROWTH_STAGE) {
        0 => Vec2::new(32.0, 48.0),
        1 => Vec2::new(48.0, 64.0),
        2 => Vec2::new(56.0, 80.0),
        _ => Vec2::new(64.0, 96.0),
    }
}

fn tree_stage_color(stage: u8) -> Color {
    // Young trees read lighter.
    match stage.min(MAX_GROWTH_STAGE) {
        0 => Color::srgb(0.42, 0.72, 0.30),
        1 => Color::srgb(0.33, 0.65, 0.25),
        2 => Color::srgb(0.25, 0.58, 0.20),
        _ => Color::srgb(0.13, 0.55, 0.13),
    }
}
