//! Initial herd spawning.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Fixed spawn table: (species, is_baby, count).
pub const HERD_PLAN: [(AnimalSpecies, bool, usize); 6] = [
    (AnimalSpecies::Chicken, false, 3),
    (AnimalSpecies::Chicken, true, 2),
    (AnimalSpecies::Cow, false, 2),
    (AnimalSpecies::Cow, true, 1),
    (AnimalSpecies::Sheep, false, 2),
    (AnimalSpecies::Sheep, true, 1),
];

/// Margin from the world edges for initial placement, in pixels.
const SPAWN_MARGIN: f32 = 100.0;

/// Roll randomized positions for the whole spawn table.
pub fn plan_herd(rng: &mut impl Rng) -> Vec<(AnimalSpecies, bool, Vec2)> {
    let mut herd = Vec::new();
    for (species, is_baby, count) in HERD_PLAN {
        for _ in 0..count {
            let pos = Vec2::new(
                rng.gen_range(SPAWN_MARGIN..WORLD_WIDTH - SPAWN_MARGIN),
                rng.gen_range(SPAWN_MARGIN..WORLD_HEIGHT - SPAWN_MARGIN),
            );
            herd.push((species, is_baby, pos));
        }
    }
    herd
}

pub fn spawn_initial_herd(mut commands: Commands, mut rng: ResMut<GameRng>) {
    let herd = plan_herd(&mut rng.0);
    let count = herd.len();

    for (species, is_baby, pos) in herd {
        let animal = Animal::new(species, is_baby);
        let wander = WanderState::new(&mut rng.0);
        commands.spawn((
            Sprite {
                color: animal_color(&animal),
                custom_size: Some(animal.size()),
                ..default()
            },
            Transform::default(),
            LogicalPosition(pos),
            YSorted {
                size: animal.size(),
            },
            AnimalAnimation::default(),
            animal,
            wander,
        ));
    }

    info!("Spawned {count} animals");
}

/// Placeholder colors per species and age class.
pub fn animal_color(animal: &Animal) -> Color {
    match (animal.species, animal.is_baby) {
        (AnimalSpecies::Chicken, false) => Color::srgb(1.0, 1.0, 0.59),
        (AnimalSpecies::Chicken, true) => Color::srgb(1.0, 1.0, 0.0),
        (AnimalSpecies::Cow, false) => Color::srgb(0.78, 0.78, 0.78),
        (AnimalSpecies::Cow, true) => Color::srgb(1.0, 0.78, 0.78),
        (AnimalSpecies::Sheep, false) => Color::srgb(0.94, 0.94, 0.94),
        (AnimalSpecies::Sheep, true) => Color::srgb(1.0, 0.94, 0.94),
    }
}
