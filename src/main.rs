mod shared;
mod input;
mod world;
mod player;
mod farming;
mod animals;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sproutvale".into(),
                        resolution: WindowResolution::new(WORLD_WIDTH, WORLD_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .insert_resource(GameRng::from_entropy())
        .init_resource::<TileGrid>()
        .init_resource::<HouseLayout>()
        .init_resource::<PlayerState>()
        .init_resource::<FieldState>()
        // Events
        .add_event::<PlayerCommand>()
        .add_event::<ToolUseEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(animals::AnimalPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
