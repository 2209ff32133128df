// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use shard_puzzle::debug::{ui::puzzle_control_ui_system, visualization::shards::draw_shards_system};
use shard_puzzle::game::PuzzlePlugin;
use shard_puzzle::input::{DragState, mouse_drag_system};
use shard_puzzle::math::probability::SeedPlugin;
use shard_puzzle::setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(SeedPlugin)
        .add_plugins(PuzzlePlugin)
        .init_resource::<DragState>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Eingabe vor der Puzzle-Logik, damit Events im selben Frame ankommen
                (puzzle_control_ui_system, mouse_drag_system).before(
                    shard_puzzle::game::systems::handle_regenerate_system,
                ),
                draw_shards_system,
            ),
        )
        .run();
}
