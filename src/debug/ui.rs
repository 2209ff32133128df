// ./src/debug/ui.rs
use crate::debug::visualization::svg::create_shard_svg;
use crate::game::events::{RegeneratePuzzleEvent, ResetPuzzleEvent, ShufflePiecesEvent};
use crate::game::resources::{ActivePuzzle, PuzzleSettings};
use crate::game::state::PuzzleState;
use crate::math::probability::{SeedChangedEvent, SeedResource};
use crate::puzzle::{Difficulty, ShapeStrategy};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Window},
};

const SVG_EXPORT_PATH: &str = "puzzle_layout.svg";

pub fn puzzle_control_ui_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<PuzzleSettings>,
    active: Res<ActivePuzzle>,
    seed_resource: Res<SeedResource>,
    current_state: Res<State<PuzzleState>>,
    mut regenerate_writer: EventWriter<RegeneratePuzzleEvent>,
    mut shuffle_writer: EventWriter<ShufflePiecesEvent>,
    mut reset_writer: EventWriter<ResetPuzzleEvent>,
    mut seed_writer: EventWriter<SeedChangedEvent>,
) {
    Window::new("Puzzle")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Neues Puzzle");

            ui.horizontal(|ui| {
                for difficulty in Difficulty::ALL {
                    ui.radio_value(&mut settings.difficulty, difficulty, difficulty.label());
                }
            });
            ui.horizontal(|ui| {
                for strategy in ShapeStrategy::ALL {
                    ui.radio_value(&mut settings.strategy, strategy, strategy.label());
                }
            });
            ui.add(
                egui::Slider::new(&mut settings.image_size.x, 100.0..=2000.0).text("Bildbreite"),
            );
            ui.add(
                egui::Slider::new(&mut settings.image_size.y, 100.0..=2000.0).text("Bildhöhe"),
            );

            ui.horizontal(|ui| {
                if ui.button("Generieren").clicked() {
                    regenerate_writer.send(RegeneratePuzzleEvent {
                        image_size: settings.image_size,
                        difficulty: settings.difficulty,
                        strategy: settings.strategy,
                    });
                }
                if ui.button("Neuer Seed").clicked() {
                    seed_writer.send(SeedChangedEvent {
                        new_seed: rand::random::<u64>(),
                    });
                }
            });
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut settings.seed_text);
                if ui.button("Seed aus Text").clicked() && !settings.seed_text.is_empty() {
                    seed_writer.send(SeedChangedEvent {
                        new_seed: SeedResource::from_text(&settings.seed_text).seed,
                    });
                }
            });
            ui.label(format!("Seed: {}", seed_resource.seed));

            ui.separator();
            ui.heading("Spiel");

            match active.session.as_ref() {
                Some(session) => {
                    let pieces = session.shard_set().len();
                    ui.label(format!(
                        "{} / {}: {} Teile",
                        session.strategy().label(),
                        session.difficulty().label(),
                        pieces
                    ));
                    match session.strategy() {
                        ShapeStrategy::Triangulated => ui.label(format!(
                            "Gruppen: {}",
                            session.groups().group_count()
                        )),
                        ShapeStrategy::Grid => ui.label(format!(
                            "Platziert: {} / {}",
                            session.placed().iter().filter(|p| **p).count(),
                            pieces
                        )),
                    };

                    ui.horizontal(|ui| {
                        if ui.button("Mischen").clicked() {
                            shuffle_writer.send(ShufflePiecesEvent);
                        }
                        if ui.button("↺ Reset").clicked() {
                            reset_writer.send(ResetPuzzleEvent);
                        }
                        if ui.button("SVG exportieren").clicked() {
                            if let Err(e) = create_shard_svg(SVG_EXPORT_PATH, session, 800.0) {
                                error!("SVG export failed: {}", e);
                            }
                        }
                    });

                    if *current_state.get() == PuzzleState::Completed {
                        ui.colored_label(egui::Color32::GREEN, "Puzzle gelöst!");
                    }
                }
                None => {
                    ui.label("Noch kein Puzzle erzeugt.");
                }
            }

            ui.separator();
            ui.collapsing("Visualisierung", |ui| {
                ui.checkbox(&mut settings.show_board, "Brett anzeigen");
                ui.checkbox(&mut settings.show_adjacency, "Nachbarschaft anzeigen");
            });
        });
}
