use crate::game::resources::{ActivePuzzle, PuzzleSettings};
use crate::math::types::{Bounds2D, Point2D};
use crate::puzzle::{GroupId, PuzzleSession};
use bevy::prelude::*;

/// Puzzlekoordinaten (Ursprung oben links, y nach unten) in Bevy-Weltkoordinaten
/// (Ursprung in der Mitte der Spielfläche, y nach oben).
pub fn puzzle_to_world(point: Point2D, play_area_size: Point2D) -> Vec2 {
    Vec2::new(
        point.x - play_area_size.x * 0.5,
        play_area_size.y * 0.5 - point.y,
    )
}

pub fn world_to_puzzle(point: Vec2, play_area_size: Point2D) -> Point2D {
    Point2D::new(
        point.x + play_area_size.x * 0.5,
        play_area_size.y * 0.5 - point.y,
    )
}

/// Stabile Farbe pro Gruppe, damit verbundene Teile gleich aussehen.
pub fn group_color(group: GroupId) -> Color {
    // Goldener Winkel verteilt die Farbtöne gleichmäßig
    let hue = (group.0 as f32 * 137.508) % 360.0;
    Color::hsl(hue, 0.65, 0.55)
}

/// Zeichnet alle Teile an ihrer aktuellen Lage als Gizmos.
pub fn draw_shards_system(
    active: Res<ActivePuzzle>,
    settings: Res<PuzzleSettings>,
    mut gizmos: Gizmos,
) {
    let Some(session) = active.session.as_ref() else {
        return;
    };
    let play = session.config().play_area_size;

    draw_rect(&mut gizmos, &session.config().play_area(), play, Color::DARK_GRAY);
    if settings.show_board {
        if let Some(board) = session.shard_set().board() {
            draw_rect(&mut gizmos, &board.screen_bounds(), play, Color::GRAY);
        }
    }

    let highlighted = session.highlight().map(|h| h.shard);
    for (idx, shard) in session.shard_set().iter().enumerate() {
        let (Ok(offset), Ok(group)) = (session.placement().offset(idx), session.group_of(idx))
        else {
            continue;
        };
        let color = if highlighted == Some(idx) {
            Color::YELLOW
        } else if session.placed().get(idx).copied().unwrap_or(false) {
            Color::GREEN
        } else {
            group_color(group)
        };
        for edge in shard.edges() {
            let edge = edge.translated(offset);
            gizmos.line_2d(
                puzzle_to_world(edge.start, play),
                puzzle_to_world(edge.end, play),
                color,
            );
        }
    }

    if settings.show_adjacency {
        draw_adjacency(&mut gizmos, session, play);
    }
}

/// Verbindet die Schwerpunkte benachbarter Teile.
fn draw_adjacency(gizmos: &mut Gizmos, session: &PuzzleSession, play: Point2D) {
    let centroid = |idx: usize| -> Option<Point2D> {
        let vertices = session.placement().world_vertices(session.shard_set(), idx).ok()?;
        let sum = vertices.iter().fold(Point2D::ZERO, |acc, &v| acc + v);
        Some(sum / vertices.len().max(1) as f32)
    };
    for (a, b) in session.adjacency().pairs() {
        if let (Some(ca), Some(cb)) = (centroid(a), centroid(b)) {
            gizmos.line_2d(
                puzzle_to_world(ca, play),
                puzzle_to_world(cb, play),
                Color::rgba(1.0, 1.0, 1.0, 0.25),
            );
        }
    }
}

fn draw_rect(gizmos: &mut Gizmos, bounds: &Bounds2D, play: Point2D, color: Color) {
    let corners = bounds.corners();
    for i in 0..corners.len() {
        gizmos.line_2d(
            puzzle_to_world(corners[i], play),
            puzzle_to_world(corners[(i + 1) % corners.len()], play),
            color,
        );
    }
}
