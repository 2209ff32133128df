// src/puzzle/generator/grid.rs

use crate::math::types::{Bounds2D, Point2D};
use crate::puzzle::shard::{BoardLayout, GridCell, Shard};
use bevy::log::debug;

/// Berechnet das Brett für ein Bild: maximal `max_board_size` groß,
/// Seitenverhältnis des Bildes bleibt erhalten, zentriert in der Spielfläche.
pub fn board_layout(
    image_size: Point2D,
    grid_size: usize,
    max_board_size: Point2D,
    play_area_size: Point2D,
) -> BoardLayout {
    let scale = (max_board_size.x / image_size.x).min(max_board_size.y / image_size.y);
    let board_size = image_size * scale;
    let piece_size = board_size / grid_size as f32;

    BoardLayout {
        rows: grid_size,
        cols: grid_size,
        board_size,
        piece_size,
        origin: (play_area_size - board_size) * 0.5,
    }
}

/// Teilt das Brett in `rows × cols` Rechtecke.
///
/// Die Zellgrenzen werden einmal pro Spalte/Zeile berechnet und von beiden
/// angrenzenden Zellen verwendet, damit gemeinsame Kanten bitgleich sind.
pub fn generate_cells(layout: &BoardLayout, image_size: Point2D) -> Vec<Shard> {
    let xs = cuts(layout.cols, layout.piece_size.x, layout.board_size.x);
    let ys = cuts(layout.rows, layout.piece_size.y, layout.board_size.y);
    let source_size = Point2D::new(
        image_size.x / layout.cols as f32,
        image_size.y / layout.rows as f32,
    );

    let mut shards = Vec::with_capacity(layout.rows * layout.cols);
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let rect = Bounds2D::from_points(
                Point2D::new(xs[col], ys[row]),
                Point2D::new(xs[col + 1], ys[row + 1]),
            );
            let cell = GridCell {
                row,
                col,
                correct_offset: rect.min,
                source_origin: Point2D::new(col as f32, row as f32) * source_size,
                source_size,
            };
            shards.push(Shard::rectangle(rect, cell));
        }
    }
    debug!(
        "generate_cells: {}x{} cells, piece size {:?}",
        layout.cols, layout.rows, layout.piece_size
    );
    shards
}

fn cuts(count: usize, step: f32, total: f32) -> Vec<f32> {
    (0..=count)
        .map(|i| if i == count { total } else { i as f32 * step })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_landscape_board_fits_width() {
        let layout = board_layout(
            Point2D::new(1000.0, 500.0),
            4,
            Point2D::new(500.0, 500.0),
            Point2D::new(1200.0, 800.0),
        );
        assert_relative_eq!(layout.board_size.x, 500.0);
        assert_relative_eq!(layout.board_size.y, 250.0);
        assert_relative_eq!(layout.piece_size.x, 125.0);
        assert_eq!(layout.origin, Point2D::new(350.0, 275.0));
    }

    #[test]
    fn test_portrait_board_fits_height() {
        let layout = board_layout(
            Point2D::new(300.0, 600.0),
            3,
            Point2D::new(500.0, 500.0),
            Point2D::new(1200.0, 800.0),
        );
        assert_relative_eq!(layout.board_size.x, 250.0);
        assert_relative_eq!(layout.board_size.y, 500.0);
    }

    #[test]
    fn test_cells_are_row_major_with_correct_offsets() {
        let image = Point2D::new(900.0, 900.0);
        let layout = board_layout(image, 3, Point2D::new(300.0, 300.0), Point2D::new(800.0, 600.0));
        let cells = generate_cells(&layout, image);
        assert_eq!(cells.len(), 9);

        let cell = cells[5].grid_cell.unwrap();
        assert_eq!((cell.row, cell.col), (1, 2));
        assert_eq!(cell.correct_offset, Point2D::new(200.0, 100.0));
        assert_eq!(cell.source_origin, Point2D::new(600.0, 300.0));
        assert_eq!(cells[5].bounds().min, cell.correct_offset);

        let total: f64 = cells.iter().map(Shard::area).sum();
        assert_relative_eq!(total, 90_000.0, epsilon = 1e-6);
    }
}
