// src/debug/visualization/svg.rs
use crate::math::types::Bounds2D;
use crate::puzzle::{GroupStore, Placement, PuzzleSession, ShardSet};
use bevy::log::info;
use bevy::math::Vec2;
use svg::Document;
use svg::node::element::{Polygon, Rectangle, Style};

/// Relative Strichstärken, abhängig von der Größe der Leinwand.
struct SvgStyle {
    stroke_w_normal: f64,
    stroke_w_thin: f64,
}

impl SvgStyle {
    fn for_bounds(display_bounds: &Bounds2D) -> Self {
        let extent = (display_bounds.width() as f64 + display_bounds.height() as f64) / 2.0;
        Self {
            stroke_w_normal: extent * 0.003,
            stroke_w_thin: extent * 0.0015,
        }
    }

    fn css(&self) -> String {
        format!(
            r#"
    .background {{ fill: #f0f0f0; }}
    .play-area {{ fill: none; stroke: #cccccc; stroke-width: {thin}; stroke-dasharray: 5,5; }}
    .board {{ fill: #e0e0e0; stroke: #888888; stroke-width: {thin}; }}
    .shard {{ fill-opacity: 0.7; stroke: #333333; stroke-width: {normal}; }}
    .placed {{ stroke: #00aa00; }}
"#,
            thin = self.stroke_w_thin,
            normal = self.stroke_w_normal
        )
    }
}

fn rect(bounds: &Bounds2D, class: &str) -> Rectangle {
    Rectangle::new()
        .set("x", bounds.min.x)
        .set("y", bounds.min.y)
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("class", class)
}

fn polygon(vertices: &[Vec2], class: &str, fill: &str) -> Polygon {
    let points_str: String = vertices
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    Polygon::new()
        .set("points", points_str)
        .set("class", class)
        .set("fill", fill)
}

/// Farbton einer Gruppe, passend zur Gizmo-Darstellung.
fn group_fill(group: usize) -> String {
    let hue = (group as f32 * 137.508) % 360.0;
    format!("hsl({:.1}, 65%, 55%)", hue)
}

/// Baut ein SVG-Dokument der aktuellen Lage aller Teile.
///
/// `display_bounds` wird zur ViewBox, Koordinaten sind Puzzlekoordinaten
/// (y nach unten), passen also direkt zum SVG-Koordinatensystem.
pub fn shard_svg_document(
    shard_set: &ShardSet,
    placement: &Placement,
    groups: &GroupStore,
    placed: &[bool],
    display_bounds: &Bounds2D,
    svg_pixel_size: f64,
) -> Document {
    let style = SvgStyle::for_bounds(display_bounds);
    let mut document = Document::new()
        .set("width", svg_pixel_size)
        .set("height", svg_pixel_size)
        .set(
            "viewBox",
            (
                display_bounds.min.x,
                display_bounds.min.y,
                display_bounds.width(),
                display_bounds.height(),
            ),
        )
        .add(Style::new(style.css()))
        .add(rect(display_bounds, "background"))
        .add(rect(display_bounds, "play-area"));

    if let Some(board) = shard_set.board() {
        document = document.add(rect(&board.screen_bounds(), "board"));
    }

    for (idx, shard) in shard_set.iter().enumerate() {
        let (Ok(offset), Ok(group)) = (placement.offset(idx), groups.group_of(idx)) else {
            continue;
        };
        let class = if placed.get(idx).copied().unwrap_or(false) {
            "shard placed"
        } else {
            "shard"
        };
        document = document.add(polygon(
            &shard.translated_vertices(offset),
            class,
            &group_fill(group.0),
        ));
    }
    document
}

/// Schreibt die aktuelle Lage eines Puzzles als SVG-Datei.
pub fn create_shard_svg(
    filename: &str,
    session: &PuzzleSession,
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = shard_svg_document(
        session.shard_set(),
        session.placement(),
        session.groups(),
        session.placed(),
        &session.config().play_area(),
        svg_pixel_size,
    );
    svg::save(filename, &document)?;
    info!("Debug SVG '{}' wurde erstellt.", filename);
    Ok(())
}
