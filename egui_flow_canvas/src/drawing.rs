//! Painter helpers for the canvas widget.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Draw a dot grid, offset by the pan and scaled by the zoom.
pub fn draw_dot_grid(
    painter: &egui::Painter,
    rect: Rect,
    pan: Vec2,
    spacing: f32,
    color: Color32,
) {
    if spacing < 4.0 {
        return;
    }
    let start_x = rect.min.x + (pan.x % spacing);
    let start_y = rect.min.y + (pan.y % spacing);

    let mut y = start_y;
    while y < rect.max.y {
        let mut x = start_x;
        while x < rect.max.x {
            painter.circle_filled(Pos2::new(x, y), 1.0, color);
            x += spacing;
        }
        y += spacing;
    }
}

/// Stroke a cubic Bezier by flattening it into line segments.
pub fn stroke_cubic(
    painter: &egui::Painter,
    p0: Pos2,
    c1: Pos2,
    c2: Pos2,
    p3: Pos2,
    stroke: Stroke,
) {
    let segments = 20;
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * p0.x + 3.0 * mt2 * t * c1.x + 3.0 * mt * t2 * c2.x + t3 * p3.x;
        let y = mt3 * p0.y + 3.0 * mt2 * t * c1.y + 3.0 * mt * t2 * c2.y + t3 * p3.y;
        points.push(Pos2::new(x, y));
    }

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], stroke);
    }
}

/// Filled triangular arrowhead with its tip at `tip`, pointing along `dir`.
pub fn draw_arrowhead(painter: &egui::Painter, tip: Pos2, dir: Vec2, size: f32, color: Color32) {
    let dir = dir.normalized();
    let normal = Vec2::new(-dir.y, dir.x);
    let base = tip - dir * size;
    painter.add(egui::Shape::convex_polygon(
        vec![tip, base + normal * size * 0.5, base - normal * size * 0.5],
        color,
        Stroke::NONE,
    ));
}
