//! The egui canvas widget: renders the graph under the viewport transform
//! and feeds pointer input back into the controller.

use egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};
use uuid::Uuid;

use crate::controller::CanvasController;
use crate::drawing::{draw_arrowhead, draw_dot_grid, stroke_cubic};
use crate::graph::NODE_WIDTH;
use crate::theme::CanvasTheme;

/// What happened to the canvas during this frame.
#[derive(Default)]
pub struct CanvasResponse {
    /// The selection changed (a node was picked or the canvas was clicked).
    pub selection_changed: bool,
}

pub struct FlowCanvasWidget<'a> {
    controller: &'a mut CanvasController,
    theme: &'a CanvasTheme,
}

impl<'a> FlowCanvasWidget<'a> {
    pub fn new(controller: &'a mut CanvasController, theme: &'a CanvasTheme) -> Self {
        Self { controller, theme }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> CanvasResponse {
        let selected_before = self.controller.selected();

        let available = ui.available_rect_before_wrap();
        let (response, painter) = ui.allocate_painter(available.size(), Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Scroll wheel zoom, anchored at the canvas origin.
        if let Some(hover) = ui.input(|i| i.pointer.hover_pos()) {
            if canvas_rect.contains(hover) {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    let zoom = self.controller.viewport().zoom;
                    self.controller.set_zoom(zoom + scroll * 0.002);
                }
            }
        }

        // Middle-button panning.
        if response.dragged_by(egui::PointerButton::Middle) {
            self.controller.pan_by(response.drag_delta());
        }

        let vp = self.controller.viewport();
        let to_screen =
            |p: Pos2| canvas_rect.min + (p.to_vec2() * vp.zoom) + vp.pan;

        painter.rect_filled(canvas_rect, 0.0, self.theme.background_color);
        draw_dot_grid(
            &painter,
            canvas_rect,
            vp.pan,
            self.theme.grid_spacing * vp.zoom,
            self.theme.grid_color,
        );

        self.draw_edges(&painter, &to_screen, vp.zoom);
        let hits = self.draw_nodes(&painter, &to_screen, vp.zoom);
        self.handle_pointer(ui, &response, canvas_rect, &hits);

        CanvasResponse {
            selection_changed: self.controller.selected() != selected_before,
        }
    }

    fn draw_edges(
        &self,
        painter: &egui::Painter,
        to_screen: &dyn Fn(Pos2) -> Pos2,
        zoom: f32,
    ) {
        let stroke = Stroke::new(1.5, self.theme.edge_color);
        for path in self.controller.edge_paths() {
            let (from, c1, c2, to) = (
                to_screen(path.from),
                to_screen(path.c1),
                to_screen(path.c2),
                to_screen(path.to),
            );
            stroke_cubic(painter, from, c1, c2, to, stroke);
            draw_arrowhead(painter, to, to - c2, 7.0 * zoom, self.theme.edge_color);

            if let Some(label) = &path.label {
                let center = to_screen(path.label_pos);
                let chip = Rect::from_center_size(center, Vec2::new(56.0, 16.0) * zoom);
                painter.rect_filled(chip, 4.0 * zoom, self.theme.edge_label_fill);
                painter.rect_stroke(
                    chip,
                    4.0 * zoom,
                    Stroke::new(0.75, self.theme.edge_color.gamma_multiply(0.5)),
                    StrokeKind::Outside,
                );
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional((8.0 * zoom).max(6.0)),
                    self.theme.edge_color,
                );
            }
        }
    }

    /// Draw node chrome and return hit rects in draw order.
    fn draw_nodes(
        &self,
        painter: &egui::Painter,
        to_screen: &dyn Fn(Pos2) -> Pos2,
        zoom: f32,
    ) -> Vec<(Uuid, Rect)> {
        let mut hits = Vec::with_capacity(self.controller.graph().nodes.len());
        let rounding = self.theme.node_rounding * zoom;

        for node in &self.controller.graph().nodes {
            let min = to_screen(node.pos);
            let size = Vec2::new(NODE_WIDTH, node.kind.box_height()) * zoom;
            let rect = Rect::from_min_size(min, size);
            let accent = self.theme.accent(node.kind);
            let selected = self.controller.selected() == Some(node.id);

            // Drop shadow, then body.
            painter.rect_filled(
                rect.translate(Vec2::new(2.0, 4.0) * zoom),
                rounding,
                Color32::from_black_alpha(128),
            );
            painter.rect_filled(rect, rounding, self.theme.fill(node.kind));
            painter.rect_stroke(
                rect,
                rounding,
                if selected {
                    Stroke::new(2.0, self.theme.selection_color)
                } else {
                    Stroke::new(1.0, accent)
                },
                StrokeKind::Outside,
            );

            // Accent bar on the left edge.
            painter.rect_filled(
                Rect::from_min_size(
                    min,
                    Vec2::new(self.theme.accent_bar_width * zoom, size.y),
                ),
                2.0 * zoom,
                accent,
            );

            // Kind glyph disc.
            painter.circle_filled(
                min + Vec2::new(24.0, 22.0) * zoom,
                12.0 * zoom,
                accent.gamma_multiply(0.15),
            );

            painter.text(
                min + Vec2::new(42.0, 8.0) * zoom,
                Align2::LEFT_TOP,
                &node.label,
                FontId::proportional((11.0 * zoom).max(6.0)),
                self.theme.title_color,
            );
            painter.text(
                min + Vec2::new(42.0, 21.0) * zoom,
                Align2::LEFT_TOP,
                node.kind.display_label(),
                FontId::proportional((9.0 * zoom).max(5.0)),
                accent.gamma_multiply(0.8),
            );

            // Prompt preview on the tall boxes.
            if node.kind.box_height() > 44.0 {
                if let Some(prompt) = &node.prompt {
                    let preview: String = prompt.chars().take(40).collect();
                    painter.text(
                        min + Vec2::new(8.0, 44.0) * zoom,
                        Align2::LEFT_TOP,
                        format!("{preview}..."),
                        FontId::proportional((8.5 * zoom).max(5.0)),
                        self.theme.preview_color,
                    );
                }
            }

            hits.push((node.id, rect));
        }
        hits
    }

    fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        canvas_rect: Rect,
        hits: &[(Uuid, Rect)],
    ) {
        let pointer = ui.input(|i| i.pointer.hover_pos());
        // Controller math runs in canvas-local screen coordinates.
        let local = |p: Pos2| (p - canvas_rect.min).to_pos2();
        // Topmost node wins, so scan in reverse draw order.
        let hit_at = |p: Pos2| {
            hits.iter()
                .rev()
                .find(|(_, r)| r.contains(p))
                .map(|(id, _)| *id)
        };

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = pointer {
                if let Some(id) = hit_at(pos) {
                    self.controller.begin_drag(id, local(pos));
                }
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) && self.controller.is_dragging() {
            if let Some(pos) = pointer {
                self.controller.pointer_moved(local(pos));
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.controller.end_drag();
        }

        if response.clicked() {
            if let Some(pos) = pointer {
                self.controller.select_node(hit_at(pos));
            }
        }
    }
}
