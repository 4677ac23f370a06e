//! Theming for the workflow canvas.

use egui::Color32;

use crate::graph::NodeKind;

/// Theme configuration for the canvas widget.
pub struct CanvasTheme {
    /// Background color.
    pub background_color: Color32,
    /// Dot grid color.
    pub grid_color: Color32,
    /// Dot grid spacing, in model units.
    pub grid_spacing: f32,
    /// Corner rounding for node boxes.
    pub node_rounding: f32,
    /// Width of the accent bar on the left node edge.
    pub accent_bar_width: f32,
    /// Selection outline color.
    pub selection_color: Color32,
    /// Node title text color.
    pub title_color: Color32,
    /// Prompt preview text color.
    pub preview_color: Color32,
    /// Edge stroke color.
    pub edge_color: Color32,
    /// Edge label chip background.
    pub edge_label_fill: Color32,
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(10, 10, 10),
            grid_color: Color32::from_rgb(26, 26, 46),
            grid_spacing: 32.0,
            node_rounding: 8.0,
            accent_bar_width: 4.0,
            selection_color: Color32::WHITE,
            title_color: Color32::from_rgb(245, 245, 245),
            preview_color: Color32::from_rgb(113, 113, 122),
            edge_color: Color32::from_rgb(245, 158, 11),
            edge_label_fill: Color32::from_rgb(26, 18, 0),
        }
    }
}

impl CanvasTheme {
    /// Accent color per node kind (border, accent bar, kind caption).
    pub fn accent(&self, kind: NodeKind) -> Color32 {
        match kind {
            NodeKind::Start | NodeKind::Conversation => Color32::from_rgb(99, 102, 241),
            NodeKind::Condition => Color32::from_rgb(245, 158, 11),
            NodeKind::ApiRequest => Color32::from_rgb(34, 197, 94),
            NodeKind::Transfer => Color32::from_rgb(139, 92, 246),
            NodeKind::End => Color32::from_rgb(239, 68, 68),
        }
    }

    /// Body fill per node kind: a deep tint of the accent.
    pub fn fill(&self, kind: NodeKind) -> Color32 {
        match kind {
            NodeKind::Start | NodeKind::Conversation => Color32::from_rgb(30, 27, 75),
            NodeKind::Condition => Color32::from_rgb(28, 23, 8),
            NodeKind::ApiRequest => Color32::from_rgb(5, 46, 22),
            NodeKind::Transfer => Color32::from_rgb(30, 16, 64),
            NodeKind::End => Color32::from_rgb(28, 10, 10),
        }
    }
}
