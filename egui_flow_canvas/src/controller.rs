//! Canvas controller: node/edge collections, viewport transform, and the
//! pointer-drag state machine.
//!
//! Positions live in model space; pointer input arrives in screen space and
//! is inverted through the active pan/zoom transform. The controller knows
//! nothing about the rendering backend.

use egui::{Pos2, Vec2};
use rand::Rng;
use uuid::Uuid;

use crate::graph::{FlowGraph, FlowNode, NodeKind};
use crate::routing::{self, EdgePath};

pub const MIN_ZOOM: f32 = 0.3;
pub const MAX_ZOOM: f32 = 2.0;
const ZOOM_STEP: f32 = 0.1;

/// Default pan offset, so the graph does not start glued to the corner.
pub const DEFAULT_PAN: Vec2 = Vec2::new(40.0, 40.0);

/// View state, applied uniformly at render time. Distinct from node
/// positions, which are always untransformed model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: DEFAULT_PAN,
        }
    }
}

impl Viewport {
    pub fn screen_from_model(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.zoom + self.pan).to_pos2()
    }
}

/// Ephemeral state for one active node drag: the dragged node and the
/// pointer-to-node offset captured at drag start (screen space).
#[derive(Clone, Copy, Debug)]
struct DragSession {
    node_id: Uuid,
    offset: Vec2,
}

/// A partial node update. `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct NodePatch {
    pub label: Option<String>,
    pub prompt: Option<String>,
    pub pos: Option<Pos2>,
}

/// Owns one editing session's graph, viewport, selection, and drag state.
///
/// Every operation is total: unknown ids are treated as benign races (a
/// node deleted while an edit was in flight) and ignored silently.
pub struct CanvasController {
    graph: FlowGraph,
    viewport: Viewport,
    drag: Option<DragSession>,
    selected: Option<Uuid>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Start a session on the conventional single-start-node graph.
    pub fn new() -> Self {
        Self::with_graph(FlowGraph::starter())
    }

    pub fn with_graph(graph: FlowGraph) -> Self {
        Self {
            graph,
            viewport: Viewport::default(),
            drag: None,
            selected: None,
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&FlowNode> {
        self.selected.and_then(|id| self.graph.node(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Append a new node of `kind` at a jittered spawn position. Overlap
    /// with existing nodes is not prevented. Always succeeds.
    pub fn add_node(&mut self, kind: NodeKind) -> &FlowNode {
        let mut rng = rand::rng();
        let pos = Pos2::new(
            100.0 + rng.random_range(0.0..200.0),
            100.0 + rng.random_range(0.0..150.0),
        );
        self.add_node_at(kind, pos)
    }

    pub fn add_node_at(&mut self, kind: NodeKind, pos: Pos2) -> &FlowNode {
        self.graph.nodes.push(FlowNode {
            id: Uuid::new_v4(),
            kind,
            pos,
            label: kind.display_label().to_owned(),
            prompt: None,
        });
        let i = self.graph.nodes.len() - 1;
        &self.graph.nodes[i]
    }

    /// Merge `patch` into the node matching `id`; no-op if it is gone.
    pub fn update_node(&mut self, id: Uuid, patch: NodePatch) {
        let Some(node) = self.graph.node_mut(id) else {
            return;
        };
        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(prompt) = patch.prompt {
            node.prompt = Some(prompt);
        }
        if let Some(pos) = patch.pos {
            node.pos = pos;
        }
    }

    /// Remove the node and every edge referencing it. Clears selection and
    /// any drag session targeting the node.
    pub fn delete_node(&mut self, id: Uuid) {
        let before = self.graph.nodes.len();
        self.graph.nodes.retain(|n| n.id != id);
        if self.graph.nodes.len() == before {
            return;
        }
        self.graph.edges.retain(|e| e.from != id && e.to != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.map(|d| d.node_id) == Some(id) {
            self.drag = None;
        }
    }

    /// Begin dragging `id` from the given screen-space pointer position and
    /// select it. No-op if the node does not exist. A drag already in
    /// progress is replaced (last writer wins), never stacked.
    pub fn begin_drag(&mut self, id: Uuid, pointer: Pos2) {
        let Some(node) = self.graph.node(id) else {
            return;
        };
        let offset = pointer.to_vec2() - node.pos.to_vec2() * self.viewport.zoom - self.viewport.pan;
        self.drag = Some(DragSession {
            node_id: id,
            offset,
        });
        self.selected = Some(id);
    }

    /// Recompute the dragged node's model position from a screen-space
    /// pointer position, clamping each axis to >= 0. The inversion divides
    /// by zoom so a screen delta of d moves the node by d / zoom regardless
    /// of zoom level.
    pub fn pointer_moved(&mut self, pointer: Pos2) {
        let Some(drag) = self.drag else {
            return;
        };
        let Viewport { zoom, pan } = self.viewport;
        let model = Pos2::new(
            ((pointer.x - drag.offset.x - pan.x) / zoom).max(0.0),
            ((pointer.y - drag.offset.y - pan.y) / zoom).max(0.0),
        );
        if let Some(node) = self.graph.node_mut(drag.node_id) {
            node.pos = model;
        }
    }

    /// End the drag; the last computed position stays committed.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Set the zoom level, clamped to [0.3, 2.0]. Zoom is anchored at the
    /// canvas origin; the viewport is not recentered.
    pub fn set_zoom(&mut self, factor: f32) {
        self.viewport.zoom = factor.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.viewport.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.viewport.zoom - ZOOM_STEP);
    }

    /// Translate the viewport. Unbounded: the user may pan arbitrarily far
    /// from the content.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.viewport.pan += delta;
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
    }

    /// Set or clear the node exposed for side-panel editing. Clearing an
    /// already empty selection is a no-op.
    pub fn select_node(&mut self, id: Option<Uuid>) {
        self.selected = id.filter(|id| self.graph.node(*id).is_some());
    }

    /// Paths for every renderable edge, in model space.
    pub fn edge_paths(&self) -> Vec<EdgePath> {
        routing::edge_paths(&self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Pos2, b: Pos2) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn drag_delta_is_inverted_through_zoom() {
        for zoom in [0.3f32, 1.0, 2.0] {
            let mut c = CanvasController::new();
            let id = c.graph().nodes[0].id;
            let start_pos = c.graph().nodes[0].pos;
            c.set_zoom(zoom);

            c.begin_drag(id, Pos2::new(500.0, 400.0));
            c.pointer_moved(Pos2::new(500.0 + 30.0, 400.0 + 45.0));
            c.end_drag();

            let moved = c.graph().nodes[0].pos;
            approx(
                moved,
                Pos2::new(start_pos.x + 30.0 / zoom, start_pos.y + 45.0 / zoom),
            );
        }
    }

    #[test]
    fn drag_clamps_each_axis_to_zero() {
        let mut c = CanvasController::new();
        let id = c.graph().nodes[0].id;
        c.pan_by(-DEFAULT_PAN);

        c.begin_drag(id, Pos2::new(250.0, 70.0));
        // Far up-left: both target coordinates are negative.
        c.pointer_moved(Pos2::new(-500.0, -500.0));
        let pos = c.graph().nodes[0].pos;
        assert_eq!(pos, Pos2::ZERO);

        // Only y is negative; x stays free.
        c.pointer_moved(Pos2::new(280.0, -500.0));
        let pos = c.graph().nodes[0].pos;
        assert_eq!(pos.y, 0.0);
        assert!(pos.x > 0.0);
    }

    #[test]
    fn clearing_an_empty_selection_is_idempotent() {
        let mut c = CanvasController::new();
        assert_eq!(c.selected(), None);
        c.select_node(None);
        assert_eq!(c.selected(), None);
        assert_eq!(c.graph().nodes.len(), 1);
    }

    #[test]
    fn selecting_an_unknown_id_clears_selection() {
        let mut c = CanvasController::new();
        let id = c.graph().nodes[0].id;
        c.select_node(Some(id));
        assert_eq!(c.selected(), Some(id));
        c.select_node(Some(Uuid::new_v4()));
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn unknown_id_mutations_are_no_ops() {
        let mut c = CanvasController::new();
        let snapshot_label = c.graph().nodes[0].label.clone();

        c.update_node(
            Uuid::new_v4(),
            NodePatch {
                label: Some("ghost".to_owned()),
                ..Default::default()
            },
        );
        c.delete_node(Uuid::new_v4());
        c.begin_drag(Uuid::new_v4(), Pos2::new(10.0, 10.0));

        assert_eq!(c.graph().nodes.len(), 1);
        assert_eq!(c.graph().nodes[0].label, snapshot_label);
        assert!(!c.is_dragging());
    }

    #[test]
    fn patch_fields_apply_independently() {
        let mut c = CanvasController::new();
        let id = c.graph().nodes[0].id;

        c.update_node(
            id,
            NodePatch {
                pos: Some(Pos2::new(320.0, 140.0)),
                ..Default::default()
            },
        );
        assert_eq!(c.graph().nodes[0].pos, Pos2::new(320.0, 140.0));
        assert_eq!(c.graph().nodes[0].label, "Start");

        c.update_node(
            id,
            NodePatch {
                label: Some("Entry".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(c.graph().nodes[0].label, "Entry");
        // Untouched fields survive the second patch.
        assert_eq!(c.graph().nodes[0].pos, Pos2::new(320.0, 140.0));
    }

    #[test]
    fn delete_cascades_edges_and_clears_selection() {
        let mut c = CanvasController::new();
        let start = c.graph().nodes[0].id;
        let convo = c.add_node_at(NodeKind::Conversation, Pos2::new(100.0, 200.0)).id;
        c.graph.add_edge(start, convo, None);
        c.graph.add_edge(convo, start, Some("loop"));
        c.select_node(Some(convo));

        c.delete_node(convo);
        assert_eq!(c.graph().nodes.len(), 1);
        assert!(c.graph().edges.is_empty());
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn zoom_is_clamped_and_reset_restores_defaults() {
        let mut c = CanvasController::new();
        c.set_zoom(5.0);
        assert_eq!(c.viewport().zoom, MAX_ZOOM);
        c.set_zoom(0.01);
        assert_eq!(c.viewport().zoom, MIN_ZOOM);

        c.pan_by(Vec2::new(-300.0, 80.0));
        c.reset_view();
        assert_eq!(c.viewport(), Viewport::default());
    }

    #[test]
    fn second_begin_drag_replaces_the_session() {
        let mut c = CanvasController::new();
        let a = c.graph().nodes[0].id;
        let b = c.add_node_at(NodeKind::Transfer, Pos2::new(400.0, 300.0)).id;
        let a_pos = c.graph().node(a).map(|n| n.pos);

        c.begin_drag(a, Pos2::new(100.0, 100.0));
        c.begin_drag(b, Pos2::new(440.0, 340.0));
        c.pointer_moved(Pos2::new(450.0, 350.0));
        c.end_drag();

        // Only b moved; a is untouched by the abandoned session.
        assert_eq!(c.graph().node(a).map(|n| n.pos), a_pos);
        assert_ne!(c.graph().node(b).map(|n| n.pos), Some(Pos2::new(400.0, 300.0)));
    }

    #[test]
    fn deleting_the_dragged_node_ends_the_session() {
        let mut c = CanvasController::new();
        let id = c.graph().nodes[0].id;
        c.begin_drag(id, Pos2::new(240.0, 60.0));
        c.delete_node(id);
        assert!(!c.is_dragging());
        c.pointer_moved(Pos2::new(300.0, 300.0));
    }

    // The end-to-end scenario: seed graph, add, drag under zoom, delete.
    #[test]
    fn editing_session_scenario() {
        let mut c = CanvasController::new();
        let start = c.graph().nodes[0].id;
        assert_eq!(c.graph().nodes[0].pos, Pos2::new(200.0, 20.0));

        let convo = c.add_node(NodeKind::Conversation).id;
        assert_eq!(c.graph().nodes.len(), 2);
        c.graph.add_edge(start, convo, None);

        c.set_zoom(2.0);
        c.pan_by(-DEFAULT_PAN);
        let before = c.graph().node(convo).map(|n| n.pos).unwrap();
        c.begin_drag(convo, Pos2::new(300.0, 300.0));
        c.pointer_moved(Pos2::new(340.0, 340.0));
        c.end_drag();
        let after = c.graph().node(convo).map(|n| n.pos).unwrap();
        approx(after, Pos2::new(before.x + 20.0, before.y + 20.0));

        c.delete_node(start);
        assert_eq!(c.graph().nodes.len(), 1);
        assert!(c.edge_paths().is_empty());
    }
}
