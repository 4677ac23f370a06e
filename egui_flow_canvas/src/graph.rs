//! Data model for workflow canvases: typed nodes and labeled directed edges.
//!
//! Node positions are stored in model space, independent of the viewport
//! transform the widget applies at render time.

use egui::Pos2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rendered width of every node box, in model units.
pub const NODE_WIDTH: f32 = 200.0;

/// The closed set of node variants. Fixed at creation; determines the
/// rendering style and which fields the side panel exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Start,
    Conversation,
    Condition,
    ApiRequest,
    Transfer,
    End,
}

impl NodeKind {
    /// Kinds offered in the editor palette. `Start` is excluded: one start
    /// node per graph is the convention, seeded by [`FlowGraph::starter`]
    /// (the model itself does not enforce uniqueness).
    pub const PALETTE: [NodeKind; 5] = [
        NodeKind::Conversation,
        NodeKind::Condition,
        NodeKind::ApiRequest,
        NodeKind::Transfer,
        NodeKind::End,
    ];

    pub fn display_label(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Conversation => "Conversation",
            NodeKind::Condition => "Condition",
            NodeKind::ApiRequest => "API Request",
            NodeKind::Transfer => "Transfer",
            NodeKind::End => "End",
        }
    }

    /// Height of the node box in model units. Start/End are compact; the
    /// other kinds reserve a row for the prompt preview.
    pub fn box_height(&self) -> f32 {
        match self {
            NodeKind::Start | NodeKind::End => 44.0,
            _ => 72.0,
        }
    }

    /// Whether the side panel exposes the free-form prompt field.
    pub fn has_prompt(&self) -> bool {
        matches!(self, NodeKind::Conversation)
    }
}

/// A positioned, typed unit of the graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: Uuid,
    pub kind: NodeKind,
    /// Model-space position of the top-left corner.
    pub pos: Pos2,
    pub label: String,
    /// Behavioral instruction, meaningful for `Conversation` nodes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// A directed, optionally labeled connection between two node ids.
///
/// Endpoints are not validated against the node set; edges whose endpoints
/// do not resolve are skipped at render time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: Uuid,
    pub from: Uuid,
    pub to: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Insertion-ordered node and edge collections. Cycles are allowed; this is
/// a presentation model, not an execution graph.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// A fresh graph holding the conventional single start node.
    pub fn starter() -> Self {
        Self {
            nodes: vec![FlowNode {
                id: Uuid::new_v4(),
                kind: NodeKind::Start,
                pos: Pos2::new(200.0, 20.0),
                label: "Start".to_owned(),
                prompt: None,
            }],
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: Uuid) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: Uuid) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn add_edge(&mut self, from: Uuid, to: Uuid, label: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        self.edges.push(FlowEdge {
            id,
            from,
            to,
            label: label.map(str::to_owned),
        });
        id
    }

    pub fn step_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_graph_has_single_start_node() {
        let graph = FlowGraph::starter();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].kind, NodeKind::Start);
        assert_eq!(graph.nodes[0].pos, Pos2::new(200.0, 20.0));
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn graph_json_round_trip() {
        let mut graph = FlowGraph::starter();
        let start = graph.nodes[0].id;
        graph.nodes.push(FlowNode {
            id: Uuid::new_v4(),
            kind: NodeKind::Conversation,
            pos: Pos2::new(120.0, 140.0),
            label: "Greet".to_owned(),
            prompt: Some("Greet the caller.".to_owned()),
        });
        let convo = graph.nodes[1].id;
        graph.add_edge(start, convo, Some("always"));

        let json = serde_json::to_string(&graph).unwrap();
        let back: FlowGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.nodes.len(), 2);
        assert_eq!(back.edges.len(), 1);
        assert_eq!(back.nodes[1].prompt.as_deref(), Some("Greet the caller."));
        assert_eq!(back.edges[0].label.as_deref(), Some("always"));
    }

    #[test]
    fn palette_excludes_start() {
        assert!(!NodeKind::PALETTE.contains(&NodeKind::Start));
        assert_eq!(NodeKind::PALETTE.len(), 5);
    }
}
