//! Edge path computation, independent of any rendering backend.

use egui::Pos2;
use uuid::Uuid;

use crate::graph::{FlowGraph, NODE_WIDTH};

/// A renderable cubic Bezier path for one edge, in model space.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePath {
    pub edge_id: Uuid,
    pub from: Pos2,
    pub c1: Pos2,
    pub c2: Pos2,
    pub to: Pos2,
    pub label: Option<String>,
    /// Midpoint between the endpoints, where the label chip is anchored.
    pub label_pos: Pos2,
}

/// Compute paths for every edge whose endpoints both resolve to live nodes.
///
/// Paths run from the bottom-center of the source box to the top-center of
/// the target box, with both control points at the vertical midpoint: an
/// S-curve for horizontally offset nodes, a straight vertical otherwise.
/// Edges with a dangling endpoint are omitted, not errored.
pub fn edge_paths(graph: &FlowGraph) -> Vec<EdgePath> {
    graph
        .edges
        .iter()
        .filter_map(|edge| {
            let from = graph.node(edge.from)?;
            let to = graph.node(edge.to)?;
            let start = Pos2::new(
                from.pos.x + NODE_WIDTH / 2.0,
                from.pos.y + from.kind.box_height(),
            );
            let end = Pos2::new(to.pos.x + NODE_WIDTH / 2.0, to.pos.y);
            let mid_y = (start.y + end.y) / 2.0;
            Some(EdgePath {
                edge_id: edge.id,
                from: start,
                c1: Pos2::new(start.x, mid_y),
                c2: Pos2::new(end.x, mid_y),
                to: end,
                label: edge.label.clone(),
                label_pos: Pos2::new((start.x + end.x) / 2.0, mid_y),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{FlowEdge, FlowNode, NodeKind};

    fn node(kind: NodeKind, x: f32, y: f32) -> FlowNode {
        FlowNode {
            id: Uuid::new_v4(),
            kind,
            pos: Pos2::new(x, y),
            label: kind.display_label().to_owned(),
            prompt: None,
        }
    }

    #[test]
    fn path_endpoints_use_box_anchors() {
        let mut graph = FlowGraph::default();
        graph.nodes.push(node(NodeKind::Start, 340.0, 20.0));
        graph.nodes.push(node(NodeKind::Conversation, 280.0, 120.0));
        let (a, b) = (graph.nodes[0].id, graph.nodes[1].id);
        graph.add_edge(a, b, None);

        let paths = edge_paths(&graph);
        assert_eq!(paths.len(), 1);
        // Start boxes are 44 tall; source anchor is the bottom-center.
        assert_eq!(paths[0].from, Pos2::new(440.0, 64.0));
        assert_eq!(paths[0].to, Pos2::new(380.0, 120.0));
        let mid_y = (64.0 + 120.0) / 2.0;
        assert_eq!(paths[0].c1, Pos2::new(440.0, mid_y));
        assert_eq!(paths[0].c2, Pos2::new(380.0, mid_y));
    }

    #[test]
    fn aligned_nodes_get_a_straight_vertical() {
        let mut graph = FlowGraph::default();
        graph.nodes.push(node(NodeKind::Conversation, 100.0, 0.0));
        graph.nodes.push(node(NodeKind::Conversation, 100.0, 200.0));
        let (a, b) = (graph.nodes[0].id, graph.nodes[1].id);
        graph.add_edge(a, b, None);

        let paths = edge_paths(&graph);
        assert_eq!(paths[0].from.x, paths[0].to.x);
        assert_eq!(paths[0].c1.x, paths[0].c2.x);
    }

    #[test]
    fn dangling_edges_are_skipped() {
        let mut graph = FlowGraph::default();
        graph.nodes.push(node(NodeKind::Start, 0.0, 0.0));
        graph.nodes.push(node(NodeKind::End, 0.0, 300.0));
        let (a, b) = (graph.nodes[0].id, graph.nodes[1].id);
        graph.add_edge(a, b, None);
        graph.edges.push(FlowEdge {
            id: Uuid::new_v4(),
            from: a,
            to: Uuid::new_v4(),
            label: None,
        });

        let paths = edge_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].edge_id, graph.edges[0].id);
    }

    #[test]
    fn label_rides_the_midpoint() {
        let mut graph = FlowGraph::default();
        graph.nodes.push(node(NodeKind::Condition, 120.0, 240.0));
        graph.nodes.push(node(NodeKind::Conversation, 340.0, 360.0));
        let (a, b) = (graph.nodes[0].id, graph.nodes[1].id);
        graph.add_edge(a, b, Some("new"));

        let path = &edge_paths(&graph)[0];
        assert_eq!(path.label.as_deref(), Some("new"));
        assert_eq!(path.label_pos.x, (path.from.x + path.to.x) / 2.0);
        assert_eq!(path.label_pos.y, (path.from.y + path.to.y) / 2.0);
    }
}
