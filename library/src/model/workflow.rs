use chrono::{DateTime, Utc};
use egui_flow_canvas::FlowGraph;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlatformError;

/// A named call flow: metadata plus the editable node graph.
///
/// The editor works on a session-local copy of the graph; only an explicit
/// save writes it back through the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workflow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub graph: FlowGraph,
}

impl Workflow {
    /// A new untitled workflow seeded with the single start node.
    pub fn untitled(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Untitled Workflow".to_owned(),
            created_at: now,
            updated_at: now,
            graph: FlowGraph::starter(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.graph.step_count()
    }

    /// A copy with a fresh id, for the list page's Duplicate action.
    pub fn duplicated(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", self.name),
            created_at: now,
            updated_at: now,
            graph: self.graph.clone(),
        }
    }

    /// Pretty-printed graph JSON, for export from the list page.
    pub fn graph_json(&self) -> String {
        serde_json::to_string_pretty(&self.graph).unwrap_or_default()
    }

    /// Build a workflow from uploaded graph JSON.
    pub fn from_graph_json(name: &str, json: &str, now: DateTime<Utc>) -> Result<Self, PlatformError> {
        let graph: FlowGraph = serde_json::from_str(json)?;
        if graph.nodes.is_empty() {
            return Err(PlatformError::EmptyWorkflow);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at: now,
            updated_at: now,
            graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_workflow_starts_with_one_step() {
        let wf = Workflow::untitled(Utc::now());
        assert_eq!(wf.step_count(), 1);
        assert_eq!(wf.name, "Untitled Workflow");
    }

    #[test]
    fn graph_json_round_trip() {
        let now = Utc::now();
        let wf = Workflow::untitled(now);
        let json = wf.graph_json();
        let back = Workflow::from_graph_json("Imported", &json, now).unwrap();
        assert_eq!(back.step_count(), 1);
        assert_eq!(back.name, "Imported");
    }

    #[test]
    fn import_rejects_empty_and_malformed_graphs() {
        let now = Utc::now();
        assert!(matches!(
            Workflow::from_graph_json("x", r#"{"nodes":[],"edges":[]}"#, now),
            Err(PlatformError::EmptyWorkflow)
        ));
        assert!(matches!(
            Workflow::from_graph_json("x", "not json", now),
            Err(PlatformError::InvalidWorkflowJson(_))
        ));
    }
}
