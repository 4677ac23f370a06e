//! Standalone egui-based workflow canvas widget.
//!
//! The crate splits into a rendering-agnostic [`CanvasController`] (graph
//! collections, pan/zoom viewport, drag sessions, edge routing) and an egui
//! widget layer ([`FlowCanvasWidget`]) that draws the graph and forwards
//! pointer input. Embedders hold a controller per editing session and show
//! the widget each frame.

pub mod controller;
pub mod drawing;
pub mod graph;
pub mod routing;
pub mod theme;
pub mod widget;

pub use controller::{CanvasController, NodePatch, Viewport, DEFAULT_PAN, MAX_ZOOM, MIN_ZOOM};
pub use graph::{FlowEdge, FlowGraph, FlowNode, NodeKind, NODE_WIDTH};
pub use routing::EdgePath;
pub use theme::CanvasTheme;
pub use widget::{CanvasResponse, FlowCanvasWidget};
