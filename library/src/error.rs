use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("invalid workflow JSON: {0}")]
    InvalidWorkflowJson(#[from] serde_json::Error),

    #[error("workflow has no nodes")]
    EmptyWorkflow,
}
