pub mod api_keys;
pub mod assistants;
pub mod calls;
pub mod dashboard;
pub mod phone_numbers;
pub mod workflow_editor;
pub mod workflows;
