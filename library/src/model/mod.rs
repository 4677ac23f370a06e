//! Domain model types. All timestamps are UTC; all records carry opaque
//! UUIDs assigned at creation.

pub mod api_key;
pub mod assistant;
pub mod call;
pub mod phone_number;
pub mod workflow;

pub use api_key::{ApiKey, Permission};
pub use assistant::{
    Assistant, BackgroundSound, LlmProvider, TranscriberProvider, VoiceProvider,
};
pub use call::{Call, CallDirection, CallStatus, CostBreakdown, Sentiment, Speaker, StageLatency, TranscriptEntry};
pub use phone_number::{PhoneNumber, TelephonyProvider};
pub use workflow::Workflow;

use serde::{Deserialize, Serialize};

/// Active/inactive toggle shared by assistants and phone numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}
