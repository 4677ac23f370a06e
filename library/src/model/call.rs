use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

impl CallDirection {
    pub fn label(&self) -> &'static str {
        match self {
            CallDirection::Inbound => "Inbound",
            CallDirection::Outbound => "Outbound",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Ended,
    Failed,
    Busy,
    NoAnswer,
    InProgress,
}

impl CallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::Ended => "Ended",
            CallStatus::Failed => "Failed",
            CallStatus::Busy => "Busy",
            CallStatus::NoAnswer => "No Answer",
            CallStatus::InProgress => "In Progress",
        }
    }

    pub const ALL: [CallStatus; 5] = [
        CallStatus::Ended,
        CallStatus::Failed,
        CallStatus::Busy,
        CallStatus::NoAnswer,
        CallStatus::InProgress,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    /// Seconds from call start.
    pub offset_secs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Per-stage response latency, in milliseconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StageLatency {
    pub llm_ms: u32,
    pub tts_ms: u32,
    pub stt_ms: u32,
}

/// Per-stage cost attribution, in USD.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub llm: f64,
    pub tts: f64,
    pub stt: f64,
    pub telephony: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.llm + self.tts + self.stt + self.telephony
    }
}

/// One completed or in-flight call session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    pub direction: CallDirection,
    pub status: CallStatus,
    pub assistant_id: Uuid,
    pub assistant_name: String,
    pub from_number: String,
    pub to_number: String,
    /// Duration in seconds; zero for calls that never connected.
    pub duration_secs: u32,
    pub cost: f64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub transcript: Vec<TranscriptEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_eval: Option<bool>,
    pub latency: StageLatency,
    pub cost_breakdown: CostBreakdown,
}
