use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelephonyProvider {
    Twilio,
    Vonage,
    Bandwidth,
}

impl TelephonyProvider {
    pub fn label(&self) -> &'static str {
        match self {
            TelephonyProvider::Twilio => "Twilio",
            TelephonyProvider::Vonage => "Vonage",
            TelephonyProvider::Bandwidth => "Bandwidth",
        }
    }
}

/// A provisioned telephony number, optionally routed to an assistant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: Uuid,
    /// E.164 formatted number.
    pub number: String,
    pub provider: TelephonyProvider,
    pub label: String,
    pub assigned_assistant_id: Option<Uuid>,
    pub inbound_count: u64,
    pub outbound_count: u64,
    pub monthly_cost: f64,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub webhook_url: String,
    pub forwarding_enabled: bool,
    pub forwarding_number: String,
}

impl PhoneNumber {
    /// Defaults for a freshly provisioned number.
    pub fn template(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: "+10000000000".to_owned(),
            provider: TelephonyProvider::Twilio,
            label: "New Number".to_owned(),
            assigned_assistant_id: None,
            inbound_count: 0,
            outbound_count: 0,
            monthly_cost: 2.0,
            status: Status::Active,
            created_at: now,
            webhook_url: String::new(),
            forwarding_enabled: false,
            forwarding_number: String::new(),
        }
    }
}
