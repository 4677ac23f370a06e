use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Admin,
}

impl Permission {
    pub fn label(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Admin => "admin",
        }
    }
}

/// A console API key. The full key is only held until the user dismisses
/// the reveal; the masked form is what tables show.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: Uuid,
    pub name: String,
    pub prefix: String,
    pub masked: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_key: Option<String>,
    pub permissions: Vec<Permission>,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub revoked: bool,
}

impl ApiKey {
    /// Mint a fresh live key with a random secret.
    pub fn generate(name: &str, rng: &mut impl Rng, now: DateTime<Utc>) -> Self {
        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let mut secret = String::with_capacity(20);
        for _ in 0..16 {
            secret.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
        }
        let mut tail = String::with_capacity(4);
        for _ in 0..4 {
            tail.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
        }
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            prefix: "vx_live".to_owned(),
            masked: format!("vx_live_\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}{tail}"),
            full_key: Some(format!("vx_live_{secret}_{tail}")),
            permissions: vec![Permission::Read],
            created_at: now,
            last_used: None,
            expires_at: None,
            revoked: false,
        }
    }
}
