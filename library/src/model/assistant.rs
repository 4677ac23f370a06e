use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    Together,
    Groq,
    Custom,
}

impl LlmProvider {
    pub fn label(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "OpenAI",
            LlmProvider::Anthropic => "Anthropic",
            LlmProvider::Together => "Together",
            LlmProvider::Groq => "Groq",
            LlmProvider::Custom => "Custom",
        }
    }

    /// Models offered in the editor combo for this provider.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            LlmProvider::OpenAi => &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo"],
            LlmProvider::Anthropic => &["claude-3-5-sonnet", "claude-3-haiku"],
            LlmProvider::Together => &["llama-3-70b", "mixtral-8x7b"],
            LlmProvider::Groq => &["llama-3-70b-groq", "mixtral-8x7b-groq"],
            LlmProvider::Custom => &["custom-model"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceProvider {
    ElevenLabs,
    Deepgram,
    PlayHt,
    Rime,
    Azure,
    Cartesia,
    OpenAi,
}

impl VoiceProvider {
    pub fn label(&self) -> &'static str {
        match self {
            VoiceProvider::ElevenLabs => "ElevenLabs",
            VoiceProvider::Deepgram => "Deepgram",
            VoiceProvider::PlayHt => "PlayHT",
            VoiceProvider::Rime => "Rime",
            VoiceProvider::Azure => "Azure",
            VoiceProvider::Cartesia => "Cartesia",
            VoiceProvider::OpenAi => "OpenAI",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriberProvider {
    Deepgram,
    AssemblyAi,
    Talkscriber,
}

impl TranscriberProvider {
    pub fn label(&self) -> &'static str {
        match self {
            TranscriberProvider::Deepgram => "Deepgram",
            TranscriberProvider::AssemblyAi => "AssemblyAI",
            TranscriberProvider::Talkscriber => "Talkscriber",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSound {
    Office,
    Coffee,
    None,
}

/// A configured voice assistant: LLM, voice, and transcription settings
/// plus call-handling behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assistant {
    pub id: Uuid,
    pub name: String,
    pub first_message: String,
    pub system_prompt: String,
    pub llm_provider: LlmProvider,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub voice_provider: VoiceProvider,
    pub voice_id: String,
    pub voice_name: String,
    pub voice_speed: f32,
    pub transcriber_provider: TranscriberProvider,
    pub transcriber_model: String,
    pub language: String,
    pub status: Status,
    pub call_count: u64,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub background_denoising: bool,
    pub recording: bool,
    pub hipaa_mode: bool,
    pub background_sound: BackgroundSound,
    pub end_call_phrases: Vec<String>,
    pub summary_prompt: String,
    pub success_eval_prompt: String,
    pub response_delay_ms: u32,
    pub endpointing_ms: u32,
}

impl Assistant {
    /// Defaults for a freshly created assistant.
    pub fn template(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "New Assistant".to_owned(),
            first_message: "Hello! How can I help you today?".to_owned(),
            system_prompt: "You are a helpful AI assistant.".to_owned(),
            llm_provider: LlmProvider::OpenAi,
            model: "gpt-4o-mini".to_owned(),
            temperature: 0.7,
            max_tokens: 512,
            voice_provider: VoiceProvider::ElevenLabs,
            voice_id: "rachel".to_owned(),
            voice_name: "Rachel".to_owned(),
            voice_speed: 1.0,
            transcriber_provider: TranscriberProvider::Deepgram,
            transcriber_model: "nova-2".to_owned(),
            language: "en".to_owned(),
            status: Status::Active,
            call_count: 0,
            last_active: now,
            created_at: now,
            background_denoising: true,
            recording: true,
            hipaa_mode: false,
            background_sound: BackgroundSound::None,
            end_call_phrases: vec!["goodbye".to_owned(), "bye".to_owned()],
            summary_prompt: "Summarize this call.".to_owned(),
            success_eval_prompt: "Was this call successful?".to_owned(),
            response_delay_ms: 0,
            endpointing_ms: 500,
        }
    }

    /// A copy with a fresh id and reset usage counters.
    pub fn duplicated(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", self.name),
            call_count: 0,
            created_at: now,
            ..self.clone()
        }
    }
}
