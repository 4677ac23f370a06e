//! Mock data generators. Everything the console shows comes from here;
//! generators take the RNG and the reference time so callers can seed them.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use egui_flow_canvas::{FlowGraph, FlowNode, NodeKind};
use egui::Pos2;
use rand::Rng;
use uuid::Uuid;

use crate::model::{
    ApiKey, Assistant, Call, CallDirection, CallStatus, CostBreakdown, LlmProvider, Permission,
    PhoneNumber, Sentiment, Speaker, StageLatency, Status, TelephonyProvider, TranscriptEntry,
    VoiceProvider, Workflow,
};

/// One day of aggregated platform activity, for the dashboard chart.
#[derive(Clone, Copy, Debug)]
pub struct DayStat {
    pub date: NaiveDate,
    pub calls: u32,
    pub minutes: u32,
    pub cost: f64,
    pub success_rate: f32,
}

fn assistant(
    now: DateTime<Utc>,
    name: &str,
    first_message: &str,
    system_prompt: &str,
    llm: LlmProvider,
    model: &str,
    voice: (VoiceProvider, &str, &str),
    status: Status,
    call_count: u64,
    last_active_hours: i64,
    created_days: i64,
) -> Assistant {
    Assistant {
        name: name.to_owned(),
        first_message: first_message.to_owned(),
        system_prompt: system_prompt.to_owned(),
        llm_provider: llm,
        model: model.to_owned(),
        voice_provider: voice.0,
        voice_id: voice.1.to_owned(),
        voice_name: voice.2.to_owned(),
        status,
        call_count,
        last_active: now - Duration::hours(last_active_hours),
        created_at: now - Duration::days(created_days),
        ..Assistant::template(now)
    }
}

/// The fixed assistant roster.
pub fn assistants(now: DateTime<Utc>) -> Vec<Assistant> {
    vec![
        assistant(
            now,
            "SupportBot Pro",
            "Hi! I'm here to help with your support questions. What can I assist you with today?",
            "You are a professional customer support agent for Acme Corp. Be friendly, concise, \
             and always try to resolve issues on the first call. If you cannot resolve an issue, \
             escalate to a human agent.",
            LlmProvider::OpenAi,
            "gpt-4o",
            (VoiceProvider::ElevenLabs, "rachel", "Rachel"),
            Status::Active,
            1284,
            2,
            45,
        ),
        assistant(
            now,
            "Sales Qualifier",
            "Hello! I'm calling on behalf of TechVentures. I'd love to learn about your business \
             needs. Do you have a few minutes?",
            "You are an outbound sales development representative. Your goal is to qualify leads, \
             understand pain points, and schedule demos with account executives.",
            LlmProvider::Anthropic,
            "claude-3-5-sonnet",
            (VoiceProvider::ElevenLabs, "adam", "Adam"),
            Status::Active,
            876,
            5,
            60,
        ),
        assistant(
            now,
            "Appointment Scheduler",
            "Hi, this is Aria from MedCenter. I'm calling to confirm your upcoming appointment. \
             Is this a good time?",
            "You are a medical appointment scheduling assistant. Help patients confirm, \
             reschedule, or cancel appointments. Always verify patient identity before sharing \
             any information.",
            LlmProvider::OpenAi,
            "gpt-4o-mini",
            (VoiceProvider::PlayHt, "aria", "Aria"),
            Status::Active,
            2341,
            0,
            90,
        ),
        assistant(
            now,
            "Lead Follow-Up Bot",
            "Hi! Is this a good time? I'm following up on your recent inquiry about our services.",
            "You are a lead nurturing specialist. Follow up on web form inquiries, answer product \
             questions, and move prospects through the sales funnel.",
            LlmProvider::Groq,
            "llama-3-70b-groq",
            (VoiceProvider::ElevenLabs, "bella", "Bella"),
            Status::Inactive,
            445,
            72,
            30,
        ),
        assistant(
            now,
            "Survey Collector",
            "Hello! This is a quick 2-minute survey call about your recent stay. Would you be \
             willing to share your feedback?",
            "You are a customer satisfaction survey agent. Collect NPS scores, qualitative \
             feedback, and specific ratings for different aspects of the service.",
            LlmProvider::OpenAi,
            "gpt-4o-mini",
            (VoiceProvider::OpenAi, "nova", "Nova"),
            Status::Active,
            3890,
            1,
            120,
        ),
    ]
}

pub fn phone_numbers(now: DateTime<Utc>, assistants: &[Assistant]) -> Vec<PhoneNumber> {
    let assigned = |i: usize| assistants.get(i).map(|a| a.id);
    vec![
        PhoneNumber {
            number: "+14155552671".to_owned(),
            label: "Main Support Line".to_owned(),
            assigned_assistant_id: assigned(0),
            inbound_count: 8420,
            outbound_count: 234,
            created_at: now - Duration::days(90),
            webhook_url: "https://api.myapp.com/webhooks/calls".to_owned(),
            ..PhoneNumber::template(now)
        },
        PhoneNumber {
            number: "+12125559834".to_owned(),
            label: "Sales Outbound".to_owned(),
            assigned_assistant_id: assigned(1),
            inbound_count: 120,
            outbound_count: 3410,
            created_at: now - Duration::days(60),
            ..PhoneNumber::template(now)
        },
        PhoneNumber {
            number: "+13105557290".to_owned(),
            provider: TelephonyProvider::Vonage,
            label: "Medical Scheduler".to_owned(),
            assigned_assistant_id: assigned(2),
            inbound_count: 5621,
            outbound_count: 890,
            monthly_cost: 1.5,
            created_at: now - Duration::days(120),
            webhook_url: "https://api.medcenter.com/voice/webhook".to_owned(),
            forwarding_enabled: true,
            forwarding_number: "+18005551234".to_owned(),
            ..PhoneNumber::template(now)
        },
    ]
}

fn transcript(assistant_name: &str) -> Vec<TranscriptEntry> {
    let lines: [(Speaker, String, u32, Sentiment); 8] = [
        (
            Speaker::Assistant,
            format!("Hello! This is {assistant_name}. How can I help you today?"),
            0,
            Sentiment::Neutral,
        ),
        (
            Speaker::User,
            "Hi, I have a question about my account.".to_owned(),
            4,
            Sentiment::Neutral,
        ),
        (
            Speaker::Assistant,
            "Of course! Can you please verify your name and account email?".to_owned(),
            7,
            Sentiment::Positive,
        ),
        (
            Speaker::User,
            "Sure, my name is John and the email is john@example.com.".to_owned(),
            13,
            Sentiment::Neutral,
        ),
        (
            Speaker::User,
            "I'm having trouble accessing my dashboard. It keeps showing an error when I log in."
                .to_owned(),
            22,
            Sentiment::Negative,
        ),
        (
            Speaker::Assistant,
            "I can see a few failed login attempts. I'll send a password reset link to your \
             email right now."
                .to_owned(),
            29,
            Sentiment::Neutral,
        ),
        (
            Speaker::User,
            "Great, thank you so much!".to_owned(),
            51,
            Sentiment::Positive,
        ),
        (
            Speaker::Assistant,
            "You're welcome! Thank you for calling. Goodbye!".to_owned(),
            54,
            Sentiment::Positive,
        ),
    ];
    lines
        .into_iter()
        .map(|(speaker, text, offset_secs, sentiment)| TranscriptEntry {
            speaker,
            text,
            offset_secs,
            sentiment: Some(sentiment),
        })
        .collect()
}

// Per-second cost rates in USD.
const LLM_RATE: f64 = 0.0002;
const TTS_RATE: f64 = 0.0001;
const STT_RATE: f64 = 0.00005;
const TEL_RATE: f64 = 0.00013;

/// Generate the call history: 220 calls over the last 30 days, weighted
/// toward successful completions, sorted newest first.
pub fn calls(
    rng: &mut impl Rng,
    now: DateTime<Utc>,
    assistants: &[Assistant],
    numbers: &[PhoneNumber],
) -> Vec<Call> {
    let statuses = [
        CallStatus::Ended,
        CallStatus::Ended,
        CallStatus::Ended,
        CallStatus::Ended,
        CallStatus::Ended,
        CallStatus::Failed,
        CallStatus::Busy,
        CallStatus::NoAnswer,
    ];
    let external = [
        "+14155551234",
        "+12125550987",
        "+18005559876",
        "+17325554321",
    ];

    let mut out = Vec::with_capacity(220);
    for _ in 0..220 {
        let assistant = &assistants[rng.random_range(0..assistants.len())];
        let status = statuses[rng.random_range(0..statuses.len())];
        let direction = if rng.random_bool(0.6) {
            CallDirection::Inbound
        } else {
            CallDirection::Outbound
        };
        let duration_secs = if status == CallStatus::Ended {
            rng.random_range(30..330)
        } else {
            0
        };
        let started_at = now - Duration::minutes(rng.random_range(0..43_200));
        let platform_number = &numbers[rng.random_range(0..numbers.len())].number;
        let external_number = external[rng.random_range(0..external.len())];
        let (from_number, to_number) = match direction {
            CallDirection::Inbound => (external_number.to_owned(), platform_number.clone()),
            CallDirection::Outbound => (platform_number.clone(), external_number.to_owned()),
        };

        let secs = duration_secs as f64;
        let breakdown = CostBreakdown {
            llm: secs * LLM_RATE,
            tts: secs * TTS_RATE,
            stt: secs * STT_RATE,
            telephony: secs * TEL_RATE,
        };

        out.push(Call {
            id: Uuid::new_v4(),
            direction,
            status,
            assistant_id: assistant.id,
            assistant_name: assistant.name.clone(),
            from_number,
            to_number,
            duration_secs,
            cost: breakdown.total(),
            started_at,
            ended_at: started_at + Duration::seconds(duration_secs as i64),
            transcript: if status == CallStatus::Ended {
                transcript(&assistant.name)
            } else {
                Vec::new()
            },
            summary: (status == CallStatus::Ended).then(|| {
                "Customer issue was resolved successfully. Password reset link was sent."
                    .to_owned()
            }),
            success_eval: (status == CallStatus::Ended).then(|| rng.random_bool(0.8)),
            latency: StageLatency {
                llm_ms: rng.random_range(200..800),
                tts_ms: rng.random_range(80..280),
                stt_ms: rng.random_range(50..200),
            },
            cost_breakdown: breakdown,
        });
    }
    out.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    out
}

pub fn api_keys(rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<ApiKey> {
    let mut production = ApiKey::generate("Production API Key", rng, now - Duration::days(60));
    production.permissions = vec![Permission::Read, Permission::Write];
    production.last_used = Some(now - Duration::minutes(5));
    production.full_key = None;

    let mut staging = ApiKey::generate("Dev / Staging Key", rng, now - Duration::days(30));
    staging.permissions = vec![Permission::Read, Permission::Write, Permission::Admin];
    staging.last_used = Some(now - Duration::hours(2));
    staging.full_key = None;

    let mut analytics = ApiKey::generate("Read-Only Analytics Key", rng, now - Duration::days(10));
    analytics.expires_at = Some(now + Duration::days(60));
    analytics.full_key = None;

    vec![production, staging, analytics]
}

fn flow_node(kind: NodeKind, x: f32, y: f32, label: &str, prompt: Option<&str>) -> FlowNode {
    FlowNode {
        id: Uuid::new_v4(),
        kind,
        pos: Pos2::new(x, y),
        label: label.to_owned(),
        prompt: prompt.map(str::to_owned),
    }
}

fn appointment_scheduler_graph() -> FlowGraph {
    let mut graph = FlowGraph::default();
    let nodes = [
        flow_node(NodeKind::Start, 340.0, 20.0, "Start", None),
        flow_node(
            NodeKind::Conversation,
            280.0,
            120.0,
            "Greet & Identify",
            Some("Greet the caller and ask for their name and reason for calling."),
        ),
        flow_node(NodeKind::Condition, 120.0, 240.0, "Existing Patient?", None),
        flow_node(
            NodeKind::Conversation,
            340.0,
            240.0,
            "New Patient Intake",
            Some("Collect patient information: name, DOB, insurance."),
        ),
        flow_node(
            NodeKind::Conversation,
            120.0,
            360.0,
            "Verify Identity",
            Some("Verify the patient's date of birth and last four of SSN."),
        ),
        flow_node(NodeKind::ApiRequest, 340.0, 360.0, "Check Availability", None),
        flow_node(
            NodeKind::Conversation,
            220.0,
            480.0,
            "Book Appointment",
            Some("Offer available slots and confirm the booking."),
        ),
        flow_node(NodeKind::ApiRequest, 220.0, 580.0, "Send Confirmation SMS", None),
        flow_node(NodeKind::End, 220.0, 680.0, "End Call", None),
    ];
    let ids: Vec<Uuid> = nodes.iter().map(|n| n.id).collect();
    graph.nodes.extend(nodes);

    graph.add_edge(ids[0], ids[1], None);
    graph.add_edge(ids[1], ids[2], Some("patient type?"));
    graph.add_edge(ids[2], ids[4], Some("existing"));
    graph.add_edge(ids[2], ids[3], Some("new"));
    graph.add_edge(ids[3], ids[5], None);
    graph.add_edge(ids[4], ids[5], None);
    graph.add_edge(ids[5], ids[6], None);
    graph.add_edge(ids[6], ids[7], None);
    graph.add_edge(ids[7], ids[8], None);
    graph
}

fn lead_qualification_graph() -> FlowGraph {
    let mut graph = FlowGraph::default();
    let nodes = [
        flow_node(NodeKind::Start, 200.0, 20.0, "Start", None),
        flow_node(NodeKind::Conversation, 160.0, 120.0, "Introduce & Qualify", None),
        flow_node(NodeKind::Condition, 160.0, 240.0, "Budget Qualified?", None),
        flow_node(NodeKind::Transfer, 60.0, 360.0, "Transfer to Sales", None),
        flow_node(
            NodeKind::Conversation,
            280.0,
            360.0,
            "Nurture & Schedule Demo",
            None,
        ),
        flow_node(NodeKind::End, 180.0, 460.0, "End", None),
    ];
    let ids: Vec<Uuid> = nodes.iter().map(|n| n.id).collect();
    graph.nodes.extend(nodes);

    graph.add_edge(ids[0], ids[1], None);
    graph.add_edge(ids[1], ids[2], None);
    graph.add_edge(ids[2], ids[3], Some("qualified"));
    graph.add_edge(ids[2], ids[4], Some("not qualified"));
    graph.add_edge(ids[3], ids[5], None);
    graph.add_edge(ids[4], ids[5], None);
    graph
}

pub fn workflows(now: DateTime<Utc>) -> Vec<Workflow> {
    vec![
        Workflow {
            id: Uuid::new_v4(),
            name: "Appointment Scheduler".to_owned(),
            created_at: now - Duration::days(6),
            updated_at: now - Duration::hours(4),
            graph: appointment_scheduler_graph(),
        },
        Workflow {
            id: Uuid::new_v4(),
            name: "Lead Qualification".to_owned(),
            created_at: now - Duration::days(10),
            updated_at: now - Duration::days(8),
            graph: lead_qualification_graph(),
        },
    ]
}

/// Thirty days of daily aggregates, oldest first.
pub fn analytics(rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<DayStat> {
    (0..30)
        .map(|i| {
            let date = (now - Duration::days(29 - i)).date_naive();
            let calls = rng.random_range(40..160);
            let minutes = (calls as f32 * rng.random_range(1.5f32..4.5)) as u32;
            let cost = minutes as f64 * 0.018 + rng.random_range(0.0..5.0);
            let success_rate = rng.random_range(75.0..95.0);
            DayStat {
                date,
                calls,
                minutes,
                cost,
                success_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn calls_are_sorted_newest_first() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        let roster = assistants(now);
        let numbers = phone_numbers(now, &roster);
        let calls = calls(&mut rng, now, &roster, &numbers);

        assert_eq!(calls.len(), 220);
        assert!(calls.windows(2).all(|w| w[0].started_at >= w[1].started_at));
    }

    #[test]
    fn ended_calls_carry_transcript_and_costs() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        let roster = assistants(now);
        let numbers = phone_numbers(now, &roster);
        for call in calls(&mut rng, now, &roster, &numbers) {
            match call.status {
                CallStatus::Ended => {
                    assert!(!call.transcript.is_empty());
                    assert!(call.duration_secs >= 30);
                    let expected = call.duration_secs as f64
                        * (LLM_RATE + TTS_RATE + STT_RATE + TEL_RATE);
                    assert!((call.cost - expected).abs() < 1e-9);
                }
                _ => {
                    assert!(call.transcript.is_empty());
                    assert_eq!(call.duration_secs, 0);
                    assert_eq!(call.cost, 0.0);
                }
            }
        }
    }

    #[test]
    fn sample_workflows_have_no_dangling_edges() {
        for wf in workflows(Utc::now()) {
            for edge in &wf.graph.edges {
                assert!(wf.graph.node(edge.from).is_some());
                assert!(wf.graph.node(edge.to).is_some());
            }
        }
    }

    #[test]
    fn analytics_covers_thirty_consecutive_days() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        let days = analytics(&mut rng, now);
        assert_eq!(days.len(), 30);
        assert!(days.windows(2).all(|w| w[1].date > w[0].date));
        assert_eq!(days[29].date, now.date_naive());
    }

    #[test]
    fn numbers_are_assigned_to_known_assistants() {
        let now = Utc::now();
        let roster = assistants(now);
        for pn in phone_numbers(now, &roster) {
            let id = pn.assigned_assistant_id.unwrap();
            assert!(roster.iter().any(|a| a.id == id));
        }
    }
}
