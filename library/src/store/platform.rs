//! The platform facade the UI talks to: one store per resource, seeded
//! from the mock generators, with every mutation routed through the
//! deferred-command queue.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use egui_flow_canvas::FlowGraph;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::error::PlatformError;
use crate::mock::{self, DayStat};
use crate::model::{ApiKey, Assistant, Call, PhoneNumber, Workflow};
use crate::store::{Clock, Latency, ResourceStore};

/// All session state. Owns a clock and latency profile so the whole
/// simulation is deterministic under test.
pub struct Platform {
    clock: Arc<dyn Clock>,
    latency: Latency,
    rng: StdRng,
    assistants: ResourceStore<Assistant>,
    calls: ResourceStore<Call>,
    phone_numbers: ResourceStore<PhoneNumber>,
    api_keys: ResourceStore<ApiKey>,
    workflows: ResourceStore<Workflow>,
    analytics: Vec<DayStat>,
}

impl Platform {
    pub fn new(clock: Arc<dyn Clock>, latency: Latency, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc::now();
        let assistants = mock::assistants(now);
        let phone_numbers = mock::phone_numbers(now, &assistants);
        let calls = mock::calls(&mut rng, now, &assistants, &phone_numbers);
        let api_keys = mock::api_keys(&mut rng, now);
        let workflows = mock::workflows(now);
        let analytics = mock::analytics(&mut rng, now);
        log::info!(
            "seeded platform: {} assistants, {} calls, {} workflows",
            assistants.len(),
            calls.len(),
            workflows.len()
        );
        Self {
            clock,
            latency,
            rng,
            assistants: ResourceStore::new(assistants),
            calls: ResourceStore::new(calls),
            phone_numbers: ResourceStore::new(phone_numbers),
            api_keys: ResourceStore::new(api_keys),
            workflows: ResourceStore::new(workflows),
            analytics,
        }
    }

    fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Apply every settled mutation. Called once per frame; a non-zero
    /// return means state changed and the UI should repaint.
    pub fn poll(&mut self) -> usize {
        let now = self.now();
        self.assistants.poll(now)
            + self.calls.poll(now)
            + self.phone_numbers.poll(now)
            + self.api_keys.poll(now)
            + self.workflows.poll(now)
    }

    /// Whether any mutation is still in flight.
    pub fn busy(&self) -> bool {
        self.assistants.pending() > 0
            || self.calls.pending() > 0
            || self.phone_numbers.pending() > 0
            || self.api_keys.pending() > 0
            || self.workflows.pending() > 0
    }

    pub fn assistants(&self) -> &[Assistant] {
        self.assistants.items()
    }

    pub fn calls(&self) -> &[Call] {
        self.calls.items()
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        self.phone_numbers.items()
    }

    pub fn api_keys(&self) -> &[ApiKey] {
        self.api_keys.items()
    }

    pub fn workflows(&self) -> &[Workflow] {
        self.workflows.items()
    }

    pub fn analytics(&self) -> &[DayStat] {
        &self.analytics
    }

    // --- assistants ---

    /// Queue creation of a template assistant; returns its id so the UI
    /// can open the editor once the create settles.
    pub fn create_assistant(&mut self) -> Uuid {
        let assistant = Assistant::template(Utc::now());
        let id = assistant.id;
        self.assistants
            .defer(self.now(), self.latency.create, move |items| {
                items.push(assistant)
            });
        id
    }

    /// Queue a full-record save. Unknown ids are dropped silently, which
    /// covers the save-after-delete race.
    pub fn save_assistant(&mut self, updated: Assistant) {
        self.assistants
            .defer(self.now(), self.latency.mutate, move |items| {
                if let Some(slot) = items.iter_mut().find(|a| a.id == updated.id) {
                    *slot = updated;
                }
            });
    }

    pub fn duplicate_assistant(&mut self, id: Uuid) {
        let now = Utc::now();
        self.assistants
            .defer(self.now(), self.latency.create, move |items| {
                if let Some(copy) = items.iter().find(|a| a.id == id).map(|a| a.duplicated(now)) {
                    items.push(copy);
                }
            });
    }

    pub fn delete_assistant(&mut self, id: Uuid) {
        self.assistants
            .defer(self.now(), self.latency.mutate, move |items| {
                items.retain(|a| a.id != id)
            });
    }

    // --- phone numbers ---

    pub fn create_phone_number(&mut self) -> Uuid {
        let number = PhoneNumber::template(Utc::now());
        let id = number.id;
        self.phone_numbers
            .defer(self.now(), self.latency.create, move |items| {
                items.push(number)
            });
        id
    }

    pub fn save_phone_number(&mut self, updated: PhoneNumber) {
        self.phone_numbers
            .defer(self.now(), self.latency.mutate, move |items| {
                if let Some(slot) = items.iter_mut().find(|n| n.id == updated.id) {
                    *slot = updated;
                }
            });
    }

    pub fn delete_phone_number(&mut self, id: Uuid) {
        self.phone_numbers
            .defer(self.now(), self.latency.mutate, move |items| {
                items.retain(|n| n.id != id)
            });
    }

    // --- api keys ---

    /// Mint a key and queue its insertion. The returned value carries the
    /// full secret; the stored copy only keeps the masked form, so this is
    /// the one chance to show it.
    pub fn create_api_key(&mut self, name: &str) -> ApiKey {
        let key = ApiKey::generate(name, &mut self.rng, Utc::now());
        let mut stored = key.clone();
        stored.full_key = None;
        self.api_keys
            .defer(self.now(), self.latency.create, move |items| {
                items.push(stored)
            });
        key
    }

    pub fn revoke_api_key(&mut self, id: Uuid) {
        self.api_keys
            .defer(self.now(), self.latency.mutate, move |items| {
                if let Some(key) = items.iter_mut().find(|k| k.id == id) {
                    key.revoked = true;
                }
            });
    }

    // --- workflows ---

    pub fn create_workflow(&mut self) -> Uuid {
        let workflow = Workflow::untitled(Utc::now());
        let id = workflow.id;
        self.workflows
            .defer(self.now(), self.latency.create, move |items| {
                items.push(workflow)
            });
        id
    }

    pub fn rename_workflow(&mut self, id: Uuid, name: String) {
        let now = Utc::now();
        self.workflows
            .defer(self.now(), self.latency.mutate, move |items| {
                if let Some(wf) = items.iter_mut().find(|w| w.id == id) {
                    wf.name = name;
                    wf.updated_at = now;
                }
            });
    }

    pub fn duplicate_workflow(&mut self, id: Uuid) {
        let now = Utc::now();
        self.workflows
            .defer(self.now(), self.latency.create, move |items| {
                if let Some(copy) = items.iter().find(|w| w.id == id).map(|w| w.duplicated(now)) {
                    items.push(copy);
                }
            });
    }

    pub fn delete_workflow(&mut self, id: Uuid) {
        self.workflows
            .defer(self.now(), self.latency.mutate, move |items| {
                items.retain(|w| w.id != id)
            });
    }

    /// Queue a graph save from the editor. The editor keeps working on its
    /// own copy; this writes it back.
    pub fn save_workflow_graph(&mut self, id: Uuid, graph: FlowGraph) {
        let now = Utc::now();
        self.workflows
            .defer(self.now(), self.latency.mutate, move |items| {
                if let Some(wf) = items.iter_mut().find(|w| w.id == id) {
                    wf.graph = graph;
                    wf.updated_at = now;
                }
            });
    }

    /// Validate uploaded graph JSON and queue the new workflow. Validation
    /// is synchronous so the dialog can show errors immediately.
    pub fn import_workflow(&mut self, name: &str, json: &str) -> Result<Uuid, PlatformError> {
        let workflow = Workflow::from_graph_json(name, json, Utc::now())?;
        let id = workflow.id;
        self.workflows
            .defer(self.now(), self.latency.create, move |items| {
                items.push(workflow)
            });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::ManualClock;
    use std::time::Duration;

    fn platform_with_clock(latency: Latency) -> (Arc<ManualClock>, Platform) {
        let clock = Arc::new(ManualClock::new());
        let platform = Platform::new(clock.clone(), latency, 42);
        (clock, platform)
    }

    #[test]
    fn mutations_wait_for_the_latency_window() {
        let (clock, mut platform) = platform_with_clock(Latency::simulated());
        let before = platform.assistants().len();

        platform.create_assistant();
        platform.poll();
        assert_eq!(platform.assistants().len(), before);
        assert!(platform.busy());

        clock.advance(Duration::from_millis(600));
        assert!(platform.poll() > 0);
        assert_eq!(platform.assistants().len(), before + 1);
        assert!(!platform.busy());
    }

    #[test]
    fn zero_latency_settles_on_first_poll() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let before = platform.workflows().len();
        let id = platform.create_workflow();
        platform.poll();

        let created = platform.workflows().iter().find(|w| w.id == id).unwrap();
        assert_eq!(platform.workflows().len(), before + 1);
        assert_eq!(created.name, "Untitled Workflow");
        assert_eq!(created.step_count(), 1);
    }

    #[test]
    fn save_for_unknown_id_is_a_no_op() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let mut ghost = Assistant::template(Utc::now());
        ghost.name = "Ghost".to_owned();
        let before = platform.assistants().len();

        platform.save_assistant(ghost);
        platform.poll();
        assert_eq!(platform.assistants().len(), before);
        assert!(platform.assistants().iter().all(|a| a.name != "Ghost"));
    }

    #[test]
    fn duplicate_appends_copy_with_reset_counters() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let original = platform.assistants()[0].clone();

        platform.duplicate_assistant(original.id);
        platform.poll();

        let copy = platform.assistants().last().unwrap();
        assert_eq!(copy.name, format!("{} (Copy)", original.name));
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.call_count, 0);
    }

    #[test]
    fn delete_racing_a_save_leaves_the_record_deleted() {
        // Both settle at the same deadline; submission order decides.
        let (clock, mut platform) = platform_with_clock(Latency::simulated());
        let mut edited = platform.assistants()[0].clone();
        let id = edited.id;
        edited.name = "Edited".to_owned();

        platform.save_assistant(edited);
        platform.delete_assistant(id);
        clock.advance(Duration::from_millis(400));
        platform.poll();

        assert!(platform.assistants().iter().all(|a| a.id != id));
    }

    #[test]
    fn created_api_key_is_stored_without_its_secret() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let revealed = platform.create_api_key("CI Key");
        platform.poll();

        assert!(revealed.full_key.is_some());
        let stored = platform
            .api_keys()
            .iter()
            .find(|k| k.id == revealed.id)
            .unwrap();
        assert!(stored.full_key.is_none());
        assert_eq!(stored.masked, revealed.masked);
    }

    #[test]
    fn revoke_marks_key_without_removing_it() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let id = platform.api_keys()[0].id;
        let before = platform.api_keys().len();

        platform.revoke_api_key(id);
        platform.poll();
        assert_eq!(platform.api_keys().len(), before);
        assert!(platform.api_keys()[0].revoked);
    }

    #[test]
    fn graph_save_updates_timestamp_and_steps() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let id = platform.workflows()[0].id;
        let stamp = platform.workflows()[0].updated_at;

        platform.save_workflow_graph(id, FlowGraph::starter());
        platform.poll();

        let saved = platform.workflows().iter().find(|w| w.id == id).unwrap();
        assert_eq!(saved.step_count(), 1);
        assert!(saved.updated_at >= stamp);
    }

    #[test]
    fn import_rejects_bad_json_without_queueing() {
        let (_clock, mut platform) = platform_with_clock(Latency::ZERO);
        let before = platform.workflows().len();

        assert!(platform.import_workflow("Bad", "not json").is_err());
        assert!(!platform.busy());
        platform.poll();
        assert_eq!(platform.workflows().len(), before);
    }
}
