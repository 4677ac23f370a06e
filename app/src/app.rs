use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Visuals};
use library::Platform;
use library::store::{Latency, SystemClock};

use crate::pages;
use crate::pages::workflow_editor::{EditorEvent, EditorState};
use crate::pages::workflows::WorkflowsEvent;
use crate::ui::sidebar::{self, Page};
use crate::ui::toast::Toasts;

pub struct ConsoleApp {
    platform: Platform,
    page: Page,
    toasts: Toasts,
    assistants: pages::assistants::AssistantsState,
    calls: pages::calls::CallsState,
    phone_numbers: pages::phone_numbers::PhoneNumbersState,
    api_keys: pages::api_keys::ApiKeysState,
    workflows: pages::workflows::WorkflowsState,
    /// Active canvas session; shown instead of the workflow list.
    editor: Option<EditorState>,
    /// A just-created workflow to open once its deferred insert settles.
    pending_editor: Option<uuid::Uuid>,
}

impl ConsoleApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = egui::Color32::from_rgb(12, 12, 18);
        visuals.selection.bg_fill = egui::Color32::from_rgb(99, 102, 241);
        cc.egui_ctx.set_visuals(visuals);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            platform: Platform::new(Arc::new(SystemClock), Latency::default(), seed),
            page: Page::Dashboard,
            toasts: Toasts::default(),
            assistants: Default::default(),
            calls: Default::default(),
            phone_numbers: Default::default(),
            api_keys: Default::default(),
            workflows: Default::default(),
            editor: None,
            pending_editor: None,
        }
    }

    /// Open the canvas editor for `id` once the workflow is visible in the
    /// store. Creation is deferred, so a just-created id may take a poll or
    /// two to materialize; until then we stay on the list.
    fn try_open_editor(&mut self, id: uuid::Uuid) {
        if let Some(workflow) = self.platform.workflows().iter().find(|w| w.id == id) {
            log::info!("opening editor for workflow \"{}\"", workflow.name);
            self.editor = Some(EditorState::open(workflow));
        } else {
            self.pending_editor = Some(id);
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.platform.poll();
        if self.platform.busy() {
            // Deferred mutations settle without further input.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if let Some(id) = self.pending_editor.take() {
            self.try_open_editor(id);
        }

        if let Some(page) = sidebar::show(ctx, self.page, self.platform.busy()) {
            if page != self.page {
                log::debug!("navigating to {}", page.title());
                self.page = page;
                self.editor = None;
                self.pending_editor = None;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Dashboard => pages::dashboard::show(ui, &self.platform),
            Page::Assistants => pages::assistants::show(
                ui,
                &mut self.platform,
                &mut self.assistants,
                &mut self.toasts,
            ),
            Page::Calls => pages::calls::show(ui, &self.platform, &mut self.calls),
            Page::PhoneNumbers => pages::phone_numbers::show(
                ui,
                &mut self.platform,
                &mut self.phone_numbers,
                &mut self.toasts,
            ),
            Page::ApiKeys => pages::api_keys::show(
                ui,
                &mut self.platform,
                &mut self.api_keys,
                &mut self.toasts,
            ),
            Page::Workflows => match &mut self.editor {
                Some(editor) => {
                    if let EditorEvent::Close =
                        pages::workflow_editor::show(ui, &mut self.platform, editor, &mut self.toasts)
                    {
                        self.editor = None;
                    }
                }
                None => {
                    if let WorkflowsEvent::Open(id) = pages::workflows::show(
                        ui,
                        &mut self.platform,
                        &mut self.workflows,
                        &mut self.toasts,
                    ) {
                        self.try_open_editor(id);
                    }
                }
            },
        });

        self.toasts.show(ctx);
    }
}
