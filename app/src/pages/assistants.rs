//! Assistant roster and configuration form.
//!
//! The form edits a draft copy; Save queues the write-back, so the list
//! keeps showing the settled record until the mutation lands.

use chrono::Utc;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::{
    Assistant, BackgroundSound, LlmProvider, Status, TranscriberProvider, VoiceProvider,
};
use uuid::Uuid;

use crate::ui::format;
use crate::ui::toast::Toasts;

const LLM_PROVIDERS: [LlmProvider; 5] = [
    LlmProvider::OpenAi,
    LlmProvider::Anthropic,
    LlmProvider::Together,
    LlmProvider::Groq,
    LlmProvider::Custom,
];

const VOICE_PROVIDERS: [VoiceProvider; 7] = [
    VoiceProvider::ElevenLabs,
    VoiceProvider::Deepgram,
    VoiceProvider::PlayHt,
    VoiceProvider::Rime,
    VoiceProvider::Azure,
    VoiceProvider::Cartesia,
    VoiceProvider::OpenAi,
];

const TRANSCRIBERS: [TranscriberProvider; 3] = [
    TranscriberProvider::Deepgram,
    TranscriberProvider::AssemblyAi,
    TranscriberProvider::Talkscriber,
];

#[derive(Default)]
pub struct AssistantsState {
    selected: Option<Uuid>,
    draft: Option<Assistant>,
    search: String,
}

pub fn show(ui: &mut egui::Ui, platform: &mut Platform, state: &mut AssistantsState, toasts: &mut Toasts) {
    ui.horizontal(|ui| {
        ui.heading("Assistants");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} New Assistant", icons::PLUS)).clicked() {
                let id = platform.create_assistant();
                state.selected = Some(id);
                state.draft = None;
                toasts.push(ui.ctx(), "Creating assistant...");
            }
        });
    });
    ui.add_space(6.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.search)
            .hint_text(format!("{} Search assistants", icons::MAGNIFYING_GLASS))
            .desired_width(240.0),
    );
    ui.add_space(8.0);

    // Reload the draft when the selection moves or the record vanished.
    if state.draft.as_ref().map(|d| d.id) != state.selected {
        state.draft = state
            .selected
            .and_then(|id| platform.assistants().iter().find(|a| a.id == id).cloned());
    }

    let mut action = FormAction::None;
    egui::SidePanel::right("assistant_detail")
        .resizable(true)
        .default_width(380.0)
        .show_inside(ui, |ui| match &mut state.draft {
            Some(draft) => action = edit_form(ui, draft),
            None => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.weak("Select an assistant to configure it.");
                });
            }
        });
    apply_action(action, platform, state, toasts, ui.ctx());

    egui::CentralPanel::default().show_inside(ui, |ui| {
        roster(ui, platform, state);
    });
}

fn roster(ui: &mut egui::Ui, platform: &Platform, state: &mut AssistantsState) {
    let query = state.search.to_lowercase();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for assistant in platform.assistants() {
            if !query.is_empty() && !assistant.name.to_lowercase().contains(&query) {
                continue;
            }
            let selected = state.selected == Some(assistant.id);
            let status = match assistant.status {
                Status::Active => RichText::new("● active").color(Color32::from_rgb(34, 197, 94)),
                Status::Inactive => RichText::new("● inactive").weak(),
            };
            let response = ui.selectable_label(
                selected,
                RichText::new(format!(
                    "{}  {}\n      {} · {} · {} calls",
                    icons::ROBOT,
                    assistant.name,
                    assistant.llm_provider.label(),
                    assistant.model,
                    assistant.call_count,
                ))
                .size(13.5),
            );
            ui.horizontal(|ui| {
                ui.add_space(26.0);
                ui.label(status);
                ui.weak(format!(
                    "last active {}",
                    format::relative(assistant.last_active, Utc::now())
                ));
            });
            ui.add_space(4.0);
            if response.clicked() {
                state.selected = Some(assistant.id);
                state.draft = None;
            }
        }
    });
}

enum FormAction {
    None,
    Save,
    Duplicate,
    Delete,
}

fn edit_form(ui: &mut egui::Ui, draft: &mut Assistant) -> FormAction {
    let mut action = FormAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(6.0);
        ui.text_edit_singleline(&mut draft.name);
        ui.add_space(8.0);

        ui.label(RichText::new("Model").strong());
        egui::ComboBox::from_label("Provider")
            .selected_text(draft.llm_provider.label())
            .show_ui(ui, |ui| {
                for provider in LLM_PROVIDERS {
                    if ui
                        .selectable_value(&mut draft.llm_provider, provider, provider.label())
                        .changed()
                    {
                        // Keep the model in the provider's catalog.
                        draft.model = provider.models()[0].to_owned();
                    }
                }
            });
        egui::ComboBox::from_label("Model")
            .selected_text(&draft.model)
            .show_ui(ui, |ui| {
                for model in draft.llm_provider.models() {
                    ui.selectable_value(&mut draft.model, (*model).to_owned(), *model);
                }
            });
        ui.add(egui::Slider::new(&mut draft.temperature, 0.0..=2.0).text("Temperature"));
        ui.add(egui::Slider::new(&mut draft.max_tokens, 64..=4096).text("Max tokens"));

        ui.add_space(8.0);
        ui.label(RichText::new("Voice").strong());
        egui::ComboBox::from_label("Voice provider")
            .selected_text(draft.voice_provider.label())
            .show_ui(ui, |ui| {
                for provider in VOICE_PROVIDERS {
                    ui.selectable_value(&mut draft.voice_provider, provider, provider.label());
                }
            });
        ui.horizontal(|ui| {
            ui.label("Voice");
            ui.text_edit_singleline(&mut draft.voice_name);
        });
        ui.add(egui::Slider::new(&mut draft.voice_speed, 0.5..=2.0).text("Speed"));
        egui::ComboBox::from_label("Background sound")
            .selected_text(match draft.background_sound {
                BackgroundSound::Office => "Office",
                BackgroundSound::Coffee => "Coffee shop",
                BackgroundSound::None => "None",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut draft.background_sound, BackgroundSound::None, "None");
                ui.selectable_value(&mut draft.background_sound, BackgroundSound::Office, "Office");
                ui.selectable_value(&mut draft.background_sound, BackgroundSound::Coffee, "Coffee shop");
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Transcription").strong());
        egui::ComboBox::from_label("Transcriber")
            .selected_text(draft.transcriber_provider.label())
            .show_ui(ui, |ui| {
                for provider in TRANSCRIBERS {
                    ui.selectable_value(&mut draft.transcriber_provider, provider, provider.label());
                }
            });
        ui.horizontal(|ui| {
            ui.label("Language");
            ui.text_edit_singleline(&mut draft.language);
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Conversation").strong());
        ui.label("First message");
        ui.text_edit_multiline(&mut draft.first_message);
        ui.label("System prompt");
        ui.add(
            egui::TextEdit::multiline(&mut draft.system_prompt)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::Slider::new(&mut draft.endpointing_ms, 0..=2000).text("Endpointing (ms)"),
        );
        ui.add(
            egui::Slider::new(&mut draft.response_delay_ms, 0..=2000).text("Response delay (ms)"),
        );

        ui.add_space(8.0);
        ui.checkbox(&mut draft.recording, "Record calls");
        ui.checkbox(&mut draft.background_denoising, "Background denoising");
        ui.checkbox(&mut draft.hipaa_mode, "HIPAA compliance mode");
        let mut active = draft.status.is_active();
        if ui.checkbox(&mut active, "Active").changed() {
            draft.status = if active { Status::Active } else { Status::Inactive };
        }

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(format!("{} Save", icons::FLOPPY_DISK)).clicked() {
                action = FormAction::Save;
            }
            if ui.button(format!("{} Duplicate", icons::COPY)).clicked() {
                action = FormAction::Duplicate;
            }
            if ui
                .button(RichText::new(format!("{} Delete", icons::TRASH)).color(Color32::from_rgb(239, 68, 68)))
                .clicked()
            {
                action = FormAction::Delete;
            }
        });
    });

    action
}

fn apply_action(
    action: FormAction,
    platform: &mut Platform,
    state: &mut AssistantsState,
    toasts: &mut Toasts,
    ctx: &egui::Context,
) {
    match action {
        FormAction::None => {}
        FormAction::Save => {
            if let Some(draft) = &state.draft {
                platform.save_assistant(draft.clone());
                toasts.push(ctx, format!("Saving \"{}\"...", draft.name));
            }
        }
        FormAction::Duplicate => {
            if let Some(id) = state.selected {
                platform.duplicate_assistant(id);
                toasts.push(ctx, "Duplicating assistant...");
            }
        }
        FormAction::Delete => {
            if let Some(id) = state.selected {
                platform.delete_assistant(id);
                state.selected = None;
                state.draft = None;
                toasts.push(ctx, "Deleting assistant...");
            }
        }
    }
}
