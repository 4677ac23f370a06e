//! Call history: filterable log plus a detail panel with transcript,
//! latency, and cost attribution.

use chrono::Utc;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::{Call, CallDirection, CallStatus, Sentiment, Speaker};
use uuid::Uuid;

use crate::ui::format;

#[derive(Default)]
pub struct CallsState {
    status_filter: Option<CallStatus>,
    direction_filter: Option<CallDirection>,
    search: String,
    selected: Option<Uuid>,
}

pub fn show(ui: &mut egui::Ui, platform: &Platform, state: &mut CallsState) {
    ui.heading("Calls");
    ui.add_space(8.0);

    filter_bar(ui, state);
    ui.add_space(8.0);

    let now = Utc::now();
    let query = state.search.to_lowercase();
    let visible: Vec<&Call> = platform
        .calls()
        .iter()
        .filter(|c| state.status_filter.is_none_or(|s| c.status == s))
        .filter(|c| state.direction_filter.is_none_or(|d| c.direction == d))
        .filter(|c| {
            query.is_empty()
                || c.assistant_name.to_lowercase().contains(&query)
                || c.from_number.contains(&query)
                || c.to_number.contains(&query)
        })
        .collect();

    let selected_call = state
        .selected
        .and_then(|id| platform.calls().iter().find(|c| c.id == id));
    if let Some(call) = selected_call {
        egui::SidePanel::right("call_detail")
            .resizable(true)
            .default_width(400.0)
            .show_inside(ui, |ui| detail(ui, call));
    }

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.weak(format!("{} of {} calls", visible.len(), platform.calls().len()));
        ui.add_space(4.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("call_log")
                .num_columns(7)
                .spacing([18.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    header(ui);
                    for call in visible {
                        row(ui, call, state, now);
                    }
                });
        });
    });
}

fn filter_bar(ui: &mut egui::Ui, state: &mut CallsState) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(state.status_filter.map_or("All statuses", |s| s.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.status_filter, None, "All statuses");
                for status in CallStatus::ALL {
                    ui.selectable_value(&mut state.status_filter, Some(status), status.label());
                }
            });
        egui::ComboBox::from_id_salt("direction_filter")
            .selected_text(state.direction_filter.map_or("All directions", |d| d.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.direction_filter, None, "All directions");
                ui.selectable_value(&mut state.direction_filter, Some(CallDirection::Inbound), "Inbound");
                ui.selectable_value(&mut state.direction_filter, Some(CallDirection::Outbound), "Outbound");
            });
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text(format!("{} assistant or number", icons::MAGNIFYING_GLASS))
                .desired_width(240.0),
        );
    });
}

fn header(ui: &mut egui::Ui) {
    for title in ["Status", "Direction", "Assistant", "From", "To", "Duration", "Started"] {
        ui.label(RichText::new(title).strong().size(12.0));
    }
    ui.end_row();
}

fn row(ui: &mut egui::Ui, call: &Call, state: &mut CallsState, now: chrono::DateTime<Utc>) {
    let selected = state.selected == Some(call.id);
    let clicked = ui
        .selectable_label(selected, RichText::new(call.status.label()).color(status_color(call.status)))
        .clicked();
    ui.label(match call.direction {
        CallDirection::Inbound => format!("{} In", icons::PHONE_INCOMING),
        CallDirection::Outbound => format!("{} Out", icons::PHONE_OUTGOING),
    });
    ui.label(&call.assistant_name);
    ui.monospace(&call.from_number);
    ui.monospace(&call.to_number);
    ui.label(format::duration(call.duration_secs));
    ui.weak(format::relative(call.started_at, now));
    ui.end_row();

    if clicked {
        state.selected = if selected { None } else { Some(call.id) };
    }
}

fn status_color(status: CallStatus) -> Color32 {
    match status {
        CallStatus::Ended => Color32::from_rgb(34, 197, 94),
        CallStatus::Failed => Color32::from_rgb(239, 68, 68),
        CallStatus::InProgress => Color32::from_rgb(99, 102, 241),
        CallStatus::Busy | CallStatus::NoAnswer => Color32::from_rgb(245, 158, 11),
    }
}

fn detail(ui: &mut egui::Ui, call: &Call) {
    ui.add_space(6.0);
    ui.label(RichText::new(&call.assistant_name).size(16.0).strong());
    ui.weak(format!(
        "{} · {} · {}",
        call.direction.label(),
        call.status.label(),
        format::duration(call.duration_secs)
    ));
    ui.monospace(format!("{} → {}", call.from_number, call.to_number));
    ui.add_space(8.0);

    if let Some(summary) = &call.summary {
        ui.label(RichText::new("Summary").strong());
        ui.label(summary);
        if let Some(success) = call.success_eval {
            ui.label(if success {
                RichText::new(format!("{} Successful", icons::CHECK_CIRCLE))
                    .color(Color32::from_rgb(34, 197, 94))
            } else {
                RichText::new(format!("{} Unsuccessful", icons::X_CIRCLE))
                    .color(Color32::from_rgb(239, 68, 68))
            });
        }
        ui.add_space(8.0);
    }

    ui.label(RichText::new("Latency").strong());
    ui.label(format!(
        "LLM {} ms · TTS {} ms · STT {} ms",
        call.latency.llm_ms, call.latency.tts_ms, call.latency.stt_ms
    ));
    ui.add_space(8.0);

    ui.label(RichText::new("Cost").strong());
    egui::Grid::new("cost_breakdown").num_columns(2).show(ui, |ui| {
        ui.label("LLM");
        ui.label(format::cost(call.cost_breakdown.llm));
        ui.end_row();
        ui.label("Voice");
        ui.label(format::cost(call.cost_breakdown.tts));
        ui.end_row();
        ui.label("Transcription");
        ui.label(format::cost(call.cost_breakdown.stt));
        ui.end_row();
        ui.label("Telephony");
        ui.label(format::cost(call.cost_breakdown.telephony));
        ui.end_row();
        ui.label(RichText::new("Total").strong());
        ui.label(RichText::new(format::cost(call.cost_breakdown.total())).strong());
        ui.end_row();
    });
    ui.add_space(8.0);

    if !call.transcript.is_empty() {
        ui.label(RichText::new("Transcript").strong());
        egui::ScrollArea::vertical().id_salt("transcript").show(ui, |ui| {
            for entry in &call.transcript {
                let who = match entry.speaker {
                    Speaker::Assistant => RichText::new("Assistant").color(Color32::from_rgb(99, 102, 241)),
                    Speaker::User => RichText::new("Caller").color(Color32::from_rgb(34, 197, 94)),
                };
                ui.horizontal(|ui| {
                    ui.label(who.strong().size(12.0));
                    ui.weak(format::duration(entry.offset_secs));
                    if let Some(sentiment) = entry.sentiment {
                        ui.label(sentiment_chip(sentiment));
                    }
                });
                ui.label(&entry.text);
                ui.add_space(6.0);
            }
        });
    }
}

fn sentiment_chip(sentiment: Sentiment) -> RichText {
    match sentiment {
        Sentiment::Positive => RichText::new("positive").color(Color32::from_rgb(34, 197, 94)).size(11.0),
        Sentiment::Negative => RichText::new("negative").color(Color32::from_rgb(239, 68, 68)).size(11.0),
        Sentiment::Neutral => RichText::new("neutral").weak().size(11.0),
    }
}
