//! Provisioned numbers: routing, forwarding, and webhook configuration.

use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::{PhoneNumber, Status, TelephonyProvider};
use uuid::Uuid;

use crate::ui::toast::Toasts;

const PROVIDERS: [TelephonyProvider; 3] = [
    TelephonyProvider::Twilio,
    TelephonyProvider::Vonage,
    TelephonyProvider::Bandwidth,
];

#[derive(Default)]
pub struct PhoneNumbersState {
    selected: Option<Uuid>,
    draft: Option<PhoneNumber>,
}

enum FormAction {
    None,
    Save,
    Delete,
}

pub fn show(
    ui: &mut egui::Ui,
    platform: &mut Platform,
    state: &mut PhoneNumbersState,
    toasts: &mut Toasts,
) {
    ui.horizontal(|ui| {
        ui.heading("Phone Numbers");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Buy Number", icons::PLUS)).clicked() {
                let id = platform.create_phone_number();
                state.selected = Some(id);
                state.draft = None;
                toasts.push(ui.ctx(), "Provisioning number...");
            }
        });
    });
    ui.add_space(8.0);

    if state.draft.as_ref().map(|d| d.id) != state.selected {
        state.draft = state
            .selected
            .and_then(|id| platform.phone_numbers().iter().find(|n| n.id == id).cloned());
    }

    let mut action = FormAction::None;
    egui::SidePanel::right("number_detail")
        .resizable(true)
        .default_width(340.0)
        .show_inside(ui, |ui| match &mut state.draft {
            Some(draft) => action = edit_form(ui, draft, platform),
            None => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.weak("Select a number to configure routing.");
                });
            }
        });

    match action {
        FormAction::None => {}
        FormAction::Save => {
            if let Some(draft) = &state.draft {
                platform.save_phone_number(draft.clone());
                toasts.push(ui.ctx(), format!("Saving {}...", draft.number));
            }
        }
        FormAction::Delete => {
            if let Some(id) = state.selected {
                platform.delete_phone_number(id);
                state.selected = None;
                state.draft = None;
                toasts.push(ui.ctx(), "Releasing number...");
            }
        }
    }

    egui::CentralPanel::default().show_inside(ui, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for number in platform.phone_numbers() {
                let assistant = number
                    .assigned_assistant_id
                    .and_then(|id| platform.assistants().iter().find(|a| a.id == id))
                    .map_or("Unassigned", |a| a.name.as_str());
                let selected = state.selected == Some(number.id);
                let response = ui.selectable_label(
                    selected,
                    RichText::new(format!(
                        "{}  {}  ({})\n      {} · routes to {} · {} in / {} out",
                        icons::HASH,
                        number.number,
                        number.label,
                        number.provider.label(),
                        assistant,
                        number.inbound_count,
                        number.outbound_count,
                    ))
                    .size(13.5),
                );
                if response.clicked() {
                    state.selected = Some(number.id);
                    state.draft = None;
                }
                ui.add_space(4.0);
            }
        });
    });
}

fn edit_form(ui: &mut egui::Ui, draft: &mut PhoneNumber, platform: &Platform) -> FormAction {
    let mut action = FormAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(6.0);
        ui.label(RichText::new(&draft.number).size(16.0).monospace());
        ui.horizontal(|ui| {
            ui.label("Label");
            ui.text_edit_singleline(&mut draft.label);
        });
        egui::ComboBox::from_label("Provider")
            .selected_text(draft.provider.label())
            .show_ui(ui, |ui| {
                for provider in PROVIDERS {
                    ui.selectable_value(&mut draft.provider, provider, provider.label());
                }
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Inbound routing").strong());
        let current = draft
            .assigned_assistant_id
            .and_then(|id| platform.assistants().iter().find(|a| a.id == id))
            .map_or("Unassigned".to_owned(), |a| a.name.clone());
        egui::ComboBox::from_label("Assistant")
            .selected_text(current)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut draft.assigned_assistant_id, None, "Unassigned");
                for assistant in platform.assistants() {
                    ui.selectable_value(
                        &mut draft.assigned_assistant_id,
                        Some(assistant.id),
                        &assistant.name,
                    );
                }
            });

        ui.add_space(8.0);
        ui.checkbox(&mut draft.forwarding_enabled, "Forward unanswered calls");
        if draft.forwarding_enabled {
            ui.horizontal(|ui| {
                ui.label("Forward to");
                ui.text_edit_singleline(&mut draft.forwarding_number);
            });
        }
        ui.horizontal(|ui| {
            ui.label("Webhook URL");
            ui.text_edit_singleline(&mut draft.webhook_url);
        });
        let mut active = draft.status.is_active();
        if ui.checkbox(&mut active, "Active").changed() {
            draft.status = if active { Status::Active } else { Status::Inactive };
        }
        ui.weak(format!("${:.2}/month", draft.monthly_cost));

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(format!("{} Save", icons::FLOPPY_DISK)).clicked() {
                action = FormAction::Save;
            }
            if ui
                .button(
                    RichText::new(format!("{} Release", icons::TRASH))
                        .color(Color32::from_rgb(239, 68, 68)),
                )
                .clicked()
            {
                action = FormAction::Delete;
            }
        });
    });

    action
}
