//! API key management. A freshly minted key is shown once in a modal;
//! after dismissal only the masked form remains anywhere in the app.

use chrono::Utc;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::ApiKey;

use crate::ui::format;
use crate::ui::toast::Toasts;

#[derive(Default)]
pub struct ApiKeysState {
    new_name: String,
    /// The one-time reveal for a key just created.
    revealed: Option<ApiKey>,
}

pub fn show(ui: &mut egui::Ui, platform: &mut Platform, state: &mut ApiKeysState, toasts: &mut Toasts) {
    ui.heading("API Keys");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.new_name)
                .hint_text("Key name")
                .desired_width(220.0),
        );
        let can_create = !state.new_name.trim().is_empty();
        if ui
            .add_enabled(can_create, egui::Button::new(format!("{} Create Key", icons::PLUS)))
            .clicked()
        {
            let key = platform.create_api_key(state.new_name.trim());
            toasts.push(ui.ctx(), format!("Created \"{}\"", key.name));
            state.revealed = Some(key);
            state.new_name.clear();
        }
    });
    ui.add_space(10.0);

    reveal_modal(ui.ctx(), state);

    let now = Utc::now();
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("api_keys")
            .num_columns(6)
            .spacing([20.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for title in ["Name", "Key", "Permissions", "Created", "Last used", ""] {
                    ui.label(RichText::new(title).strong().size(12.0));
                }
                ui.end_row();

                let mut revoke = None;
                for key in platform.api_keys() {
                    if key.revoked {
                        ui.label(RichText::new(&key.name).strikethrough().weak());
                    } else {
                        ui.label(&key.name);
                    }
                    ui.monospace(&key.masked);
                    ui.label(
                        key.permissions
                            .iter()
                            .map(|p| p.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    ui.weak(format::relative(key.created_at, now));
                    ui.weak(
                        key.last_used
                            .map_or("never".to_owned(), |t| format::relative(t, now)),
                    );
                    if key.revoked {
                        ui.weak("revoked");
                    } else if ui
                        .button(RichText::new(icons::PROHIBIT).color(Color32::from_rgb(239, 68, 68)))
                        .on_hover_text("Revoke")
                        .clicked()
                    {
                        revoke = Some(key.id);
                    }
                    ui.end_row();
                }
                if let Some(id) = revoke {
                    platform.revoke_api_key(id);
                    toasts.push(ui.ctx(), "Revoking key...");
                }
            });
    });
}

fn reveal_modal(ctx: &egui::Context, state: &mut ApiKeysState) {
    let Some(key) = &state.revealed else {
        return;
    };
    let mut open = true;
    egui::Window::new("API key created")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Copy this key now. It will not be shown again.");
            ui.add_space(6.0);
            if let Some(full) = &key.full_key {
                ui.horizontal(|ui| {
                    ui.monospace(full);
                    if ui.button(icons::COPY).on_hover_text("Copy").clicked() {
                        ui.ctx().copy_text(full.clone());
                    }
                });
            }
        });
    if !open {
        state.revealed = None;
    }
}
