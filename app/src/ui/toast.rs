//! Transient top-right notifications for settled mutations.

use eframe::egui::{self, Align2, Color32, RichText};

const TOAST_SECONDS: f64 = 4.0;

struct Toast {
    text: String,
    expires_at: f64,
}

#[derive(Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, ctx: &egui::Context, text: impl Into<String>) {
        let now = ctx.input(|i| i.time);
        self.queue.push(Toast {
            text: text.into(),
            expires_at: now + TOAST_SECONDS,
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.queue.retain(|t| t.expires_at > now);
        if self.queue.is_empty() {
            return;
        }
        // Keep repainting so toasts fade out without user input.
        ctx.request_repaint();

        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
            .show(ctx, |ui| {
                for toast in &self.queue {
                    egui::Frame::window(ui.style())
                        .fill(Color32::from_rgb(24, 24, 32))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.text).color(Color32::WHITE));
                        });
                }
            });
    }
}
