//! Overview page: headline stats, the 30-day call volume chart, and the
//! most recent calls.

use chrono::Utc;
use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Stroke, StrokeKind, Vec2};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::{CallStatus, Status};

use crate::ui::format;

const CARD_FILL: Color32 = Color32::from_rgb(18, 18, 26);
const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);

pub fn show(ui: &mut egui::Ui, platform: &Platform) {
    ui.heading("Dashboard");
    ui.add_space(10.0);

    let days = platform.analytics();
    let total_calls: u32 = days.iter().map(|d| d.calls).sum();
    let total_minutes: u64 = days.iter().map(|d| d.minutes as u64).sum();
    let total_cost: f64 = days.iter().map(|d| d.cost).sum();
    let avg_success =
        days.iter().map(|d| d.success_rate).sum::<f32>() / days.len().max(1) as f32;
    let active_assistants = platform
        .assistants()
        .iter()
        .filter(|a| a.status == Status::Active)
        .count();

    ui.horizontal(|ui| {
        stat_card(ui, icons::PHONE_CALL, "Calls (30d)", &total_calls.to_string());
        stat_card(ui, icons::TIMER, "Minutes", &format::minutes(total_minutes));
        stat_card(ui, icons::CURRENCY_DOLLAR, "Spend", &format::cost(total_cost));
        stat_card(ui, icons::CHECK_CIRCLE, "Success", &format!("{avg_success:.0}%"));
        stat_card(ui, icons::ROBOT, "Active Assistants", &active_assistants.to_string());
    });

    ui.add_space(16.0);
    ui.label(RichText::new("Call volume, last 30 days").strong());
    ui.add_space(4.0);
    volume_chart(ui, platform);

    ui.add_space(16.0);
    ui.label(RichText::new("Recent calls").strong());
    ui.add_space(4.0);
    let now = Utc::now();
    egui::Grid::new("recent_calls")
        .num_columns(5)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for call in platform.calls().iter().take(6) {
                ui.label(&call.assistant_name);
                ui.label(call.direction.label());
                ui.colored_label(status_color(call.status), call.status.label());
                ui.label(format::duration(call.duration_secs));
                ui.weak(format::relative(call.started_at, now));
                ui.end_row();
            }
        });
}

fn stat_card(ui: &mut egui::Ui, icon: &str, title: &str, value: &str) {
    egui::Frame::group(ui.style())
        .fill(CARD_FILL)
        .corner_radius(8)
        .inner_margin(12)
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.label(RichText::new(format!("{icon} {title}")).weak().size(12.0));
            ui.label(RichText::new(value).size(22.0).strong());
        });
}

fn status_color(status: CallStatus) -> Color32 {
    match status {
        CallStatus::Ended => Color32::from_rgb(34, 197, 94),
        CallStatus::Failed => Color32::from_rgb(239, 68, 68),
        CallStatus::InProgress => ACCENT,
        CallStatus::Busy | CallStatus::NoAnswer => Color32::from_rgb(245, 158, 11),
    }
}

/// Bar chart painted directly; one bar per day, hover shows the values.
fn volume_chart(ui: &mut egui::Ui, platform: &Platform) {
    let days = platform.analytics();
    let height = 140.0;
    let (response, painter) = ui.allocate_painter(
        Vec2::new(ui.available_width().min(860.0), height),
        Sense::hover(),
    );
    let rect = response.rect;
    painter.rect_filled(rect, 6.0, CARD_FILL);

    let max_calls = days.iter().map(|d| d.calls).max().unwrap_or(1) as f32;
    let slot = rect.width() / days.len().max(1) as f32;
    let bar_w = (slot - 3.0).max(1.0);
    let hover = response.hover_pos();

    for (i, day) in days.iter().enumerate() {
        let h = (day.calls as f32 / max_calls) * (height - 24.0);
        let x = rect.left() + i as f32 * slot + 1.5;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.bottom() - 8.0 - h),
            egui::pos2(x + bar_w, rect.bottom() - 8.0),
        );
        let hovered = hover.is_some_and(|p| p.x >= x && p.x <= x + slot);
        painter.rect_filled(bar, 2.0, if hovered { ACCENT } else { ACCENT.gamma_multiply(0.55) });

        if hovered {
            painter.rect_stroke(bar, 2.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Outside);
            painter.text(
                egui::pos2(bar.center().x, rect.top() + 4.0),
                Align2::CENTER_TOP,
                format!("{}: {} calls, {}", day.date.format("%b %d"), day.calls, format::cost(day.cost)),
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }
    }
}
