//! Left navigation rail.

use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Assistants,
    Calls,
    PhoneNumbers,
    Workflows,
    ApiKeys,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Assistants,
        Page::Calls,
        Page::PhoneNumbers,
        Page::Workflows,
        Page::ApiKeys,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Assistants => "Assistants",
            Page::Calls => "Calls",
            Page::PhoneNumbers => "Phone Numbers",
            Page::Workflows => "Workflows",
            Page::ApiKeys => "API Keys",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => icons::GAUGE,
            Page::Assistants => icons::ROBOT,
            Page::Calls => icons::PHONE_CALL,
            Page::PhoneNumbers => icons::HASH,
            Page::Workflows => icons::FLOW_ARROW,
            Page::ApiKeys => icons::KEY,
        }
    }
}

/// Draw the rail; returns the page the user navigated to, if any.
pub fn show(ctx: &egui::Context, current: Page, busy: bool) -> Option<Page> {
    let mut target = None;
    egui::SidePanel::left("nav_rail")
        .resizable(false)
        .exact_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{} VoicePlatform", icons::WAVEFORM))
                    .size(17.0)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(6.0);

            for page in Page::ALL {
                let label = format!("{}  {}", page.icon(), page.title());
                if ui
                    .selectable_label(page == current, RichText::new(label).size(14.0))
                    .clicked()
                {
                    target = Some(page);
                }
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.add_space(10.0);
                if busy {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("syncing...");
                    });
                }
            });
        });
    target
}
