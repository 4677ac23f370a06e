//! Workflow list: search, create, import, duplicate, delete, and entry
//! into the canvas editor.

use chrono::Utc;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::Workflow;
use uuid::Uuid;

use crate::ui::format;
use crate::ui::toast::Toasts;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum SortKey {
    #[default]
    Updated,
    Created,
    Name,
}

impl SortKey {
    fn label(&self) -> &'static str {
        match self {
            SortKey::Updated => "Recently updated",
            SortKey::Created => "Recently created",
            SortKey::Name => "Name",
        }
    }
}

#[derive(Default)]
pub struct WorkflowsState {
    search: String,
    sort: SortKey,
    import_open: bool,
    import_name: String,
    import_json: String,
    import_error: Option<String>,
}

/// What the page asks the app shell to do.
pub enum WorkflowsEvent {
    None,
    Open(Uuid),
}

pub fn show(
    ui: &mut egui::Ui,
    platform: &mut Platform,
    state: &mut WorkflowsState,
    toasts: &mut Toasts,
) -> WorkflowsEvent {
    let mut event = WorkflowsEvent::None;

    ui.horizontal(|ui| {
        ui.heading("Workflows");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} New Workflow", icons::PLUS)).clicked() {
                let id = platform.create_workflow();
                toasts.push(ui.ctx(), "Creating workflow...");
                event = WorkflowsEvent::Open(id);
            }
            if ui.button(format!("{} Import JSON", icons::UPLOAD_SIMPLE)).clicked() {
                state.import_open = true;
                state.import_error = None;
            }
        });
    });
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text(format!("{} Search workflows", icons::MAGNIFYING_GLASS))
                .desired_width(260.0),
        );
        egui::ComboBox::from_id_salt("workflow_sort")
            .selected_text(state.sort.label())
            .show_ui(ui, |ui| {
                for key in [SortKey::Updated, SortKey::Created, SortKey::Name] {
                    ui.selectable_value(&mut state.sort, key, key.label());
                }
            });
    });
    ui.add_space(10.0);

    import_dialog(ui.ctx(), platform, state, toasts);

    let query = state.search.to_lowercase();
    let mut visible: Vec<&Workflow> = platform
        .workflows()
        .iter()
        .filter(|w| query.is_empty() || w.name.to_lowercase().contains(&query))
        .collect();
    match state.sort {
        SortKey::Updated => visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::Created => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Name => visible.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    let now = Utc::now();
    let mut duplicate = None;
    let mut delete = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for workflow in visible {
            egui::Frame::group(ui.style())
                .fill(Color32::from_rgb(18, 18, 26))
                .corner_radius(8)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{} {}", icons::FLOW_ARROW, workflow.name))
                                    .size(15.0)
                                    .strong(),
                            );
                            ui.weak(format!(
                                "{} steps · updated {}",
                                workflow.step_count(),
                                format::relative(workflow.updated_at, now)
                            ));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button(RichText::new(icons::TRASH).color(Color32::from_rgb(239, 68, 68)))
                                .on_hover_text("Delete")
                                .clicked()
                            {
                                delete = Some(workflow.id);
                            }
                            if ui.button(icons::COPY).on_hover_text("Duplicate").clicked() {
                                duplicate = Some(workflow.id);
                            }
                            if ui
                                .button(icons::BRACKETS_CURLY)
                                .on_hover_text("Copy graph JSON")
                                .clicked()
                            {
                                ui.ctx().copy_text(workflow.graph_json());
                                toasts.push(ui.ctx(), format!("Copied \"{}\" as JSON", workflow.name));
                            }
                            if ui.button(format!("{} Edit", icons::PENCIL_SIMPLE)).clicked() {
                                event = WorkflowsEvent::Open(workflow.id);
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });

    if let Some(id) = duplicate {
        platform.duplicate_workflow(id);
        toasts.push(ui.ctx(), "Duplicating workflow...");
    }
    if let Some(id) = delete {
        platform.delete_workflow(id);
        toasts.push(ui.ctx(), "Deleting workflow...");
    }

    event
}

fn import_dialog(
    ctx: &egui::Context,
    platform: &mut Platform,
    state: &mut WorkflowsState,
    toasts: &mut Toasts,
) {
    if !state.import_open {
        return;
    }
    let mut open = true;
    egui::Window::new("Import workflow")
        .collapsible(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut state.import_name);
            });
            ui.label("Graph JSON");
            ui.add(
                egui::TextEdit::multiline(&mut state.import_json)
                    .code_editor()
                    .desired_rows(10)
                    .desired_width(420.0),
            );
            if let Some(error) = &state.import_error {
                ui.colored_label(Color32::from_rgb(239, 68, 68), error);
            }
            let name = if state.import_name.trim().is_empty() {
                "Imported Workflow"
            } else {
                state.import_name.trim()
            };
            if ui.button("Import").clicked() {
                match platform.import_workflow(name, &state.import_json) {
                    Ok(_) => {
                        toasts.push(ctx, format!("Importing \"{name}\"..."));
                        state.import_open = false;
                        state.import_name.clear();
                        state.import_json.clear();
                        state.import_error = None;
                    }
                    Err(err) => state.import_error = Some(err.to_string()),
                }
            }
        });
    if !open {
        state.import_open = false;
    }
}
