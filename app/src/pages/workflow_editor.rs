//! The canvas editor for one workflow.
//!
//! The editor owns a session-local copy of the graph inside its
//! [`CanvasController`]; nothing reaches the store until Save.

use eframe::egui::{self, Color32, RichText};
use egui_flow_canvas::{CanvasController, CanvasTheme, FlowCanvasWidget, NodeKind, NodePatch};
use egui_phosphor::regular as icons;
use library::Platform;
use library::model::Workflow;
use uuid::Uuid;

use crate::ui::toast::Toasts;

pub struct EditorState {
    workflow_id: Uuid,
    name: String,
    controller: CanvasController,
    theme: CanvasTheme,
    show_json: bool,
    label_draft: String,
    prompt_draft: String,
}

pub enum EditorEvent {
    Stay,
    Close,
}

impl EditorState {
    pub fn open(workflow: &Workflow) -> Self {
        Self {
            workflow_id: workflow.id,
            name: workflow.name.clone(),
            controller: CanvasController::with_graph(workflow.graph.clone()),
            theme: CanvasTheme::default(),
            show_json: false,
            label_draft: String::new(),
            prompt_draft: String::new(),
        }
    }
}

pub fn show(
    ui: &mut egui::Ui,
    platform: &mut Platform,
    state: &mut EditorState,
    toasts: &mut Toasts,
) -> EditorEvent {
    let mut event = EditorEvent::Stay;

    ui.horizontal(|ui| {
        if ui.button(format!("{} Back", icons::ARROW_LEFT)).clicked() {
            event = EditorEvent::Close;
        }
        ui.add(egui::TextEdit::singleline(&mut state.name).desired_width(220.0));
        ui.separator();

        if ui.button(icons::MAGNIFYING_GLASS_MINUS).on_hover_text("Zoom out").clicked() {
            state.controller.zoom_out();
        }
        ui.monospace(format!("{:.0}%", state.controller.viewport().zoom * 100.0));
        if ui.button(icons::MAGNIFYING_GLASS_PLUS).on_hover_text("Zoom in").clicked() {
            state.controller.zoom_in();
        }
        if ui.button(icons::CROSSHAIR_SIMPLE).on_hover_text("Reset view").clicked() {
            state.controller.reset_view();
        }
        ui.separator();

        ui.toggle_value(&mut state.show_json, format!("{} JSON", icons::BRACKETS_CURLY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Save", icons::FLOPPY_DISK)).clicked() {
                platform.save_workflow_graph(state.workflow_id, state.controller.graph().clone());
                platform.rename_workflow(state.workflow_id, state.name.clone());
                toasts.push(ui.ctx(), format!("Saving \"{}\"...", state.name));
            }
        });
    });

    // Node palette.
    ui.horizontal(|ui| {
        ui.weak("Add step:");
        for kind in NodeKind::PALETTE {
            if ui.button(format!("{} {}", palette_icon(kind), kind.display_label())).clicked() {
                let id = state.controller.add_node(kind).id;
                state.controller.select_node(Some(id));
                load_drafts(state);
            }
        }
    });
    ui.add_space(4.0);

    json_window(ui.ctx(), state);

    let has_selection = state.controller.selected().is_some();
    if has_selection {
        egui::SidePanel::right("node_inspector")
            .resizable(true)
            .default_width(280.0)
            .show_inside(ui, |ui| node_inspector(ui, state));
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show_inside(ui, |ui| {
            let response = FlowCanvasWidget::new(&mut state.controller, &state.theme).show(ui);
            if response.selection_changed {
                load_drafts(state);
            }
        });

    event
}

fn palette_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Start => icons::PLAY,
        NodeKind::Conversation => icons::CHAT_CIRCLE,
        NodeKind::Condition => icons::GIT_BRANCH,
        NodeKind::ApiRequest => icons::PLUGS,
        NodeKind::Transfer => icons::PHONE_TRANSFER,
        NodeKind::End => icons::STOP_CIRCLE,
    }
}

fn load_drafts(state: &mut EditorState) {
    if let Some(node) = state.controller.selected_node() {
        state.label_draft = node.label.clone();
        state.prompt_draft = node.prompt.clone().unwrap_or_default();
    }
}

fn node_inspector(ui: &mut egui::Ui, state: &mut EditorState) {
    let Some(node) = state.controller.selected_node() else {
        return;
    };
    let id = node.id;
    let kind = node.kind;
    let pos = node.pos;

    ui.add_space(6.0);
    ui.label(RichText::new(kind.display_label()).size(15.0).strong());
    ui.weak(format!("at ({:.0}, {:.0})", pos.x, pos.y));
    ui.add_space(8.0);

    ui.label("Label");
    if ui.text_edit_singleline(&mut state.label_draft).changed() {
        state.controller.update_node(
            id,
            NodePatch {
                label: Some(state.label_draft.clone()),
                ..Default::default()
            },
        );
    }

    if kind.has_prompt() {
        ui.add_space(6.0);
        ui.label("Prompt");
        let prompt_edit = egui::TextEdit::multiline(&mut state.prompt_draft)
            .desired_rows(6)
            .desired_width(f32::INFINITY);
        if ui.add(prompt_edit).changed() {
            state.controller.update_node(
                id,
                NodePatch {
                    prompt: Some(state.prompt_draft.clone()),
                    ..Default::default()
                },
            );
        }
    }

    ui.add_space(12.0);
    ui.separator();
    if ui
        .button(RichText::new(format!("{} Delete step", icons::TRASH)).color(Color32::from_rgb(239, 68, 68)))
        .clicked()
    {
        state.controller.delete_node(id);
    }
}

fn json_window(ctx: &egui::Context, state: &mut EditorState) {
    if !state.show_json {
        return;
    }
    let json = serde_json::to_string_pretty(state.controller.graph()).unwrap_or_default();
    egui::Window::new("Workflow JSON")
        .default_width(420.0)
        .open(&mut state.show_json)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut json.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
        });
}
