//! Chat panel — displays the active transcript and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_core::controller::{ControllerPhase, ConversationState};
use chat_types::message::{Message, Role};
use crate::state::{UiState, UserIntent};
use crate::theme::*;

pub const WELCOME_TITLE: &str = "RAG Chatbot";
pub const WELCOME_TEXT: &str = "Ask questions about your documents.";

/// Render the chat panel. Returns `UserIntent::Send` when the user submits input.
pub fn chat_panel(
    ui: &mut egui::Ui,
    ui_state: &mut UiState,
    conversation: &ConversationState,
) -> Option<UserIntent> {
    let mut intent = None;
    let phase = conversation.phase();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(WELCOME_TITLE).color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let color = if phase == ControllerPhase::Idle { TEXT_SECONDARY } else { WARNING };
                        ui.label(RichText::new(&ui_state.status_text).color(color).small());
                    });
                });

                if let Some(error) = &ui_state.last_error {
                    ui.label(RichText::new(error).color(ERROR).small());
                }

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if conversation.messages.is_empty() && phase == ControllerPhase::Idle {
                            render_welcome(ui);
                        }

                        for message in &conversation.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        match phase {
                            ControllerPhase::Sending => render_pending(ui, "Thinking..."),
                            ControllerPhase::LoadingHistory => render_pending(ui, "Loading..."),
                            ControllerPhase::Idle => {}
                        }

                        if ui_state.scroll_to_bottom {
                            ui.scroll_to_cursor(Some(Align::BOTTOM));
                            ui_state.scroll_to_bottom = false;
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let idle = phase == ControllerPhase::Idle;
                    let input = egui::TextEdit::singleline(&mut ui_state.input_text)
                        .hint_text("Send a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(idle, input);

                    let send_enabled = idle && !ui_state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        if let Some(text) = ui_state.take_input() {
                            intent = Some(UserIntent::Send(text));
                        }
                        response.request_focus();
                    }
                });

                ui.label(
                    RichText::new("Answers can be wrong. Check important information against the source documents.")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
        });

    intent
}

fn render_welcome(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new(WELCOME_TITLE).color(TEXT_PRIMARY).size(28.0).strong());
        ui.add_space(12.0);
        ui.label(RichText::new(WELCOME_TEXT).color(TEXT_SECONDARY));
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (badge, bg) = match message.role {
        Role::User => (ACCENT, BG_USER),
        Role::Assistant => (ASSISTANT_BADGE, BG_ASSISTANT),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message.role.label()).color(badge).strong().small());
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
        });
}

fn render_pending(ui: &mut egui::Ui, text: &str) {
    egui::Frame::default()
        .fill(BG_ASSISTANT)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(text).color(TEXT_SECONDARY));
            });
        });
}
