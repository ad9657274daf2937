//! Sidebar — conversation list and the "New chat" button.

use egui::{self, RichText, ScrollArea, Vec2};
use chat_types::conversation::{ConversationId, ConversationSummary};
use crate::state::UserIntent;
use crate::theme::*;

/// Render the sidebar. Switching is disabled while a message is in flight.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    conversations: &[ConversationSummary],
    active_id: Option<&ConversationId>,
    busy: bool,
) -> Option<UserIntent> {
    let mut intent = None;

    egui::Frame::default()
        .fill(BG_SIDEBAR)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            let new_chat = ui.add_enabled(
                !busy,
                egui::Button::new(RichText::new("+  New chat").color(TEXT_PRIMARY))
                    .fill(BG_SIDEBAR)
                    .stroke(egui::Stroke::new(1.0, BG_SURFACE))
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(ui.available_width(), 36.0)),
            );
            if new_chat.clicked() {
                intent = Some(UserIntent::NewConversation);
            }

            ui.add_space(8.0);

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for summary in conversations {
                        let selected = active_id == Some(&summary.id);
                        let text = RichText::new(summary.display_title()).color(if selected {
                            TEXT_PRIMARY
                        } else {
                            TEXT_SECONDARY
                        });
                        let row = ui.add_enabled_ui(!busy, |ui| ui.selectable_label(selected, text));
                        if row.inner.clicked() && !selected {
                            intent = Some(UserIntent::Select(summary.id.clone()));
                        }
                    }
                });
        });

    intent
}
