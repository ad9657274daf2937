//! WASM-target tests for chat-ui.
//!
//! Runs the view state and a headless panel frame under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::controller::ConversationState;
use chat_types::conversation::{ConversationId, ConversationSummary};
use chat_types::event::ChatEvent;
use chat_types::message::{Message, Role};
use chat_ui::panels::{chat, sidebar};
use chat_ui::state::UiState;

// ─── UiState Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn ui_state_tracks_send() {
    let mut state = UiState::new();
    state.process_events(vec![
        ChatEvent::BusyChanged { busy: true },
        ChatEvent::MessageAppended { role: Role::User },
    ]);
    assert_eq!(state.status_text, "Thinking...");
    assert!(state.scroll_to_bottom);

    state.process_events(vec![ChatEvent::BusyChanged { busy: false }]);
    assert_eq!(state.status_text, "Ready");
}

#[wasm_bindgen_test]
fn ui_state_error_cleared_by_next_send() {
    let mut state = UiState::new();
    state.process_events(vec![ChatEvent::Error {
        message: "Failed to load messages".to_string(),
    }]);
    assert!(state.last_error.is_some());

    state.process_events(vec![ChatEvent::BusyChanged { busy: true }]);
    assert!(state.last_error.is_none());
}

#[wasm_bindgen_test]
fn ui_state_take_input_ignores_blank() {
    let mut state = UiState::new();
    state.input_text = "  \n ".to_string();
    assert!(state.take_input().is_none());

    state.input_text = "hi".to_string();
    assert_eq!(state.take_input().as_deref(), Some("hi"));
    assert!(state.input_text.is_empty());
}

// ─── Panel Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn panels_render_headless() {
    let ctx = egui::Context::default();
    let mut ui_state = UiState::new();
    let conversation = ConversationState {
        active_id: Some(ConversationId::from("a")),
        messages: vec![Message::user("hi"), Message::assistant("hello")],
        busy: false,
        loading: false,
    };
    let conversations = vec![ConversationSummary::new("a", "Docs Q1")];
    let mut intents = Vec::new();

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::SidePanel::left("sessions").show(ctx, |ui| {
            intents.push(sidebar::sidebar_panel(
                ui,
                &conversations,
                conversation.active_id.as_ref(),
                conversation.busy,
            ));
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            intents.push(chat::chat_panel(ui, &mut ui_state, &conversation));
        });
    });

    assert_eq!(intents, vec![None, None]);
}
