//! WASM-target tests for chat-core.
//!
//! Runs EventBus, SessionStore, and ConversationController tests
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::controller::{ConversationController, SEND_FAILURE_TEXT};
use chat_core::event_bus::EventBus;
use chat_core::ports::*;
use chat_core::session_store::SessionStore;
use chat_types::conversation::*;
use chat_types::event::ChatEvent;
use chat_types::message::*;
use chat_types::{ChatError, Result};

use async_trait::async_trait;
use std::cell::Cell;
use std::rc::Rc;

/// Backend that answers every question, or fails every call when `down` is set
struct EchoGateway {
    down: Cell<bool>,
}

#[async_trait(?Send)]
impl ChatGateway for EchoGateway {
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        if self.down.get() {
            return Err(ChatError::Transport("down".to_string()));
        }
        Ok(vec![ConversationSummary::new("a", "Docs Q1")])
    }

    async fn get_messages(&self, _id: &ConversationId) -> Result<Vec<Message>> {
        if self.down.get() {
            return Err(ChatError::Transport("down".to_string()));
        }
        Ok(vec![Message::user("hi")])
    }

    async fn create_conversation(&self) -> Result<ConversationId> {
        Ok(ConversationId::from("created"))
    }

    async fn ask(&self, text: &str, id: Option<&ConversationId>) -> Result<AskReply> {
        if self.down.get() {
            return Err(ChatError::Transport("down".to_string()));
        }
        Ok(AskReply {
            reply: text.to_uppercase(),
            id: id.cloned().unwrap_or_else(|| ConversationId::from("assigned")),
        })
    }

    fn gateway_name(&self) -> &str {
        "echo"
    }
}

fn controller(down: bool) -> (ConversationController, EventBus) {
    let gateway = Rc::new(EchoGateway { down: Cell::new(down) });
    let bus = EventBus::new();
    let sessions = SessionStore::new(gateway.clone(), bus.clone());
    (ConversationController::new(gateway, sessions, bus.clone()), bus)
}

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(ChatEvent::BusyChanged { busy: true });
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

// ─── Controller Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn send_adopts_assigned_id() {
    let (controller, _bus) = controller(false);
    assert!(controller.send_message("hello").await);

    let state = controller.snapshot();
    assert_eq!(state.messages, vec![Message::user("hello"), Message::assistant("HELLO")]);
    assert_eq!(state.active_id, Some(ConversationId::from("assigned")));
    assert!(!state.busy);
    assert_eq!(controller.sessions().conversations().len(), 1);
}

#[wasm_bindgen_test]
async fn send_failure_appends_error() {
    let (controller, _bus) = controller(true);
    controller.send_message("What is X?").await;

    let state = controller.snapshot();
    assert_eq!(state.messages[1], Message::assistant(SEND_FAILURE_TEXT));
    assert!(state.active_id.is_none());
    assert!(!state.busy);
}

#[wasm_bindgen_test]
async fn blank_send_is_ignored() {
    let (controller, bus) = controller(false);
    assert!(!controller.send_message("  ").await);
    assert!(controller.snapshot().messages.is_empty());
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
async fn select_loads_history() {
    let (controller, _bus) = controller(false);
    controller.select_conversation(ConversationId::from("a")).await;
    assert_eq!(controller.snapshot().messages, vec![Message::user("hi")]);
}

#[wasm_bindgen_test]
async fn select_failure_leaves_empty_transcript() {
    let (controller, _bus) = controller(true);
    controller.select_conversation(ConversationId::from("a")).await;
    let state = controller.snapshot();
    assert!(state.messages.is_empty());
    assert_eq!(state.active_id, Some(ConversationId::from("a")));
}

#[wasm_bindgen_test]
async fn new_conversation_then_send() {
    let (controller, _bus) = controller(false);
    assert!(controller.start_new_conversation().await);
    controller.send_message("hello").await;

    let state = controller.snapshot();
    assert_eq!(state.active_id, Some(ConversationId::from("created")));
    assert_eq!(state.messages.len(), 2);
}
