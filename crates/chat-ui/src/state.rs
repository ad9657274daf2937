//! View-local state.
//! Conversation data lives in the controller; this only holds what the
//! panels need between frames, updated by draining the EventBus.

use chat_types::conversation::ConversationId;
use chat_types::event::ChatEvent;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Send(String),
    Select(ConversationId),
    NewConversation,
}

pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// Last absorbed failure, shown until the next successful change
    pub last_error: Option<String>,
    /// Set when the transcript grew; the chat panel scrolls down once
    pub scroll_to_bottom: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            status_text: "Ready".to_string(),
            last_error: None,
            scroll_to_bottom: false,
        }
    }

    /// Process events from the EventBus and update view state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::BusyChanged { busy: true } => {
                    self.status_text = "Thinking...".to_string();
                    self.last_error = None;
                }
                ChatEvent::BusyChanged { busy: false } => {
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::MessageAppended { .. } => {
                    self.scroll_to_bottom = true;
                }
                ChatEvent::HistoryLoaded { count, .. } => {
                    self.status_text = format!("Loaded {} messages", count);
                    self.scroll_to_bottom = true;
                }
                ChatEvent::ConversationChanged { .. } => {
                    self.last_error = None;
                }
                ChatEvent::ConversationsRefreshed { .. } => {}
                ChatEvent::Error { message } => {
                    log::debug!("View received error: {}", message);
                    self.last_error = Some(message);
                }
            }
        }
    }

    /// Take the typed text for sending and clear the field.
    pub fn take_input(&mut self) -> Option<String> {
        if self.input_text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
