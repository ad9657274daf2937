//! Known conversations, as last reported by the backend.
//!
//! A failed refresh keeps the previous list.

use std::cell::RefCell;
use std::rc::Rc;
use chat_types::{
    Result,
    conversation::ConversationSummary,
    event::ChatEvent,
};
use crate::event_bus::EventBus;
use crate::ports::ChatGateway;

/// Shared conversation list — clone-cheap via Rc.
#[derive(Clone)]
pub struct SessionStore {
    conversations: Rc<RefCell<Vec<ConversationSummary>>>,
    gateway: Rc<dyn ChatGateway>,
    event_bus: EventBus,
}

impl SessionStore {
    pub fn new(gateway: Rc<dyn ChatGateway>, event_bus: EventBus) -> Self {
        Self {
            conversations: Rc::new(RefCell::new(Vec::new())),
            gateway,
            event_bus,
        }
    }

    /// Reload the list from the backend.
    ///
    /// Returns whether the list was replaced. Failures are logged and
    /// reported on the event bus, never returned.
    pub async fn refresh(&self) -> bool {
        match self.try_refresh().await {
            Ok(count) => {
                log::debug!("Conversation list refreshed ({} entries)", count);
                true
            }
            Err(e) => {
                log::warn!("Failed to load conversation list: {}", e);
                self.event_bus.emit(ChatEvent::Error {
                    message: format!("Failed to load history: {}", e),
                });
                false
            }
        }
    }

    async fn try_refresh(&self) -> Result<usize> {
        let list = self.gateway.list_conversations().await?;
        let count = list.len();
        *self.conversations.borrow_mut() = list;
        self.event_bus.emit(ChatEvent::ConversationsRefreshed { count });
        Ok(count)
    }

    /// Snapshot of the current list, for one render
    pub fn conversations(&self) -> Vec<ConversationSummary> {
        self.conversations.borrow().clone()
    }
}
