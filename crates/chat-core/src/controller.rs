//! Conversation controller — owns the active transcript.
//!
//! Sending a message:
//! 1. Append the user's message and mark the controller busy (before any I/O)
//! 2. Await the backend
//! 3. Append the reply, or a fixed error text if the call failed
//! 4. Adopt the backend's conversation id if this was the first exchange,
//!    and refresh the conversation list
//! 5. Clear the busy flag
//!
//! State sits behind `Rc<RefCell<..>>` and is never borrowed across an
//! `.await`, so the view can read snapshots while a request is pending.
//!
//! Switching conversations is refused while a send is in flight, so a reply
//! always lands in the transcript it was asked from. History loads and
//! conversation creation are tagged with a generation counter that moves on
//! whenever the transcript is replaced or a send is accepted; a result that
//! arrives after that is dropped.

use std::cell::RefCell;
use std::rc::Rc;
use chat_types::{
    conversation::ConversationId,
    event::ChatEvent,
    message::{Message, Role},
};
use crate::event_bus::EventBus;
use crate::ports::{AskReply, ChatGateway};
use crate::session_store::SessionStore;

/// Appended in place of a reply when the backend call fails
pub const SEND_FAILURE_TEXT: &str = "Error: Failed to get response from server.";

/// The active conversation as the view sees it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    /// Absent until the first successful exchange of a fresh conversation
    pub active_id: Option<ConversationId>,
    pub messages: Vec<Message>,
    /// A send request is in flight
    pub busy: bool,
    /// A history load for `active_id` is in flight
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    LoadingHistory,
    Sending,
}

impl ConversationState {
    pub fn phase(&self) -> ControllerPhase {
        if self.busy {
            ControllerPhase::Sending
        } else if self.loading {
            ControllerPhase::LoadingHistory
        } else {
            ControllerPhase::Idle
        }
    }
}

struct Inner {
    state: ConversationState,
    generation: u64,
}

impl Inner {
    /// Swap in a different conversation and invalidate pending loads.
    fn replace_transcript(&mut self, id: Option<ConversationId>, loading: bool) -> u64 {
        self.generation += 1;
        self.state.active_id = id;
        self.state.messages.clear();
        self.state.loading = loading;
        self.generation
    }
}

/// Shared controller handle — clone-cheap via Rc.
#[derive(Clone)]
pub struct ConversationController {
    inner: Rc<RefCell<Inner>>,
    gateway: Rc<dyn ChatGateway>,
    sessions: SessionStore,
    event_bus: EventBus,
}

impl ConversationController {
    pub fn new(gateway: Rc<dyn ChatGateway>, sessions: SessionStore, event_bus: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: ConversationState::default(),
                generation: 0,
            })),
            gateway,
            sessions,
            event_bus,
        }
    }

    /// Copy of the current state, for one render
    pub fn snapshot(&self) -> ConversationState {
        self.inner.borrow().state.clone()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.inner.borrow().state.phase()
    }

    pub fn is_busy(&self) -> bool {
        self.inner.borrow().state.busy
    }

    pub fn active_id(&self) -> Option<ConversationId> {
        self.inner.borrow().state.active_id.clone()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Switch to an existing conversation and load its transcript.
    ///
    /// Returns false if refused because a send is in flight. A failed load
    /// leaves the transcript empty.
    pub async fn select_conversation(&self, id: ConversationId) -> bool {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.busy {
                log::warn!("Ignoring switch to conversation {} while a message is in flight", id);
                return false;
            }
            inner.replace_transcript(Some(id.clone()), true)
        };
        self.event_bus.emit(ChatEvent::ConversationChanged {
            id: Some(id.clone()),
        });

        let result = self.gateway.get_messages(&id).await;

        let mut inner = self.inner.borrow_mut();
        if inner.generation != generation {
            log::debug!("Discarding stale history for conversation {}", id);
            return true;
        }
        inner.state.loading = false;
        match result {
            Ok(messages) => {
                let count = messages.len();
                inner.state.messages = messages;
                drop(inner);
                self.event_bus.emit(ChatEvent::HistoryLoaded { id, count });
            }
            Err(e) => {
                drop(inner);
                log::warn!("Failed to load messages for conversation {}: {}", id, e);
                self.event_bus.emit(ChatEvent::Error {
                    message: format!("Failed to load messages: {}", e),
                });
            }
        }
        true
    }

    /// Ask the backend for a fresh conversation and make it active.
    ///
    /// Returns true when the new conversation became active. On failure the
    /// current conversation is left as it was.
    pub async fn start_new_conversation(&self) -> bool {
        let generation = {
            let inner = self.inner.borrow();
            if inner.state.busy {
                log::warn!("Ignoring new conversation while a message is in flight");
                return false;
            }
            inner.generation
        };

        let id = match self.gateway.create_conversation().await {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Failed to start new conversation: {}", e);
                self.event_bus.emit(ChatEvent::Error {
                    message: format!("Failed to start new chat: {}", e),
                });
                return false;
            }
        };

        let applied = {
            let mut inner = self.inner.borrow_mut();
            // The user moved on or sent a message while we waited
            if inner.generation != generation || inner.state.busy {
                false
            } else {
                inner.replace_transcript(Some(id.clone()), false);
                true
            }
        };

        if applied {
            log::info!("Started conversation {}", id);
            self.event_bus.emit(ChatEvent::ConversationChanged { id: Some(id) });
        } else {
            log::debug!("Conversation {} created but superseded before it could be opened", id);
        }

        self.sessions.refresh().await;
        applied
    }

    /// Send a message in the active conversation.
    ///
    /// Returns false without touching any state if the text is blank or
    /// the controller is not idle. Otherwise the transcript grows by
    /// exactly two messages: the user's text and the reply (or error text).
    pub async fn send_message(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let active_id = {
            let mut inner = self.inner.borrow_mut();
            let phase = inner.state.phase();
            if phase != ControllerPhase::Idle {
                log::debug!("Ignoring send while {:?}", phase);
                return false;
            }
            // A creation still pending must not replace this exchange
            inner.generation += 1;
            inner.state.busy = true;
            inner.state.messages.push(Message::user(text));
            inner.state.active_id.clone()
        };
        self.event_bus.emit(ChatEvent::BusyChanged { busy: true });
        self.event_bus.emit(ChatEvent::MessageAppended { role: Role::User });

        let result = self.gateway.ask(text, active_id.as_ref()).await;

        let adopted = {
            let mut inner = self.inner.borrow_mut();
            match result {
                Ok(AskReply { reply, id }) => {
                    let adopted = if active_id.is_none() {
                        inner.state.active_id = Some(id.clone());
                        Some(id)
                    } else {
                        None
                    };
                    inner.state.messages.push(Message::assistant(reply));
                    adopted
                }
                Err(e) => {
                    log::warn!("Failed to send message: {}", e);
                    inner.state.messages.push(Message::assistant(SEND_FAILURE_TEXT));
                    None
                }
            }
        };
        self.event_bus.emit(ChatEvent::MessageAppended { role: Role::Assistant });

        if let Some(id) = adopted {
            log::info!("Backend assigned conversation {}", id);
            self.event_bus.emit(ChatEvent::ConversationChanged { id: Some(id) });
            self.sessions.refresh().await;
        }

        self.inner.borrow_mut().state.busy = false;
        self.event_bus.emit(ChatEvent::BusyChanged { busy: false });
        true
    }
}
