//! In-memory backend.
//! Behaves like the real server's history store but keeps everything in
//! this process. Not persistent across page reloads.

use std::cell::{Cell, RefCell};
use async_trait::async_trait;
use uuid::Uuid;

use chat_core::ports::{AskReply, ChatGateway};
use chat_types::{
    ChatError, Result,
    conversation::{ConversationId, ConversationSummary, NEW_CHAT_TITLE},
    message::{Message, Role},
};

const TITLE_MAX_CHARS: usize = 30;

/// Produces the answer to a question
pub type Responder = Box<dyn Fn(&str) -> String>;

struct StoredMessage {
    message: Message,
    timestamp: String,
}

struct StoredConversation {
    id: ConversationId,
    messages: Vec<StoredMessage>,
}

impl StoredConversation {
    fn summary(&self) -> ConversationSummary {
        let title = self
            .messages
            .iter()
            .find(|m| m.message.role == Role::User)
            .map(|m| title_from(&m.message.content))
            .unwrap_or_else(|| NEW_CHAT_TITLE.to_string());
        let timestamp = self
            .messages
            .last()
            .map(|m| m.timestamp.clone())
            .unwrap_or_default();
        ConversationSummary {
            id: self.id.clone(),
            title,
            timestamp,
        }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(StoredMessage {
            message,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }
}

pub struct MemoryGateway {
    /// In creation order; listed newest first
    conversations: RefCell<Vec<StoredConversation>>,
    responder: Responder,
    offline: Cell<bool>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::with_responder(|question| {
            format!(
                "This is the offline demo backend. No documents are indexed, \
                 so I can't answer \"{}\" yet.",
                question.trim()
            )
        })
    }

    pub fn with_responder(responder: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            conversations: RefCell::new(Vec::new()),
            responder: Box::new(responder),
            offline: Cell::new(false),
        }
    }

    /// Make every call fail with a transport error, as an unreachable server would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.get() {
            return Err(ChatError::Transport("memory backend is offline".to_string()));
        }
        Ok(())
    }

    fn allocate(&self) -> ConversationId {
        let id = ConversationId::new(Uuid::new_v4().to_string());
        self.conversations.borrow_mut().push(StoredConversation {
            id: id.clone(),
            messages: Vec::new(),
        });
        id
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ChatGateway for MemoryGateway {
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        self.check_online()?;
        Ok(self
            .conversations
            .borrow()
            .iter()
            .rev()
            .map(StoredConversation::summary)
            .collect())
    }

    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>> {
        self.check_online()?;
        Ok(self
            .conversations
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.messages.iter().map(|m| m.message.clone()).collect())
            .unwrap_or_default())
    }

    async fn create_conversation(&self) -> Result<ConversationId> {
        self.check_online()?;
        Ok(self.allocate())
    }

    async fn ask(&self, text: &str, id: Option<&ConversationId>) -> Result<AskReply> {
        self.check_online()?;
        let id = match id {
            Some(id) => id.clone(),
            None => self.allocate(),
        };
        let reply = (self.responder)(text);

        let mut conversations = self.conversations.borrow_mut();
        let index = match conversations.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                conversations.push(StoredConversation {
                    id: id.clone(),
                    messages: Vec::new(),
                });
                conversations.len() - 1
            }
        };
        let conversation = &mut conversations[index];
        conversation.push(Message::user(text));
        conversation.push(Message::assistant(reply.clone()));

        Ok(AskReply { reply, id })
    }

    fn gateway_name(&self) -> &str {
        "memory"
    }
}

/// First user message, cut to 30 characters with an ellipsis when longer
fn title_from(content: &str) -> String {
    let content = content.trim();
    if content.chars().count() > TITLE_MAX_CHARS {
        let cut: String = content.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        content.to_string()
    }
}
