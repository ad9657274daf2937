//! Port traits — the hexagonal architecture boundary.
//!
//! The gateway trait is defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser fetch, in-memory).
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use chat_types::{
    Result,
    conversation::{ConversationId, ConversationSummary},
    message::Message,
};

// ─── Gateway Port ────────────────────────────────────────────

/// Answer to a question, tagged with the conversation it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskReply {
    pub reply: String,
    pub id: ConversationId,
}

/// The question-answering backend.
///
/// Every call is one suspension point. Failures come back as
/// `ChatError::Transport`; there are no retries or timeouts at this layer.
#[async_trait(?Send)]
pub trait ChatGateway {
    /// All known conversations, in backend order
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>>;

    /// Transcript of one conversation
    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>>;

    /// Allocate an empty conversation
    async fn create_conversation(&self) -> Result<ConversationId>;

    /// Ask a question. With `id == None` the backend allocates a conversation,
    /// otherwise it echoes the supplied id.
    async fn ask(&self, text: &str, id: Option<&ConversationId>) -> Result<AskReply>;

    /// Name of this gateway (for logging/debug)
    fn gateway_name(&self) -> &str;
}
