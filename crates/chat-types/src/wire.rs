//! Request and response bodies of the question-answering backend.
//!
//! Field names follow the backend's JSON. Unknown fields are ignored
//! so the backend can grow its responses without breaking the client.

use serde::{Deserialize, Serialize};
use crate::conversation::ConversationId;

/// `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    /// `null` on the first message of a conversation; the backend allocates one
    #[serde(default)]
    pub chat_id: Option<ConversationId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
    pub chat_id: ConversationId,
}

/// `POST /new`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatResponse {
    pub chat_id: ConversationId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response: Option<String>,
}
