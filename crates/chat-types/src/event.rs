use serde::{Deserialize, Serialize};
use crate::conversation::ConversationId;
use crate::message::Role;

/// Events emitted by the conversation controller and session store.
/// The view drains these each frame to decide what to repaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChatEvent {
    /// The active conversation was switched, created, or assigned its id
    ConversationChanged { id: Option<ConversationId> },

    /// A message was appended to the active transcript
    MessageAppended { role: Role },

    /// A send request started or finished
    BusyChanged { busy: bool },

    /// A conversation's history replaced the transcript
    HistoryLoaded { id: ConversationId, count: usize },

    /// The conversation list was replaced
    ConversationsRefreshed { count: usize },

    /// A collaborator failed; logged and absorbed
    Error { message: String },
}
