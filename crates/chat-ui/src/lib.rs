//! Chat UI — egui panels that render controller snapshots and
//! report user intents back to the app.

pub mod state;
pub mod theme;
pub mod panels;
