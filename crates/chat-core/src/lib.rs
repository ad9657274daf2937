//! Chat Core — conversation state with no platform dependencies.
//!
//! The view drives a [`controller::ConversationController`]; the controller
//! talks to the backend only through [`ports::ChatGateway`].

pub mod ports;
pub mod event_bus;
pub mod session_store;
pub mod controller;
