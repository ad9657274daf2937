//! Pick the gateway for a configuration.
//!
//! `memory:` selects the in-process backend; anything else is treated as
//! an HTTP base URL. An invalid configuration falls back to memory.

use std::rc::Rc;
use chat_core::ports::ChatGateway;
use chat_types::config::ClientConfig;
use super::{HttpGateway, MemoryGateway};

pub const MEMORY_API_BASE: &str = "memory:";

/// Returns a trait object so callers are backend-agnostic.
pub fn select_gateway(config: &ClientConfig) -> Rc<dyn ChatGateway> {
    if config.api_base.trim() == MEMORY_API_BASE {
        log::info!("Gateway: in-memory demo backend");
        return Rc::new(MemoryGateway::new());
    }

    match HttpGateway::new(config.clone()) {
        Ok(http) => {
            log::info!("Gateway: HTTP at {}", config.api_base);
            Rc::new(http)
        }
        Err(e) => {
            log::warn!("HTTP gateway unavailable ({}), falling back to memory", e);
            Rc::new(MemoryGateway::new())
        }
    }
}
