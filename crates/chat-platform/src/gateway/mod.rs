pub mod http;
pub mod memory;
pub mod auto;

pub use http::HttpGateway;
pub use memory::MemoryGateway;
pub use auto::{select_gateway, MEMORY_API_BASE};
