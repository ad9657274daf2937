//! Chat Platform — adapters behind the `ChatGateway` port.

pub mod gateway;

#[cfg(test)]
mod tests;
