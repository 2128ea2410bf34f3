pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod location;
pub mod pipeline;
pub mod resolution;
pub mod server;
