//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the harness core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod log_sink;
mod property_loader;

pub use clock::Clock;
pub use http_client::{HttpClient, TransportError};
pub use log_sink::LogSink;
pub use property_loader::PropertyLoader;
