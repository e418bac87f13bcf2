//! gRPC client for alehoused.

mod service_client;

pub use service_client::{ServiceClient, from_status};
