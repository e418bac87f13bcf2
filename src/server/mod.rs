//! gRPC server and shared proto types.
//!
//! This module provides:
//! - Generated protobuf types (`proto`) used by both server and client
//! - Type conversions between native and proto types (`convert`)
//! - Update-mask interpretation (`update_mask`)
//! - The gRPC service implementation (`service`, server-only)
//! - Request correlation (`request_id`, server-only)
//! - Configuration types (`config`, server-only)

#[cfg(feature = "server")]
pub mod config;
pub mod convert;
#[cfg(feature = "server")]
pub mod request_id;
#[cfg(feature = "server")]
pub mod service;
pub mod update_mask;

/// Re-exported generated proto types.
pub mod proto {
    tonic::include_proto!("alehouse.v1");
}

#[cfg(feature = "server")]
pub use service::{AlehouseService, to_status};
