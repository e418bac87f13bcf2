//! Telemetry metric name constants.
//!
//! Centralised metric names for alehouse operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `alehouse_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation`: RPC invoked (e.g. "create_beer", "list_beers")
//! - `status`: outcome: "ok", "invalid_argument" or "internal"

/// Total RPCs handled by the beer service.
///
/// Labels: `operation`, `status`.
pub const REQUESTS_TOTAL: &str = "alehouse_requests_total";

/// RPC duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "alehouse_request_duration_seconds";
