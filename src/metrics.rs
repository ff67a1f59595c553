//! Counters for data-source request outcomes.
//!
//! Uses the `metrics` facade; the embedding application installs a recorder
//! if these should be exported anywhere. Without one the calls are no-ops.

/// Endpoint family labels used on request counters.
pub mod endpoint {
    pub const PROFILE: &str = "profile";
    pub const PURCHASES: &str = "purchases";
    pub const PHOTO: &str = "photo";
}

/// Metrics collection for the profile and purchases data sources.
pub struct DataSourceMetrics;

impl DataSourceMetrics {
    /// Record a request that produced a usable result.
    pub fn record_request_success(endpoint: &'static str) {
        ::metrics::counter!("idme_requests_success_total", "endpoint" => endpoint).increment(1);
    }

    /// Record a request that failed at any stage (URL, transport, decode).
    pub fn record_request_error(endpoint: &'static str) {
        ::metrics::counter!("idme_requests_error_total", "endpoint" => endpoint).increment(1);
    }

    /// Record purchase entries dropped by per-element decode or mapping
    /// failure. Dropping is deliberate best-effort behavior; this counter
    /// keeps it visible instead of silent.
    pub fn record_purchases_dropped(count: u64) {
        ::metrics::counter!("idme_purchases_dropped_total").increment(count);
    }
}
