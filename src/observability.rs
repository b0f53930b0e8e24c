//! Metrics for the results engine, using standard Prometheus naming
//! conventions.

use std::fmt;
use std::sync::OnceLock;
use tracing::info;

/// Enum representing all metric names used in the system
/// This eliminates magic strings and provides compile-time safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Store metrics
    StoreQueriesSuccess,
    StoreQueriesError,
    StoreQueryDuration,

    // Existence probe metrics
    ProbeBatches,
    ProbeBatchSize,
    ProbeQueriesIssued,

    // View metrics
    ViewRefreshes,
    ViewRefreshErrors,
    ViewStaleDiscards,
}

impl MetricName {
    /// Get the metric name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            // Store metrics
            MetricName::StoreQueriesSuccess => "fest_store_queries_success_total",
            MetricName::StoreQueriesError => "fest_store_queries_error_total",
            MetricName::StoreQueryDuration => "fest_store_query_duration_seconds",

            // Existence probe metrics
            MetricName::ProbeBatches => "fest_probe_batches_total",
            MetricName::ProbeBatchSize => "fest_probe_batch_size",
            MetricName::ProbeQueriesIssued => "fest_probe_queries_issued_total",

            // View metrics
            MetricName::ViewRefreshes => "fest_view_refreshes_total",
            MetricName::ViewRefreshErrors => "fest_view_refresh_errors_total",
            MetricName::ViewStaleDiscards => "fest_view_stale_discards_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static METRICS_HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once at startup; the handle is kept
/// for the `/metrics` endpoint.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    METRICS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Render the current metrics in Prometheus text format.
pub fn metrics_text() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}

// ============================================================================
// Store Metrics
// ============================================================================

pub mod store {
    use super::MetricName;

    /// Record a successful store query
    pub fn query_success(collection: &'static str) {
        ::metrics::counter!(MetricName::StoreQueriesSuccess.as_str(), "collection" => collection)
            .increment(1);
    }

    /// Record a failed store query
    pub fn query_error(collection: &'static str) {
        ::metrics::counter!(MetricName::StoreQueriesError.as_str(), "collection" => collection)
            .increment(1);
    }

    /// Record query duration
    pub fn query_duration(collection: &'static str, secs: f64) {
        ::metrics::histogram!(MetricName::StoreQueryDuration.as_str(), "collection" => collection)
            .record(secs);
    }
}

// ============================================================================
// Existence Probe Metrics
// ============================================================================

pub mod probe {
    use super::MetricName;

    /// Record one batched probe run: how many programs it covered and how
    /// many store queries it actually issued
    pub fn batch(programs: usize, queries: usize) {
        ::metrics::counter!(MetricName::ProbeBatches.as_str()).increment(1);
        ::metrics::histogram!(MetricName::ProbeBatchSize.as_str()).record(programs as f64);
        ::metrics::counter!(MetricName::ProbeQueriesIssued.as_str()).increment(queries as u64);
    }
}

// ============================================================================
// View Metrics
// ============================================================================

pub mod views {
    use super::MetricName;

    /// Record a completed view refresh
    pub fn refresh(view: &'static str) {
        ::metrics::counter!(MetricName::ViewRefreshes.as_str(), "view" => view).increment(1);
    }

    /// Record a refresh that fell back to empty data
    pub fn refresh_error(view: &'static str) {
        ::metrics::counter!(MetricName::ViewRefreshErrors.as_str(), "view" => view).increment(1);
    }

    /// Record a fetch result discarded because its view moved on
    pub fn stale_discard(view: &'static str) {
        ::metrics::counter!(MetricName::ViewStaleDiscards.as_str(), "view" => view).increment(1);
    }
}
