//! Prometheus metrics for the cat service.
//!
//! HTTP metrics are recorded by [`middleware::MetricsMiddleware`]; the cat
//! service records one [`CAT_OPERATIONS`] sample per operation it completes.

pub mod middleware;
use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // Total HTTP requests by matched route.
    pub static ref REQUEST_COUNTER: CounterVec = {
        let opts = Opts::new("requests_total", "Total number of HTTP requests");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Total HTTP requests by raw URI.
    pub static ref RAW_REQUEST_COUNTER: CounterVec = {
        let opts = Opts::new("raw_requests_total", "Total number of HTTP requests by raw URI");
        let counter_vec = CounterVec::new(opts, &["raw_uri", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    pub static ref REQUEST_LATENCY: HistogramVec = {
        let histogram_opts = HistogramOpts::new("request_latency_seconds", "Request latency in seconds")
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]);
        let histogram_vec = HistogramVec::new(histogram_opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(histogram_vec.clone())).unwrap();
        histogram_vec
    };

    // Requests that failed inside the service stack before producing a response.
    pub static ref ERROR_COUNTER: CounterVec = {
        let opts = Opts::new("error_requests_total", "Total number of error responses");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Cat service operations by outcome (success, not_found, invalid, duplicate, error).
    pub static ref CAT_OPERATIONS: CounterVec = {
        let opts = Opts::new("cat_operations_total", "Total number of cat operations by outcome");
        let counter_vec = CounterVec::new(opts, &["operation", "outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };
}

/// Gather all metrics and encode them in the Prometheus text format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}

/// Records the outcome of a cat service operation.
pub fn record_cat_operation(operation: &str, outcome: &str) {
    CAT_OPERATIONS
        .with_label_values(&[operation, outcome])
        .inc();
}
