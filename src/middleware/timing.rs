//! Response timing.
//!
//! Wraps every request and reports in the `X-Response-Time` header the time
//! from request entry until the inner service returned its `Response`. The
//! clock stops there: streaming the body to the client afterwards is not
//! included. Slow requests are logged at `warn`; in development every
//! request is logged at `info`.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Duration;
use tokio::time::Instant;

pub const RESPONSE_TIME_HEADER: &str = "x-response-time";

#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    /// Requests strictly slower than this are logged as slow
    pub slow_threshold: Duration,
    /// Log every request, not just slow ones
    pub verbose: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            slow_threshold: Duration::from_millis(1000),
            verbose: false,
        }
    }
}

pub async fn track_response_time(
    State(config): State<TimingConfig>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let elapsed = started.elapsed();
    let elapsed_ms = elapsed.as_millis() as u64;
    if elapsed > config.slow_threshold {
        tracing::warn!(%method, %path, duration_ms = elapsed_ms, "slow request");
    }
    if config.verbose {
        tracing::info!(
            %method,
            %path,
            duration_ms = elapsed_ms,
            status = response.status().as_u16(),
            "request completed"
        );
    }

    // A formatted integer plus "ms" is always a valid header value.
    if let Ok(value) = HeaderValue::from_str(&format!("{}ms", elapsed_ms)) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }
    response
}
