// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying method, path and request id

use http::Request;
use tracing::Span;

use crate::constants::REQUEST_ID_HEADER;

/// Create a tracing span for an HTTP request
///
/// The request id is read from the `x-request-id` header, which the request-id
/// layer sets before this span is created.
#[must_use]
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_reads_request_id_header() {
        let request = Request::builder()
            .uri("/api/ingredients")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(())
            .unwrap();
        // Span is disabled without a subscriber; building it must not panic
        let _span = create_request_span(&request);
    }
}
