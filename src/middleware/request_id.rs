//! Request ids: assigned on the way in, echoed on the way out.
//!
//! Error bodies carry no id; clients read it from the response header, so
//! the header is also exposed through CORS.

use axum::http::{HeaderMap, HeaderName};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const X_REQUEST_ID: &str = "x-request-id";

pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Keeps a caller-supplied id, otherwise assigns a UUID v4, and copies it
/// onto the response.
pub fn request_id_layer() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::new(request_id_header(), MakeRequestUuid),
        PropagateRequestIdLayer::new(request_id_header()),
    )
}

pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_request_id_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.request_id(), None);
        headers.insert(request_id_header(), HeaderValue::from_static("abc-123"));
        assert_eq!(headers.request_id(), Some("abc-123"));
    }

    #[test]
    fn non_ascii_id_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            request_id_header(),
            HeaderValue::from_bytes(&[0xE2, 0x9C, 0x93]).unwrap(),
        );
        assert_eq!(headers.request_id(), None);
    }
}
