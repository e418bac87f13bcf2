//! Request correlation.
//!
//! Callers (or an HTTP front-end) may tag a request with an `x-request-id`
//! metadata header. [`intercept`] copies it into the request extensions,
//! minting a fresh UUID when the header is absent, so handlers can attach it
//! to their tracing span.

use std::fmt;

use tonic::{Request, Status};

/// Metadata key carrying the correlation identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation identifier for one RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn generate() -> Self {
        RequestId(uuid::Uuid::new_v4().to_string())
    }

    fn from_metadata<T>(request: &Request<T>) -> Option<Self> {
        request
            .metadata()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| RequestId(v.to_string()))
    }

    /// The identifier attached to `request`: the intercepted value if present,
    /// otherwise the raw header, otherwise a fresh one.
    pub fn of<T>(request: &Request<T>) -> Self {
        request
            .extensions()
            .get::<RequestId>()
            .cloned()
            .or_else(|| Self::from_metadata(request))
            .unwrap_or_else(Self::generate)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tonic interceptor storing a [`RequestId`] in the request extensions.
pub fn intercept(mut request: Request<()>) -> Result<Request<()>, Status> {
    let id = RequestId::from_metadata(&request).unwrap_or_else(RequestId::generate);
    request.extensions_mut().insert(id);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_kept() {
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "abc-123".parse().unwrap());
        let request = intercept(request).unwrap();
        assert_eq!(RequestId::of(&request).as_str(), "abc-123");
    }

    #[test]
    fn missing_header_gets_a_uuid() {
        let request = intercept(Request::new(())).unwrap();
        let id = RequestId::of(&request);
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        // Stable once intercepted.
        assert_eq!(RequestId::of(&request), id);
    }

    #[test]
    fn blank_header_is_ignored() {
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "  ".parse().unwrap());
        let request = intercept(request).unwrap();
        assert!(uuid::Uuid::parse_str(RequestId::of(&request).as_str()).is_ok());
    }

    #[test]
    fn unintercepted_requests_fall_back_to_header() {
        let mut request = Request::new(5_u8);
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "direct".parse().unwrap());
        assert_eq!(RequestId::of(&request).to_string(), "direct");
    }
}
