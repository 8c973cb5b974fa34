//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use http::HeaderMap;
use http::header::AUTHORIZATION;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from the Authorization header, if present.
///
/// Returns `None` for a missing header, a non-Bearer scheme or an empty
/// token; credential validity is the caller's concern.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
