use http::{HeaderMap, HeaderValue, header};

/// Let any origin read the response.
///
/// Replaces an existing value, so running behind the router's CORS layer
/// never yields a duplicated header.
pub fn set_cors_allow_all(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}
