//! Custom Axum extractors

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

/// Body of `POST /items`.
///
/// Parsing never rejects. A non-JSON content type, an empty body, invalid
/// JSON, a non-object payload, or a non-string `name` all yield
/// `name: None`, which the handler reports as a missing name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateItemPayload {
    pub name: Option<String>,
}

impl CreateItemPayload {
    /// Parse leniently from raw bytes.
    pub fn from_slice(body: &[u8]) -> Self {
        let name = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("name")?.as_str().map(str::to_owned));
        Self { name }
    }
}

/// True for `application/json` and `application/*+json`, parameters ignored.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl<S> FromRequest<S> for CreateItemPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            tracing::debug!("non-JSON content type, treating body as empty");
            return Ok(Self::default());
        }

        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable request body, treating as empty");
                Bytes::new()
            }
        };
        Ok(Self::from_slice(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers_with("Application/JSON")));
        assert!(is_json_content_type(&headers_with("application/merge-patch+json")));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&headers_with("text/json")));
    }

    #[test]
    fn reads_string_name() {
        let payload = CreateItemPayload::from_slice(br#"{"name": " apple "}"#);
        assert_eq!(payload.name.as_deref(), Some(" apple "));
    }

    #[test]
    fn ignores_extra_fields() {
        let payload = CreateItemPayload::from_slice(br#"{"name": "pear", "color": "green"}"#);
        assert_eq!(payload.name.as_deref(), Some("pear"));
    }

    #[test]
    fn missing_or_malformed_is_none() {
        let bodies: [&[u8]; 9] = [
            b"",
            b"{}",
            b"not json",
            b"{\"name\": ",
            b"[\"name\"]",
            b"\"apple\"",
            b"{\"name\": null}",
            b"{\"name\": 42}",
            b"{\"name\": [\"a\"]}",
        ];
        for body in bodies {
            assert_eq!(
                CreateItemPayload::from_slice(body),
                CreateItemPayload::default(),
                "body: {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
