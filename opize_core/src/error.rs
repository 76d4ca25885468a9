use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use thiserror::Error;

pub type FxError = Box<dyn Error + Send + Sync>;

/// Payload shape the API uses to report handled failures.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Every failure an SDK call can resolve to.
///
/// Server-reported failures land in [`OpizeError::HttpResponse`] (structured)
/// or [`OpizeError::UnknownHttpResponse`] (unrecognized payload); anything the
/// transport failed with before a response passes through as
/// [`OpizeError::Transport`] with its source chain intact.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OpizeError {
    #[error("request timed out after {timeout:?}")]
    RequestTimeout { timeout: Duration },

    #[error("status {status}: {code}")]
    HttpResponse {
        status: StatusCode,
        code: String,
        message: Option<String>,
        headers: HeaderMap,
        body: String,
    },

    #[error("status {status}")]
    UnknownHttpResponse {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },

    #[error("transport: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("build url error: {0}")]
    BuildUrl(#[from] url::ParseError),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode error: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    #[error("invalid/missing param: {0}")]
    InvalidParam(&'static str),
}

impl OpizeError {
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, OpizeError::RequestTimeout { .. })
    }

    /// True for both structured and unrecognized non-2xx responses.
    #[inline]
    pub fn is_http_response(&self) -> bool {
        matches!(
            self,
            OpizeError::HttpResponse { .. } | OpizeError::UnknownHttpResponse { .. }
        )
    }

    /// Status of the server response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            OpizeError::HttpResponse { status, .. }
            | OpizeError::UnknownHttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Application error code, when the server reported one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            OpizeError::HttpResponse { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Classify a completed non-2xx transaction.
pub(crate) fn classify_response(status: StatusCode, headers: HeaderMap, body: Bytes) -> OpizeError {
    let preview = body_as_text(&headers, &body);
    match serde_json::from_slice::<ApiErrorBody>(&body) {
        Ok(payload) => OpizeError::HttpResponse {
            status,
            code: payload.code,
            message: payload.message,
            headers,
            body: preview,
        },
        Err(_) => OpizeError::UnknownHttpResponse {
            status,
            headers,
            body: preview,
        },
    }
}

pub fn body_as_text(headers: &HeaderMap, body: &Bytes) -> String {
    const MAX: usize = 8 * 1024;
    let ct = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let slice = if body.len() > MAX {
        &body[..MAX]
    } else {
        &body[..]
    };

    if ct.starts_with("application/json") || ct.starts_with("text/") {
        match std::str::from_utf8(slice) {
            Ok(s) => {
                if body.len() > slice.len() {
                    format!("{}...", s)
                } else {
                    s.to_owned()
                }
            }
            Err(_) => format!("<non-utf8-text; {} bytes>", slice.len()),
        }
    } else {
        let b64 = B64.encode(slice);
        format!(
            "<non-text; {} bytes; base64:{}{}>",
            body.len(),
            &b64[..b64.len().min(1024)],
            if b64.len() > 1024 { "..." } else { "" }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http::HeaderValue;
    use http::header::CONTENT_TYPE;

    fn json_headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h
    }

    #[test]
    fn structured_payload_classifies_as_http_response() {
        let err = classify_response(
            StatusCode::NOT_FOUND,
            json_headers(),
            Bytes::from_static(br#"{"code":"project_not_found","message":"no such project"}"#),
        );
        match err {
            OpizeError::HttpResponse {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(code, "project_not_found");
                assert_eq!(message.as_deref(), Some("no such project"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn unrecognized_payload_classifies_as_unknown() {
        let err = classify_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            Bytes::from_static(b"\x00\x01boom"),
        );
        assert!(matches!(err, OpizeError::UnknownHttpResponse { .. }));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.error_code(), None);
    }

    #[test]
    fn body_as_text_uses_base64_for_non_text() {
        let s = body_as_text(&HeaderMap::new(), &Bytes::from_static(&[0x00, 0x01, 0x02]));
        assert!(s.starts_with("<non-text; 3 bytes; base64:"));

        let s = body_as_text(&json_headers(), &Bytes::from_static(b"{\"a\":1}"));
        assert_eq!(s, "{\"a\":1}");
    }
}
