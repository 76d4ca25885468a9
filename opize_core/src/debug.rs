use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
#[derive(Default)]
pub enum DebugLevel {
    #[default]
    None = 0,
    V = 1,
    VV = 2,
}

impl DebugLevel {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != DebugLevel::None
    }

    #[inline]
    pub fn is_verbose(self) -> bool {
        self >= DebugLevel::V
    }

    #[inline]
    pub fn is_very_verbose(self) -> bool {
        self >= DebugLevel::VV
    }
}

impl core::fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DebugLevel::None => f.write_str("none"),
            DebugLevel::V => f.write_str("v"),
            DebugLevel::VV => f.write_str("vv"),
        }
    }
}

pub trait DebugSink: Send + Sync + 'static {
    fn request_line(&self, dbg: DebugLevel, method: &Method, url: &str, endpoint: &'static str);
    fn request_headers(&self, dbg: DebugLevel, headers: &HeaderMap);
    fn request_body(&self, dbg: DebugLevel, body: &Bytes);

    fn response_line(&self, dbg: DebugLevel, status: StatusCode, url: &str, ok: bool);
    fn response_body_preview(&self, dbg: DebugLevel, headers: &HeaderMap, body: &Bytes);
}

#[derive(Default)]
pub struct NoopDebugSink;
impl DebugSink for NoopDebugSink {
    #[inline]
    fn request_line(&self, _: DebugLevel, _: &Method, _: &str, _: &'static str) {}
    #[inline]
    fn request_headers(&self, _: DebugLevel, _: &HeaderMap) {}
    #[inline]
    fn request_body(&self, _: DebugLevel, _: &Bytes) {}
    #[inline]
    fn response_line(&self, _: DebugLevel, _: StatusCode, _: &str, _: bool) {}
    #[inline]
    fn response_body_preview(&self, _: DebugLevel, _: &HeaderMap, _: &Bytes) {}
}

const MAX_BODY_CHARS: usize = 32 * 1024;

pub struct StderrDebugSink;
impl DebugSink for StderrDebugSink {
    fn request_line(&self, dbg: DebugLevel, method: &Method, url: &str, endpoint: &'static str) {
        eprintln!("[opize:{}] -> {} {} ({})", dbg, method, url, endpoint);
    }
    fn request_headers(&self, dbg: DebugLevel, headers: &HeaderMap) {
        eprintln!("[opize:{}] request headers:", dbg);
        for (k, v) in headers.iter() {
            let vs = header_value_for_debug(k, v);
            eprintln!("  {}: {}", k, vs);
        }
    }
    fn request_body(&self, dbg: DebugLevel, body: &Bytes) {
        let preview = truncate_chars(&String::from_utf8_lossy(body), MAX_BODY_CHARS);
        eprintln!(
            "[opize:{}] request body ({} bytes): {}",
            dbg,
            body.len(),
            preview
        );
    }

    fn response_line(&self, dbg: DebugLevel, status: StatusCode, url: &str, ok: bool) {
        if ok {
            eprintln!("[opize:{}] <- {} {} (ok)", dbg, status.as_u16(), url);
        } else {
            eprintln!("[opize:{}] <- {} {} (error)", dbg, status.as_u16(), url);
        }
    }
    fn response_body_preview(&self, dbg: DebugLevel, headers: &HeaderMap, body: &Bytes) {
        let preview = crate::error::body_as_text(headers, body);
        eprintln!("[opize:{}] response body preview: {}", dbg, preview);
    }
}

fn is_sensitive_header_name(name: &HeaderName) -> bool {
    // HeaderName::as_str() is normalized to lowercase.
    let n = name.as_str();
    matches!(n, "authorization" | "proxy-authorization" | "cookie" | "set-cookie")
        || n.contains("token")
        || n.contains("secret")
        || n.contains("api-key")
        || n.contains("apikey")
        || n.ends_with("-key")
}

fn header_value_for_debug(name: &HeaderName, value: &HeaderValue) -> String {
    if is_sensitive_header_name(name) {
        "<redacted>".to_string()
    } else {
        value.to_str().unwrap_or("<non-utf8>").to_string()
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let mut it = s.chars();
    let mut out = String::new();
    for _ in 0..max_chars {
        match it.next() {
            Some(c) => out.push(c),
            None => return out,
        }
    }
    if it.next().is_some() {
        out.push('…');
    }
    out
}
