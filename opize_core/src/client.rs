use crate::debug::{DebugLevel, DebugSink, StderrDebugSink};
use crate::endpoint::{self, Endpoint};
use crate::error::{self, OpizeError};
use crate::secret::SecretString;
use crate::transport::{BuiltRequest, ReqwestTransport, Transport, TransportResponse};
use crate::types::UrlPath;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.opize.me/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Construction-time options. Everything is optional; defaults target the
/// hosted API.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    auth: Option<SecretString>,
    timeout: Option<Duration>,
    base_url: Option<String>,
    api_version: Option<String>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(mut self, token: impl Into<SecretString>) -> Self {
        self.auth = Some(token.into());
        self
    }

    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_version(mut self, v: impl Into<String>) -> Self {
        self.api_version = Some(v.into());
        self
    }
}

/// API client: read-mostly configuration plus one generic request executor.
///
/// A single instance is safe to share across tasks; the default credential is
/// the only mutable state (see [`Client::update_auth`]). Clones share it.
pub struct Client<T: Transport = ReqwestTransport> {
    transport: Arc<T>,
    auth: Arc<RwLock<Option<SecretString>>>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    api_version: Option<String>,
    debug_level: DebugLevel,
    sink: Arc<dyn DebugSink>,
}

impl Client<ReqwestTransport> {
    pub fn new(options: ClientOptions) -> Self {
        Self::with_reqwest_client(options, reqwest::Client::new())
    }

    pub fn with_reqwest_client(options: ClientOptions, client: reqwest::Client) -> Self {
        Self::with_transport(options, ReqwestTransport::new(client))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(options: ClientOptions, transport: T) -> Self {
        let base_url = options
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            transport: Arc::new(transport),
            auth: Arc::new(RwLock::new(options.auth)),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: format!("opize-client/{}", env!("CARGO_PKG_VERSION")),
            api_version: options.api_version,
            debug_level: DebugLevel::default(),
            sink: Arc::new(StderrDebugSink),
        }
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[inline]
    pub fn debug_level(&self) -> DebugLevel {
        self.debug_level
    }

    #[inline]
    pub fn with_debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = level;
        self
    }

    #[inline]
    pub fn with_debug_sink(mut self, sink: impl DebugSink) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Swap the default credential used by subsequent calls; `None` clears it.
    ///
    /// Not synchronized against in-flight calls: a call that already resolved
    /// its headers keeps the credential it saw.
    pub fn update_auth(&self, auth: Option<SecretString>) {
        *self.auth.write().unwrap_or_else(|e| e.into_inner()) = auth;
    }

    #[inline]
    pub fn request<E: Endpoint>(&self, ep: E) -> PendingRequest<'_, E, T> {
        PendingRequest::new(self, ep)
    }

    fn build_request<E: Endpoint>(
        &self,
        ep: &E,
        auth_override: Option<&SecretString>,
    ) -> Result<BuiltRequest, OpizeError> {
        let mut path = UrlPath::new();
        ep.path(&mut path);

        // Base URL and endpoint path are concatenated verbatim; the base
        // carries the /v1 prefix.
        let mut url = url::Url::parse(&format!("{}{}", self.base_url, path.as_str()))?;
        let query = ep.query();
        if !query.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &query {
                qp.append_pair(k, v);
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|_| OpizeError::InvalidParam("user agent"))?,
        );

        let default = self.auth.read().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = resolve_credential(auth_override, default.as_ref()) {
            if token.is_empty() {
                return Err(OpizeError::InvalidParam("credential must be non-empty"));
            }
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
                .map_err(|_| OpizeError::InvalidParam("credential"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut body = None;
        if let Some(b) = ep.body() {
            let encoded = endpoint::encode_json_body(b)?;
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            body = Some(encoded);
        }

        Ok(BuiltRequest {
            endpoint: ep.name(),
            method: E::METHOD,
            url,
            headers,
            body,
        })
    }

    async fn execute<E: Endpoint>(
        &self,
        ep: &E,
        auth_override: Option<&SecretString>,
        timeout_override: Option<Duration>,
        dbg: DebugLevel,
    ) -> Result<E::Response, OpizeError> {
        let timeout = timeout_override.unwrap_or(self.timeout);
        if timeout.is_zero() {
            return Err(OpizeError::InvalidParam("timeout must be positive"));
        }

        let built = self.build_request(ep, auth_override)?;
        let url_str = built.url.as_str().to_string();

        if dbg.is_verbose() {
            self.sink
                .request_line(dbg, &built.method, &url_str, built.endpoint);
        }
        if dbg.is_very_verbose() {
            self.sink.request_headers(dbg, &built.headers);
            if let Some(body) = built.body.as_ref() {
                self.sink.request_body(dbg, body);
            }
        }

        // Race the transport call against the per-call budget. The losing
        // branch is dropped, which abandons the in-flight request.
        let resp = tokio::select! {
            resp = self.transport.send(built) => resp?,
            _ = tokio::time::sleep(timeout) => {
                return Err(OpizeError::RequestTimeout { timeout });
            }
        };

        let TransportResponse {
            status,
            headers,
            body,
        } = resp;
        if dbg.is_verbose() {
            self.sink
                .response_line(dbg, status, &url_str, status.is_success());
        }
        if dbg.is_very_verbose() {
            self.sink.response_body_preview(dbg, &headers, &body);
        }

        if !status.is_success() {
            return Err(error::classify_response(status, headers, body));
        }

        decode_response::<E>(&headers, body)
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            auth: Arc::clone(&self.auth),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            api_version: self.api_version.clone(),
            debug_level: self.debug_level,
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Per-call credential if present, else the client default, else absent.
fn resolve_credential(
    per_call: Option<&SecretString>,
    default: Option<&SecretString>,
) -> Option<SecretString> {
    per_call.or(default).cloned()
}

fn decode_response<E: Endpoint>(
    headers: &HeaderMap,
    body: Bytes,
) -> Result<E::Response, OpizeError> {
    // 204-style replies carry no payload; decode them as an empty object so
    // Empty-typed operations succeed.
    let slice: &[u8] = if body.is_empty() { b"{}" } else { &body };
    serde_json::from_slice(slice).map_err(|source| OpizeError::Decode {
        source,
        body: error::body_as_text(headers, &body),
    })
}

/// One call being assembled: per-call overrides, awaitable directly.
pub struct PendingRequest<'a, E: Endpoint, T: Transport = ReqwestTransport> {
    client: &'a Client<T>,
    ep: E,
    auth_override: Option<SecretString>,
    timeout_override: Option<Duration>,
    debug_override: Option<DebugLevel>,
}

impl<'a, E: Endpoint, T: Transport> PendingRequest<'a, E, T> {
    #[inline]
    pub(crate) fn new(client: &'a Client<T>, ep: E) -> Self {
        Self {
            client,
            ep,
            auth_override: None,
            timeout_override: None,
            debug_override: None,
        }
    }

    /// Per-call credential; wins over the client default.
    #[inline]
    pub fn auth(mut self, token: impl Into<SecretString>) -> Self {
        self.auth_override = Some(token.into());
        self
    }

    #[inline]
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout_override = Some(d);
        self
    }

    #[inline]
    pub fn debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_override = Some(level);
        self
    }

    pub async fn execute(self) -> Result<E::Response, OpizeError> {
        let dbg = self.debug_override.unwrap_or(self.client.debug_level);
        self.client
            .execute(
                &self.ep,
                self.auth_override.as_ref(),
                self.timeout_override,
                dbg,
            )
            .await
    }
}

impl<'a, E, T> IntoFuture for PendingRequest<'a, E, T>
where
    E: Endpoint,
    T: Transport,
{
    type Output = Result<E::Response, OpizeError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn credential_resolution_prefers_per_call() {
        let per_call = SecretString::new("override");
        let default = SecretString::new("default");

        let got = resolve_credential(Some(&per_call), Some(&default));
        assert_eq!(got.as_ref().map(|s| s.expose()), Some("override"));

        let got = resolve_credential(None, Some(&default));
        assert_eq!(got.as_ref().map(|s| s.expose()), Some("default"));

        assert!(resolve_credential(None, None).is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::new(ClientOptions::new().base_url("https://example.test/v1/"));
        assert_eq!(client.base_url(), "https://example.test/v1");
    }
}
