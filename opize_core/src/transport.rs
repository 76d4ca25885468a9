use crate::error::FxError;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// One fully assembled HTTP call, ready for a [`Transport`].
#[derive(Clone, Debug)]
pub struct BuiltRequest {
    pub endpoint: &'static str,
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Opaque transport-layer failure (connect, DNS, TLS, read, ...).
#[derive(Debug)]
pub struct TransportError(FxError);

impl TransportError {
    #[inline]
    pub fn new(e: impl Error + Send + Sync + 'static) -> Self {
        Self(Box::new(e))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

/// Injectable transport layer.
///
/// Contract:
/// - Must honor every `BuiltRequest` field (url/headers/body).
/// - Must not leak a concrete HTTP client type in its public surface.
/// - Timeouts are owned by the caller; dropping the returned future must
///   abandon the in-flight call.
pub trait Transport: Send + Sync + 'static {
    fn send<'a>(
        &'a self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[inline]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    #[inline]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>> {
        let client = self.client.clone();
        Box::pin(async move {
            let mut rb = client.request(req.method, req.url).headers(req.headers);
            if let Some(b) = req.body {
                rb = rb.body(b);
            }
            let resp = rb.send().await.map_err(TransportError::from)?;
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp.bytes().await.map_err(TransportError::from)?;
            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        })
    }
}
