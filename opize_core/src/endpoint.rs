use crate::error::OpizeError;
use crate::types::UrlPath;
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One HTTP operation: fixed method, path layout, and typed parameter buckets.
///
/// Implementations are plain structs whose fields are the operation's path
/// parameters; the body is a separate typed sub-struct, so the path/query/body
/// buckets stay disjoint by construction and the path builder can only reach
/// declared fields.
pub trait Endpoint: Send + Sync + 'static {
    const METHOD: Method;

    /// Typed request body; `()` when the operation has none.
    type Body: Serialize + Send + Sync;

    /// Decoded response shape. This is a compile-time contract only: the
    /// executor deserializes into it and performs no further validation.
    type Response: DeserializeOwned + Send + 'static;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Push the operation's path segments. Dynamic values must go through
    /// [`UrlPath::push_segment_encoded`].
    fn path(&self, path: &mut UrlPath);

    /// Query pairs; empty for every current operation, kept as an explicit
    /// bucket for the executor.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Borrow the request body, if any.
    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// `Option` fields in body structs carry `skip_serializing_if`, so unset
/// fields are never sent.
pub(crate) fn encode_json_body<T: Serialize>(body: &T) -> Result<Bytes, OpizeError> {
    serde_json::to_vec(body)
        .map(Bytes::from)
        .map_err(OpizeError::Encode)
}
