mod api;
mod client;
mod debug;
mod endpoint;
pub mod endpoints;
pub mod error;
mod models;
mod secret;
pub mod transport;
mod types;

pub mod prelude {
    pub use crate::api::{
        DashboardApi, NotionApi, NotionPageApi, OauthApi, ProjectApi, ProjectOauthApi, UserApi,
    };
    pub use crate::client::{Client, ClientOptions, PendingRequest, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
    pub use crate::debug::{DebugLevel, DebugSink, NoopDebugSink, StderrDebugSink};
    pub use crate::endpoint::Endpoint;
    pub use crate::endpoints::dashboard::NotionPagePatch;
    pub use crate::endpoints::oauth::{OauthTokenRequest, OauthVerifyRequest};
    pub use crate::endpoints::project::{NewProject, ProjectPatch};
    pub use crate::endpoints::user::{UserId, UserPatch};
    pub use crate::error::{FxError, OpizeError};
    pub use crate::models::{
        Currency, Empty, NotionRecordMap, NotionRecordMapList, OauthGrant, OauthGrantList,
        ProjectList, ProjectObject, ProjectStatus, TokenResponse, UserObject,
    };
    pub use crate::secret::SecretString;
    pub use crate::transport::{
        BuiltRequest, ReqwestTransport, Transport, TransportError, TransportResponse,
    };
    pub use crate::types::UrlPath;
}
