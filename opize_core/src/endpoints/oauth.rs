use crate::endpoint::Endpoint;
use crate::models::TokenResponse;
use crate::types::UrlPath;
use http::Method;
use serde::Serialize;

/// Server-to-server token exchange payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OauthTokenRequest {
    pub generate_token: String,
    pub server_secret_token: String,
    pub redirect_url: String,
}

// POST /oauth
#[derive(Clone, Debug)]
pub struct PostOauth {
    pub body: OauthTokenRequest,
}

impl Endpoint for PostOauth {
    const METHOD: Method = Method::POST;
    type Body = OauthTokenRequest;
    type Response = TokenResponse;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("oauth");
    }

    fn body(&self) -> Option<&OauthTokenRequest> {
        Some(&self.body)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OauthVerifyRequest {
    pub redirect_url: String,
}

// POST /oauth/verify/{projectCode}
#[derive(Clone, Debug)]
pub struct PostOauthVerify {
    pub project_code: String,
    pub body: OauthVerifyRequest,
}

impl Endpoint for PostOauthVerify {
    const METHOD: Method = Method::POST;
    type Body = OauthVerifyRequest;
    type Response = TokenResponse;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("oauth");
        path.push_raw("verify");
        path.push_segment_encoded(&self.project_code);
    }

    fn body(&self) -> Option<&OauthVerifyRequest> {
        Some(&self.body)
    }
}
