use crate::endpoint::Endpoint;
use crate::models::{Empty, ProjectList, ProjectObject, ProjectStatus, TokenResponse};
use crate::types::UrlPath;
use http::Method;
use serde::Serialize;

// GET /project
#[derive(Clone, Copy, Debug, Default)]
pub struct ListProjects;

impl Endpoint for ListProjects {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = ProjectList;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
    }
}

// GET /project/{projectCode}
#[derive(Clone, Debug)]
pub struct GetProject {
    pub project_code: String,
}

impl Endpoint for GetProject {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = ProjectObject;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
        path.push_segment_encoded(&self.project_code);
    }
}

/// Full project registration payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub code: String,
    pub name: String,
    pub url: String,
    pub icon_url: String,
    pub banner_url: String,
    pub rule_url: String,
    pub status: ProjectStatus,
    pub user_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

// POST /project
#[derive(Clone, Debug)]
pub struct PostProject {
    pub body: NewProject,
}

impl Endpoint for PostProject {
    const METHOD: Method = Method::POST;
    type Body = NewProject;
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
    }

    fn body(&self) -> Option<&NewProject> {
        Some(&self.body)
    }
}

/// Partial update; the project code and owner are immutable.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

// PATCH /project/{projectCode}
#[derive(Clone, Debug)]
pub struct PatchProject {
    pub project_code: String,
    pub body: ProjectPatch,
}

impl Endpoint for PatchProject {
    const METHOD: Method = Method::PATCH;
    type Body = ProjectPatch;
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
        path.push_segment_encoded(&self.project_code);
    }

    fn body(&self) -> Option<&ProjectPatch> {
        Some(&self.body)
    }
}

// DELETE /project/{projectCode}
#[derive(Clone, Debug)]
pub struct DeleteProject {
    pub project_code: String,
}

impl Endpoint for DeleteProject {
    const METHOD: Method = Method::DELETE;
    type Body = ();
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
        path.push_segment_encoded(&self.project_code);
    }
}

// POST /project/{projectCode}/oauth
#[derive(Clone, Debug)]
pub struct PostProjectOauth {
    pub project_code: String,
}

impl Endpoint for PostProjectOauth {
    const METHOD: Method = Method::POST;
    type Body = ();
    type Response = TokenResponse;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("project");
        path.push_segment_encoded(&self.project_code);
        path.push_raw("oauth");
    }
}
