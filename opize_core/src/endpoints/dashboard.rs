use crate::endpoint::Endpoint;
use crate::models::{Empty, NotionRecordMap, NotionRecordMapList};
use crate::types::UrlPath;
use http::Method;
use serde::Serialize;

// GET /dashboard/notion/page
#[derive(Clone, Copy, Debug, Default)]
pub struct ListNotionPages;

impl Endpoint for ListNotionPages {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = NotionRecordMapList;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("dashboard/notion/page");
    }
}

// GET /dashboard/notion/page/{page}
#[derive(Clone, Debug)]
pub struct GetNotionPage {
    pub page: String,
}

impl Endpoint for GetNotionPage {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = NotionRecordMap;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("dashboard/notion/page");
        path.push_segment_encoded(&self.page);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionPagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_caching: Option<bool>,
}

// PATCH /dashboard/notion/page/{page}
#[derive(Clone, Debug)]
pub struct PatchNotionPage {
    pub page: String,
    pub body: NotionPagePatch,
}

impl Endpoint for PatchNotionPage {
    const METHOD: Method = Method::PATCH;
    type Body = NotionPagePatch;
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("dashboard/notion/page");
        path.push_segment_encoded(&self.page);
    }

    fn body(&self) -> Option<&NotionPagePatch> {
        Some(&self.body)
    }
}

// DELETE /dashboard/notion/page/{page}
#[derive(Clone, Debug)]
pub struct DeleteNotionPage {
    pub page: String,
}

impl Endpoint for DeleteNotionPage {
    const METHOD: Method = Method::DELETE;
    type Body = ();
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("dashboard/notion/page");
        path.push_segment_encoded(&self.page);
    }
}
