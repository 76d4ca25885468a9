use crate::mock::RecordedRequest;
use http::Method;
use http::header::HeaderName;

pub struct RequestAssert<'a> {
    req: &'a RecordedRequest,
}

pub fn assert_request(req: &RecordedRequest) -> RequestAssert<'_> {
    RequestAssert { req }
}

impl<'a> RequestAssert<'a> {
    pub fn method(self, expected: Method) -> Self {
        let got = &self.req.method;
        if *got != expected {
            panic!(
                "method mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn path(self, expected: &str) -> Self {
        let got = self.req.url.path();
        if got != expected {
            panic!(
                "path mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn url(self, expected: &str) -> Self {
        let got = self.req.url.as_str();
        if got != expected {
            panic!("url mismatch\n  expected: {expected}\n  got: {got}");
        }
        self
    }

    pub fn header(self, name: HeaderName, expected: &str) -> Self {
        let got = self
            .req
            .headers
            .get(&name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_else(|| {
                panic!(
                    "header {name} missing\n  url: {}\n  headers: {:#?}",
                    self.req.url, self.req.headers
                )
            });
        if got != expected {
            panic!(
                "header {name} mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn no_header(self, name: HeaderName) -> Self {
        if let Some(v) = self.req.headers.get(&name) {
            panic!(
                "header {name} unexpectedly present (value={:?})\n  url: {}",
                v, self.req.url
            );
        }
        self
    }

    pub fn no_body(self) -> Self {
        if let Some(b) = self.req.body.as_ref() {
            panic!(
                "body unexpectedly present ({} bytes)\n  url: {}",
                b.len(),
                self.req.url
            );
        }
        self
    }

    /// Compares the recorded body against `expected` as JSON values, so key
    /// order never matters.
    pub fn body_json(self, expected: serde_json::Value) -> Self {
        let raw = self.req.body.as_ref().unwrap_or_else(|| {
            panic!("body missing\n  url: {}", self.req.url);
        });
        let got: serde_json::Value = serde_json::from_slice(raw).unwrap_or_else(|e| {
            panic!(
                "body is not valid JSON: {e}\n  raw: {}\n  url: {}",
                String::from_utf8_lossy(raw),
                self.req.url
            );
        });
        if got != expected {
            panic!(
                "body mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }
}
