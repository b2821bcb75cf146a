//! In-memory [`HttpFetch`] for unit tests.

use crate::fetch::{HttpFetch, HttpResponse};
use async_trait::async_trait;
use iptrack_core::{LookupFailure, Result};
use std::sync::Mutex;
use url::Url;

/// Answers requests whose URL contains a registered pattern; anything else
/// fails as a transport error. Every requested URL is recorded.
#[derive(Default)]
pub(crate) struct StubFetch {
    routes: Vec<(String, HttpResponse)>,
    calls: Mutex<Vec<String>>,
}

impl StubFetch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, pattern: &str, status: u16, body: &str) -> Self {
        self.routes
            .push((pattern.to_string(), HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for StubFetch {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());

        self.routes
            .iter()
            .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .ok_or_else(|| LookupFailure::Network("connection refused".to_string()))
    }
}
