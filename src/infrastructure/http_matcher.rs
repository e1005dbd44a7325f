use crate::domain::{matcher::MatcherFacade, models::SearchResponse};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Error surface of the corpus-server matcher endpoint. Callers treat every
/// variant the same way (a failed search), but the messages keep transport
/// and server failures distinguishable in the log.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned HTTP {status}: {body}")]
    Server { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// `MatcherFacade` implementation against the corpus server's
/// `POST /api/search` endpoint.
pub struct HttpMatcher {
    client: Client,
    endpoint: String,
}

impl HttpMatcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, MatcherError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/api/search", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl MatcherFacade for HttpMatcher {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let response = self
            .client
            .post(self.search_url())
            .json(&SearchRequest { query })
            .send()
            .await
            .map_err(MatcherError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatcherError::Server {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let decoded: SearchResponse = response.json().await.map_err(MatcherError::Http)?;
        Ok(decoded)
    }
}
