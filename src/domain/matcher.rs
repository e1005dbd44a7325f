use crate::domain::models::SearchResponse;
use anyhow::Result;
use async_trait::async_trait;

/// Seam to the remote semantic matcher.
///
/// The matching algorithm itself is opaque to the app: one query string in,
/// one categorized response out. Any transport or decoding failure surfaces
/// as an error; the caller converts it into a notification, never a crash.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatcherFacade: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}
