use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::{ChatRequest, ChatResponse, SearchRequest, SearchResponse};

/// Endpoint paths for the query backend
///
/// Paths are relative so requests stay on the page origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub search_path: String,
    pub chat_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            search_path: "/search".to_string(),
            chat_path: "/chat".to_string(),
        }
    }
}

/// A failed backend call
///
/// Status codes are not inspected; the only distinction is whether a body
/// arrived at all. Both variants end up rendered the same way, as
/// `Error: <message>` in the display region that triggered the call.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The query backend, reachable over HTTP on the page origin
///
/// Futures are `?Send` since everything runs on the single-threaded browser
/// event loop.
#[async_trait(?Send)]
pub trait QueryService {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, QueryError>;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, QueryError>;
}
