use askpane_core::{
    ChatRequest, ChatResponse, QueryError, QueryService, SearchRequest, SearchResponse,
    ServiceConfig,
};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Query backend reached over `fetch` on the page origin
///
/// Posts JSON and reads JSON back. No retry, no timeout, no cancellation;
/// status codes are not inspected, so any transport or parse failure lands
/// in the same error path.
pub struct HttpQueryService {
    config: ServiceConfig,
}

impl HttpQueryService {
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Default for HttpQueryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl QueryService for HttpQueryService {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, QueryError> {
        post_json(&self.config.search_path, &request).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, QueryError> {
        post_json(&self.config.chat_path, &request).await
    }
}

async fn post_json<B, R>(path: &str, body: &B) -> Result<R, QueryError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = Request::post(path)
        .json(body)
        .map_err(|e| QueryError::Transport(format!("{:?}", e)))?
        .send()
        .await
        .map_err(|e| QueryError::Transport(format!("{:?}", e)))?;

    response
        .json::<R>()
        .await
        .map_err(|e| QueryError::Decode(format!("{:?}", e)))
}
