use serde::{Deserialize, Serialize};

/// Body of a POST to `/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Body of a successful `/search` reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub response: String,
}

/// Body of a POST to `/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of a successful `/chat` reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
