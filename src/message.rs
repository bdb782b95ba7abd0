// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`. Nothing is guaranteed present; the handler decides
/// validity from which fields are usable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub city: Option<String>,
    pub num_days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
