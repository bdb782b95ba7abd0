use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::error::{AppError, INVALID_BODY_MSG, MISSING_FIELDS_MSG};
use crate::message::{ChatRequest, ChatResponse};
use crate::services::completion::CompletionClient;
use crate::services::prompt::Prompt;
use crate::state::SharedState;

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // An absent body means the same as the browser sending "{}".
    let payload: ChatRequest = if body.is_empty() {
        ChatRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(error = %err, "rejecting unparseable chat body");
            AppError::BadRequest(INVALID_BODY_MSG.to_string())
        })?
    };

    let Some(prompt) = Prompt::select(&payload) else {
        return Err(AppError::BadRequest(MISSING_FIELDS_MSG.to_string()));
    };
    tracing::debug!(template = prompt.kind(), "dispatching chat completion");

    let client = CompletionClient::new(&state.config)?;
    let reply = client.complete(prompt.into_messages()).await?;

    Ok(Json(ChatResponse { reply }))
}
