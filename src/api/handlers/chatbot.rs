use crate::{
    AppState,
    types::{AppError, ChatbotReply, Result},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// Standing instructions sent with every customer message. The assistant
/// stays inside store scope and never plays doctor.
pub const SYSTEM_PROMPT: &str = "You are the ApotheCare pharmacist assistant, the helpful chat \
    widget of an online pharmacy. Answer questions about orders, shipping, product availability, \
    and general over-the-counter product information. Do not diagnose conditions or recommend \
    prescription medication; for anything medical, suggest speaking to a licensed pharmacist or \
    doctor. Keep replies short and friendly.";

/// Served when no completion API credential is configured. Soft-fails the
/// request with HTTP 200 so the storefront widget stays functional.
pub const NOT_CONFIGURED_REPLY: &str = "The pharmacist assistant is not configured yet. Please \
    contact us directly and a member of our team will help you.";

/// Served when the upstream answers with empty content.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm sorry, I don't have an answer for that. Could you rephrase your question?";

/// Chat with the pharmacist assistant
#[utoipa::path(
    post,
    path = "/api/chatbot",
    request_body = crate::types::ChatbotRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatbotReply),
        (status = 400, description = "Missing or blank message"),
        (status = 500, description = "Completion API failure")
    ),
    tag = "chatbot"
)]
pub async fn chatbot(
    State(state): State<AppState>,
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ChatbotReply>> {
    let Json(payload) =
        payload.map_err(|e| AppError::InvalidInput(format!("Invalid JSON body: {}", e)))?;

    let message = payload
        .get("message")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::InvalidInput("message is required".to_string()))?;

    let Some(client) = &state.completions else {
        tracing::warn!("chatbot request answered with fallback: no completion credential");
        return Ok(Json(ChatbotReply {
            reply: NOT_CONFIGURED_REPLY.to_string(),
        }));
    };

    tracing::debug!(model = client.model_name(), "forwarding chatbot message");
    let reply = client.complete(SYSTEM_PROMPT, message).await?;

    let reply = if reply.trim().is_empty() {
        EMPTY_REPLY_FALLBACK.to_string()
    } else {
        reply
    };

    Ok(Json(ChatbotReply { reply }))
}
