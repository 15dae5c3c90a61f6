//! Text chat: `POST /api/chat` with `{ "message": "..." }`, or the same field
//! as an `application/x-www-form-urlencoded` body.

use axum::extract::{FromRequest, Request, State};
use axum::http::header;
use axum::{Form, Json};
use farmbot_core::Category;

use super::MatchEnvelope;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

impl ChatRequest {
    /// Form bodies go through `Form`; everything else must be JSON.
    async fn extract(request: Request) -> Result<Self, ApiError> {
        let is_form = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| {
                ct.to_ascii_lowercase()
                    .starts_with("application/x-www-form-urlencoded")
            });

        if is_form {
            let Form(req) = Form::<Self>::from_request(request, &())
                .await
                .map_err(|rejection| {
                    tracing::debug!(target: "farmbot::gateway", error = %rejection, "Chat form rejected");
                    ApiError::bad_request(rejection.body_text())
                })?;
            Ok(req)
        } else {
            let Json(req) = Json::<Self>::from_request(request, &())
                .await
                .map_err(|rejection| {
                    tracing::debug!(target: "farmbot::gateway", error = %rejection, "Chat body rejected");
                    ApiError::bad_request(rejection.body_text())
                })?;
            Ok(req)
        }
    }
}

pub(crate) async fn chat(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<MatchEnvelope>, ApiError> {
    let req = ChatRequest::extract(request).await?;

    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Message is required"))?;

    tracing::info!(
        target: "farmbot::gateway",
        chars = message.chars().count(),
        "Chat request received"
    );
    let found = state.matcher.match_input(&message, Category::Text);
    tracing::debug!(target: "farmbot::matcher", stage = ?found.stage, "Text matched");

    Ok(Json(MatchEnvelope::new(Category::Text, found.response, None)))
}
