use super::types::{ErrorResponse, SummaryRequest, SummaryResponse};
use crate::{Error, summary::Summarizer};
use axum::{
    extract::{
        State,
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const NO_TEXT_MESSAGE: &str = "No text provided.";
pub const MISSING_API_KEY_MESSAGE: &str = "OPENAI_API_KEY not set on the server.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error from OpenAI API.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "No summary returned from OpenAI.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";
pub const PDF_NOT_IMPLEMENTED_MESSAGE: &str =
    "PDF summarization not implemented yet. Please paste the permit text into /summarize-text for now.";

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

pub async fn health() -> &'static str {
    "AiPermit backend is running."
}

pub async fn summarize_text(
    State(state): State<AppState>,
    body: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    let text = match body {
        Ok(Json(request)) => request.text,
        Err(rejection) => {
            warn!("Request {} has an unreadable body: {}", request_id, rejection);
            None
        }
    };

    info!(
        "Received summarize request {} ({} chars)",
        request_id,
        text.as_deref().map_or(0, |t| t.chars().count())
    );

    match state.summarizer.summarize(text.as_deref()).await {
        Ok(summary) => {
            info!("Successfully summarized request {}", request_id);
            Ok(Json(SummaryResponse { summary }))
        }
        Err(e) => {
            match &e {
                Error::InvalidInput(_) => warn!("Rejected request {}: {}", request_id, e),
                _ => error!("Failed to summarize request {}: {}", request_id, e),
            }
            Err(error_response(e))
        }
    }
}

pub async fn summarize_pdf(
    upload: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<ErrorResponse>) {
    info!(
        "Received PDF upload (multipart: {}); PDF summarization is not available",
        upload.is_ok()
    );

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ErrorResponse::new(PDF_NOT_IMPLEMENTED_MESSAGE)),
    )
}

/// Maps a summarization failure to the client-facing response.
///
/// Only upstream rejections carry details; everything else stays in the logs.
pub fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        Error::InvalidInput(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(NO_TEXT_MESSAGE)),
        ),
        Error::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(MISSING_API_KEY_MESSAGE)),
        ),
        Error::Upstream { body, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(UPSTREAM_ERROR_MESSAGE).with_details(body)),
        ),
        Error::EmptySummary => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(EMPTY_SUMMARY_MESSAGE)),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
        ),
    }
}
