use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use keyword_store::StoreError;
use trends_client::{explore_link, ComparisonRequest, TimeWindow};

use super::error_response;
use crate::AppState;

#[derive(Deserialize)]
pub struct KeywordsQuery {
    search: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateKeywordRequest {
    keyword: String,
}

#[derive(Deserialize)]
pub struct ExploreLinkQuery {
    period: Option<String>,
}

fn outcome(status: StatusCode, success: bool, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "success": success, "message": message.into() })),
    )
        .into_response()
}

pub async fn api_keywords(
    State(state): State<Arc<AppState>>,
    Query(params): Query<KeywordsQuery>,
) -> Response {
    let term = params.search.unwrap_or_default();
    match state.keywords.search(&term).await {
        Ok(keywords) => Json(keywords).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to load keywords");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load keywords")
        }
    }
}

pub async fn api_create_keyword(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateKeywordRequest>,
) -> Response {
    match state.keywords.create(&body.keyword).await {
        Ok(keyword) => {
            info!(id = %keyword.id, keyword = %keyword.keyword, "Keyword added");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "success": true,
                    "message": "saved",
                    "keyword": keyword,
                })),
            )
                .into_response()
        }
        Err(StoreError::AlreadyExists(_)) => {
            outcome(StatusCode::CONFLICT, false, "Keyword already exists")
        }
        Err(StoreError::Invalid(msg)) => outcome(StatusCode::BAD_REQUEST, false, msg),
        Err(e) => {
            warn!(error = %e, "Failed to save keyword");
            outcome(StatusCode::INTERNAL_SERVER_ERROR, false, "Failed to save keyword")
        }
    }
}

pub async fn api_delete_keyword(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return outcome(StatusCode::NOT_FOUND, false, "Keyword not found");
    };

    match state.keywords.delete(id).await {
        Ok(()) => {
            info!(%id, "Keyword deleted");
            outcome(StatusCode::OK, true, "Deleted")
        }
        Err(StoreError::NotFound(_)) => outcome(StatusCode::NOT_FOUND, false, "Keyword not found"),
        Err(e) => {
            warn!(error = %e, "Failed to delete keyword");
            outcome(StatusCode::INTERNAL_SERVER_ERROR, false, "Failed to delete keyword")
        }
    }
}

/// Deep link to the service's own explore page for a tracked keyword.
pub async fn api_explore_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ExploreLinkQuery>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return error_response(StatusCode::NOT_FOUND, "Keyword not found");
    };
    let Some(period) = params.period else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required parameters");
    };

    let keyword = match state.keywords.get(id).await {
        Ok(k) => k,
        Err(StoreError::NotFound(_)) => {
            return error_response(StatusCode::NOT_FOUND, "Keyword not found")
        }
        Err(e) => {
            warn!(error = %e, "Failed to load keyword");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load keyword");
        }
    };

    let config = state.trends.config();
    match period
        .parse::<TimeWindow>()
        .and_then(|window| ComparisonRequest::new(&config.baseline_keyword, &keyword.keyword, window))
    {
        Ok(request) => Json(serde_json::json!({ "url": explore_link(config, &request) })).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}
