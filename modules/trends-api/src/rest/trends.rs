use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use trends_client::{ComparisonRequest, TimeWindow};

use super::error_response;
use crate::AppState;

#[derive(Deserialize)]
pub struct TrendQuery {
    keyword: Option<String>,
    period: Option<String>,
}

pub async fn api_trends_proxy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendQuery>,
) -> Response {
    let (Some(keyword), Some(period)) = (non_blank(params.keyword), non_blank(params.period))
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required parameters");
    };

    let request = match period
        .parse::<TimeWindow>()
        .and_then(|window| {
            ComparisonRequest::new(&state.trends.config().baseline_keyword, &keyword, window)
        }) {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.trends.get_trend(&request).await {
        Ok(series) => (
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::CACHE_CONTROL, "public, s-maxage=600"),
            ],
            Json(series),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, keyword = %keyword, period = %period, "Trend lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(serde_json::json!({
                    "error": "Failed to fetch data",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;
    use trends_client::{MockTransport, TrendsError};

    use crate::rest::test_support::*;

    const EXPLORE_BODY: &str = ")]}',\n{\"widgets\":[{\"token\":\"T1\",\"request\":{\"x\":1}}]}";

    #[tokio::test]
    async fn missing_keyword_is_client_error() {
        let mock = Arc::new(MockTransport::new());
        let response = send(state_with(mock.clone()), get("/api/trends-proxy?period=7d")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_period_is_client_error() {
        let mock = Arc::new(MockTransport::new());
        let response = send(state_with(mock.clone()), get("/api/trends-proxy?keyword=chatgpt")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_period_is_client_error() {
        let mock = Arc::new(MockTransport::new());
        let response = send(
            state_with(mock.clone()),
            get("/api/trends-proxy?keyword=chatgpt&period=2w"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn success_returns_series_with_cache_headers() {
        let mock = Arc::new(MockTransport::with_bodies([
            EXPLORE_BODY,
            ")]}',\n{\"default\":{\"timelineData\":[]}}",
        ]));
        let response = send(
            state_with(mock.clone()),
            get("/api/trends-proxy?keyword=chatgpt&period=7d"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["cache-control"], "public, s-maxage=600");
        assert_eq!(
            json_body(response).await,
            json!({"default": {"timelineData": []}})
        );

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        let req: serde_json::Value = serde_json::from_str(calls[0].param("req").unwrap()).unwrap();
        assert_eq!(req["comparisonItem"][0]["keyword"], "gpts");
        assert_eq!(req["comparisonItem"][1]["keyword"], "chatgpt");
    }

    #[tokio::test]
    async fn core_failure_is_server_error_without_partial_data() {
        let mock = Arc::new(MockTransport::new());
        mock.push_error(TrendsError::Transport("connection reset".to_string()));
        let response = send(
            state_with(mock.clone()),
            get("/api/trends-proxy?keyword=chatgpt&period=1m"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({
                "error": "Failed to fetch data",
                "details": "Transport error: connection reset",
            })
        );
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn quoted_phrase_from_query_string() {
        let mock = Arc::new(MockTransport::with_bodies([EXPLORE_BODY, "{}"]));
        let response = send(
            state_with(mock.clone()),
            get("/api/trends-proxy?keyword=%22hello%20world%22&period=all"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let req: serde_json::Value =
            serde_json::from_str(mock.calls()[0].param("req").unwrap()).unwrap();
        assert_eq!(req["comparisonItem"][1]["keyword"], "\"hello world\"");
        assert_eq!(req["comparisonItem"][1]["time"], "2004-01-01 2024-12-31");
    }
}
