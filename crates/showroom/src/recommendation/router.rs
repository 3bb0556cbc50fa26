use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::preferences::PreferencePayload;
use super::ranking::{CatalogEntryView, Recommendation};
use super::RecommendationEngine;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    /// Set when nothing could be scored and the fixed suggestion was substituted.
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub vehicles: Vec<CatalogEntryView>,
}

/// Router builder exposing the catalog and recommendation endpoints.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    payload: Result<Json<PreferencePayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match engine.recommend(&payload) {
        Ok(recommendations) if recommendations.is_empty() => {
            let body = RecommendationResponse {
                recommendations: vec![Recommendation::fallback()],
                fallback: true,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(recommendations) => {
            let body = RecommendationResponse {
                recommendations,
                fallback: false,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => bad_request(error.to_string()),
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        vehicles: engine.catalog_listing(),
    })
}
