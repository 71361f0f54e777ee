//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tracing::warn;

use crate::domain::{Postcode, SearchAction};
use crate::search::{SearchCourtService, SearchError, SearchQuery};

use super::dto::*;
use super::state::AppState;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search/courts/postcode", get(search_courts_by_postcode))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for the courts serving a postcode.
async fn search_courts_by_postcode(
    State(state): State<AppState>,
    Query(params): Query<CourtSearchParams>,
) -> Result<Json<Vec<CourtResult>>, AppError> {
    let query = build_query(params)?;

    let service = SearchCourtService::new(state.resolver.as_ref(), state.directory.as_ref());
    let courts = service.search(&query).await.map_err(AppError::from)?;

    Ok(Json(courts.iter().map(CourtResult::from_court).collect()))
}

/// Validate the raw query parameters into a search query.
fn build_query(params: CourtSearchParams) -> Result<SearchQuery, AppError> {
    let raw_postcode = params.postcode.as_deref().map(str::trim).unwrap_or("");
    if raw_postcode.is_empty() {
        return Err(AppError::BadRequest {
            message: "Postcode is required".to_string(),
        });
    }
    let postcode = Postcode::parse(raw_postcode).map_err(|e| AppError::BadRequest {
        message: format!("Invalid postcode: {} ({})", raw_postcode, e.reason()),
    })?;

    let action = params
        .action
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SearchAction::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::BadRequest {
            message: format!("limit must be between 1 and {MAX_LIMIT}"),
        });
    }

    Ok(SearchQuery::new(
        postcode,
        params.service_area,
        action,
        limit,
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidParameterCombination | SearchError::PostcodeNotFound(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            SearchError::ServiceAreaNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::ResolverUnavailable(_) => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse {
            message,
            timestamp: Utc::now().to_rfc3339(),
        });
        (status, body).into_response()
    }
}
