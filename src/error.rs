//! Unified API error type for menu-server
//!
//! `ApiError` bridges DB-layer errors (`sqlx::Error`) and the HTTP surface.
//! It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); ... })` boilerplate in handlers.

use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;

/// Entity kinds addressable through the API, used for scoped not-found
/// messages ("menu not found", "submenu not found", "dish not found").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Menu,
    Submenu,
    Dish,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Menu => write!(f, "menu"),
            Entity::Submenu => write!(f, "submenu"),
            Entity::Dish => write!(f, "dish"),
        }
    }
}

/// API error — three variants, keeps things simple.
///
/// - `NotFound`: the entity (or an ancestor on its path) did not resolve
/// - `Validation`: request body failed contract validation
/// - `Db`: database/infrastructure error (auto-logged, mapped to 500)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Db(e) => {
                tracing::error!(error = %e, "Database error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// Convenience alias for JSON handler results
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_per_entity() {
        assert_eq!(ApiError::NotFound(Entity::Menu).to_string(), "menu not found");
        assert_eq!(
            ApiError::NotFound(Entity::Submenu).to_string(),
            "submenu not found"
        );
        assert_eq!(ApiError::NotFound(Entity::Dish).to_string(), "dish not found");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound(Entity::Menu).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("title must not be empty".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Db(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_error_detail_is_opaque() {
        let resp = ApiError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
