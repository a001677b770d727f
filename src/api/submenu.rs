//! Submenu CRUD API handlers
//!
//! Every path carries the owning menu id; the db layer re-verifies it in
//! the same query, so a wrong-parent request is a plain 404.

use axum::Json;
use axum::extract::{Path, State};
use http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use crate::db;
use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{Submenu, SubmenuCreate, SubmenuUpdate};
use crate::state::AppState;

pub async fn list_submenus(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> ApiResult<Vec<Submenu>> {
    let submenus = db::list_submenus(&state.pool, menu_id).await?;
    Ok(Json(submenus))
}

pub async fn create_submenu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(data): Json<SubmenuCreate>,
) -> Result<(StatusCode, Json<Submenu>), ApiError> {
    data.validate()?;
    let submenu = db::create_submenu(&state.pool, menu_id, &data)
        .await?
        .ok_or(ApiError::NotFound(Entity::Menu))?;
    Ok((StatusCode::CREATED, Json(submenu)))
}

pub async fn read_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Submenu> {
    let submenu = db::get_submenu(&state.pool, menu_id, submenu_id)
        .await?
        .ok_or(ApiError::NotFound(Entity::Submenu))?;
    Ok(Json(submenu))
}

pub async fn update_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(data): Json<SubmenuUpdate>,
) -> ApiResult<Submenu> {
    data.validate()?;
    let submenu = db::update_submenu(&state.pool, menu_id, submenu_id, &data)
        .await?
        .ok_or(ApiError::NotFound(Entity::Submenu))?;
    Ok(Json(submenu))
}

pub async fn delete_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<serde_json::Value> {
    if !db::delete_submenu(&state.pool, menu_id, submenu_id).await? {
        return Err(ApiError::NotFound(Entity::Submenu));
    }
    Ok(Json(serde_json::json!({
        "message": "Submenu and all associated dishes deleted successfully"
    })))
}
