//! Menu CRUD API handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use super::ListParams;
use crate::db;
use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{Menu, MenuCreate, MenuUpdate};
use crate::state::AppState;

pub async fn list_menus(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Menu>> {
    let menus = db::list_menus(&state.pool, params.skip, params.limit).await?;
    Ok(Json(menus))
}

pub async fn create_menu(
    State(state): State<AppState>,
    Json(data): Json<MenuCreate>,
) -> Result<(StatusCode, Json<Menu>), ApiError> {
    data.validate()?;
    let menu = db::create_menu(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

pub async fn read_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> ApiResult<Menu> {
    let menu = db::get_menu(&state.pool, menu_id)
        .await?
        .ok_or(ApiError::NotFound(Entity::Menu))?;
    Ok(Json(menu))
}

pub async fn update_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(data): Json<MenuUpdate>,
) -> ApiResult<Menu> {
    data.validate()?;
    let menu = db::update_menu(&state.pool, menu_id, &data)
        .await?
        .ok_or(ApiError::NotFound(Entity::Menu))?;
    Ok(Json(menu))
}

pub async fn delete_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    if !db::delete_menu(&state.pool, menu_id).await? {
        return Err(ApiError::NotFound(Entity::Menu));
    }
    Ok(Json(serde_json::json!({
        "message": "Menu deleted successfully"
    })))
}
