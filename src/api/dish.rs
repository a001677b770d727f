//! Dish CRUD API handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use super::ListParams;
use crate::db;
use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{Dish, DishCreate, DishUpdate};
use crate::state::AppState;

pub async fn list_dishes(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Dish>> {
    let dishes =
        db::list_dishes(&state.pool, menu_id, submenu_id, params.skip, params.limit).await?;
    Ok(Json(dishes))
}

pub async fn create_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(data): Json<DishCreate>,
) -> Result<(StatusCode, Json<Dish>), ApiError> {
    data.validate()?;
    let dish = db::create_dish(&state.pool, menu_id, submenu_id, &data)
        .await?
        .ok_or(ApiError::NotFound(Entity::Submenu))?;
    Ok((StatusCode::CREATED, Json(dish)))
}

pub async fn read_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Dish> {
    let dish = db::get_dish(&state.pool, menu_id, submenu_id, dish_id)
        .await?
        .ok_or(ApiError::NotFound(Entity::Dish))?;
    Ok(Json(dish))
}

pub async fn update_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(data): Json<DishUpdate>,
) -> ApiResult<Dish> {
    data.validate()?;
    let dish = db::update_dish(&state.pool, menu_id, submenu_id, dish_id, &data)
        .await?
        .ok_or(ApiError::NotFound(Entity::Dish))?;
    Ok(Json(dish))
}

pub async fn delete_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<serde_json::Value> {
    if !db::delete_dish(&state.pool, menu_id, submenu_id, dish_id).await? {
        return Err(ApiError::NotFound(Entity::Dish));
    }
    Ok(Json(serde_json::json!({
        "message": "Dish deleted successfully"
    })))
}
