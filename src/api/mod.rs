//! API routes for menu-server

pub mod dish;
pub mod health;
pub mod menu;
pub mod submenu;

use axum::Router;
use axum::routing::get;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Offset/limit query parameters for list endpoints.
/// Defaults 0/100, passed through to the store unvalidated.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/menus", get(menu::list_menus).post(menu::create_menu))
        .route(
            "/menus/{menu_id}",
            get(menu::read_menu)
                .patch(menu::update_menu)
                .delete(menu::delete_menu),
        )
        .route(
            "/menus/{menu_id}/submenus",
            get(submenu::list_submenus).post(submenu::create_submenu),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}",
            get(submenu::read_submenu)
                .patch(submenu::update_submenu)
                .delete(submenu::delete_submenu),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes",
            get(dish::list_dishes).post(dish::create_dish),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
            get(dish::read_dish)
                .patch(dish::update_dish)
                .delete(dish::delete_dish),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
