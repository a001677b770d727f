//! Hierarchy tests against a live PostgreSQL database.
//!
//! `#[sqlx::test]` provisions an isolated database per test from
//! `DATABASE_URL` and applies `migrations/` before the body runs, so each
//! test drives the full router over a real store.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use menu_server::api;
use menu_server::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

fn router(pool: PgPool) -> Router {
    api::create_router(AppState { pool })
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("entity id").to_string()
}

#[sqlx::test]
async fn created_menu_reads_back_with_zero_counts(pool: PgPool) {
    let app = router(pool);

    let (status, menu) = send(
        &app,
        "POST",
        "/api/v1/menus",
        Some(json!({"title": "M1", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let menu_id = id_of(&menu);

    let (status, menu) = send(&app, "GET", &format!("/api/v1/menus/{menu_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu["title"], "M1");
    assert_eq!(menu["description"], "d");
    assert_eq!(menu["submenus_count"], 0);
    assert_eq!(menu["dishes_count"], 0);
}

#[sqlx::test]
async fn counts_follow_nested_creates_and_deletes(pool: PgPool) {
    let app = router(pool);

    let (_, menu) = send(
        &app,
        "POST",
        "/api/v1/menus",
        Some(json!({"title": "M1", "description": "d"})),
    )
    .await;
    let menu_id = id_of(&menu);

    let (status, submenu) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus"),
        Some(json!({"title": "S1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let submenu_id = id_of(&submenu);

    let (status, dish) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes"),
        Some(json!({"title": "D1", "price": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let dish_id = id_of(&dish);

    let (status, menu) = send(&app, "GET", &format!("/api/v1/menus/{menu_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu["submenus_count"], 1);
    assert_eq!(menu["dishes_count"], 1);

    let (status, submenu) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submenu["dishes_count"], 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "dish not found");

    let (_, menu) = send(&app, "GET", &format!("/api/v1/menus/{menu_id}"), None).await;
    assert_eq!(menu["submenus_count"], 0);
    assert_eq!(menu["dishes_count"], 0);
}

#[sqlx::test]
async fn wrong_parent_menu_hides_descendants(pool: PgPool) {
    let app = router(pool);

    let (_, menu_a) = send(&app, "POST", "/api/v1/menus", Some(json!({"title": "A"}))).await;
    let (_, menu_b) = send(&app, "POST", "/api/v1/menus", Some(json!({"title": "B"}))).await;
    let menu_a = id_of(&menu_a);
    let menu_b = id_of(&menu_b);

    let (_, submenu) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_a}/submenus"),
        Some(json!({"title": "S"})),
    )
    .await;
    let submenu_id = id_of(&submenu);

    let (_, dish) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_a}/submenus/{submenu_id}/dishes"),
        Some(json!({"title": "D", "price": 1})),
    )
    .await;
    let dish_id = id_of(&dish);

    // Real submenu, wrong parent menu in the path.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_b}/submenus/{submenu_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "submenu not found");

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_b}/submenus/{submenu_id}/dishes/{dish_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "dish not found");

    // Wrong-parent mutations must miss too.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/menus/{menu_b}/submenus/{submenu_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The correct path still resolves.
    let (status, submenu) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_a}/submenus/{submenu_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submenu["menu_id"], menu_a);
}

#[sqlx::test]
async fn deleting_menu_cascades_to_descendants(pool: PgPool) {
    let app = router(pool);

    let (_, menu) = send(&app, "POST", "/api/v1/menus", Some(json!({"title": "M"}))).await;
    let menu_id = id_of(&menu);

    let (_, submenu) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus"),
        Some(json!({"title": "S"})),
    )
    .await;
    let submenu_id = id_of(&submenu);

    let (_, dish) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes"),
        Some(json!({"title": "D", "price": 2.5})),
    )
    .await;
    let dish_id = id_of(&dish);

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/menus/{menu_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Menu deleted successfully");

    for uri in [
        format!("/api/v1/menus/{menu_id}"),
        format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}"),
        format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"),
    ] {
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[sqlx::test]
async fn patch_merges_only_provided_fields(pool: PgPool) {
    let app = router(pool);

    let (_, menu) = send(
        &app,
        "POST",
        "/api/v1/menus",
        Some(json!({"title": "M1", "description": "d1"})),
    )
    .await;
    let menu_id = id_of(&menu);

    // Empty body changes nothing.
    let (status, menu) = send(
        &app,
        "PATCH",
        &format!("/api/v1/menus/{menu_id}"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu["title"], "M1");
    assert_eq!(menu["description"], "d1");

    let (_, menu) = send(
        &app,
        "PATCH",
        &format!("/api/v1/menus/{menu_id}"),
        Some(json!({"description": "d2"})),
    )
    .await;
    assert_eq!(menu["title"], "M1");
    assert_eq!(menu["description"], "d2");

    let (_, menu) = send(
        &app,
        "PATCH",
        &format!("/api/v1/menus/{menu_id}"),
        Some(json!({"title": "M2"})),
    )
    .await;
    assert_eq!(menu["title"], "M2");
    assert_eq!(menu["description"], "d2");
}

#[sqlx::test]
async fn dish_price_renders_with_two_decimals(pool: PgPool) {
    let app = router(pool);

    let (_, menu) = send(&app, "POST", "/api/v1/menus", Some(json!({"title": "M"}))).await;
    let menu_id = id_of(&menu);
    let (_, submenu) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus"),
        Some(json!({"title": "S"})),
    )
    .await;
    let submenu_id = id_of(&submenu);

    let (status, dish) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes"),
        Some(json!({"title": "D", "price": 9.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dish["price"], "9.50");
    let dish_id = id_of(&dish);

    let (_, dish) = send(
        &app,
        "GET",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"),
        None,
    )
    .await;
    assert_eq!(dish["price"], "9.50");

    let (_, dish) = send(
        &app,
        "PATCH",
        &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"),
        Some(json!({"price": 10.125})),
    )
    .await;
    assert_eq!(dish["price"], "10.13");
}

#[sqlx::test]
async fn create_under_missing_ancestor_is_not_found(pool: PgPool) {
    let app = router(pool);

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{missing}/submenus"),
        Some(json!({"title": "S"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "menu not found");

    let (_, menu) = send(&app, "POST", "/api/v1/menus", Some(json!({"title": "M"}))).await;
    let menu_id = id_of(&menu);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/menus/{menu_id}/submenus/{missing}/dishes"),
        Some(json!({"title": "D", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "submenu not found");
}
