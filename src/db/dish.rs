//! Dish database operations
//!
//! Dishes resolve through the full three-level join: the dish id, its
//! submenu, and that submenu's menu must all match the request path.

use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Dish, DishCreate, DishUpdate, format_price};

type DishRow = (Uuid, Uuid, String, String, Decimal);

fn into_dish((id, submenu_id, title, description, price): DishRow) -> Dish {
    Dish {
        id,
        submenu_id,
        title,
        description,
        price: format_price(price),
    }
}

/// Round to two decimal places, midpoint away from zero, before storing.
fn canonical(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub async fn list_dishes(
    pool: &PgPool,
    menu_id: Uuid,
    submenu_id: Uuid,
    skip: i64,
    limit: i64,
) -> sqlx::Result<Vec<Dish>> {
    let rows: Vec<DishRow> = sqlx::query_as(
        r#"
        SELECT d.id, d.submenu_id, d.title, d.description, d.price
        FROM dishes d
        JOIN submenus s ON d.submenu_id = s.id
        WHERE s.id = $2 AND s.menu_id = $1
        OFFSET $3 LIMIT $4
        "#,
    )
    .bind(menu_id)
    .bind(submenu_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(into_dish).collect())
}

pub async fn get_dish(
    pool: &PgPool,
    menu_id: Uuid,
    submenu_id: Uuid,
    id: Uuid,
) -> sqlx::Result<Option<Dish>> {
    let row: Option<DishRow> = sqlx::query_as(
        r#"
        SELECT d.id, d.submenu_id, d.title, d.description, d.price
        FROM dishes d
        JOIN submenus s ON d.submenu_id = s.id
        WHERE d.id = $3 AND s.id = $2 AND s.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .bind(submenu_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_dish))
}

/// Insert a dish under an existing submenu of the given menu. The ancestor
/// path is resolved in the same statement; returns None when it does not.
pub async fn create_dish(
    pool: &PgPool,
    menu_id: Uuid,
    submenu_id: Uuid,
    data: &DishCreate,
) -> sqlx::Result<Option<Dish>> {
    let row: Option<DishRow> = sqlx::query_as(
        r#"
        INSERT INTO dishes (id, submenu_id, title, description, price)
        SELECT $1, s.id, $4, $5, $6 FROM submenus s
        WHERE s.id = $3 AND s.menu_id = $2
        RETURNING id, submenu_id, title, description, price
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(menu_id)
    .bind(submenu_id)
    .bind(&data.title)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(canonical(data.price))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_dish))
}

pub async fn update_dish(
    pool: &PgPool,
    menu_id: Uuid,
    submenu_id: Uuid,
    id: Uuid,
    data: &DishUpdate,
) -> sqlx::Result<Option<Dish>> {
    let row: Option<DishRow> = sqlx::query_as(
        r#"
        UPDATE dishes AS d SET
            title = COALESCE($4, d.title),
            description = COALESCE($5, d.description),
            price = COALESCE($6, d.price)
        FROM submenus s
        WHERE d.id = $3 AND d.submenu_id = s.id AND s.id = $2 AND s.menu_id = $1
        RETURNING d.id, d.submenu_id, d.title, d.description, d.price
        "#,
    )
    .bind(menu_id)
    .bind(submenu_id)
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price.map(canonical))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_dish))
}

/// Delete a dish scoped by its full ancestor path.
/// Returns false if the scoped lookup did not resolve.
pub async fn delete_dish(
    pool: &PgPool,
    menu_id: Uuid,
    submenu_id: Uuid,
    id: Uuid,
) -> sqlx::Result<bool> {
    let rows = sqlx::query(
        r#"
        DELETE FROM dishes AS d
        USING submenus s
        WHERE d.id = $3 AND d.submenu_id = s.id AND s.id = $2 AND s.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .bind(submenu_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
