//! Menu database operations

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Menu, MenuCreate, MenuUpdate};

type MenuRow = (Uuid, String, String, i64, i64);

fn into_menu((id, title, description, submenus_count, dishes_count): MenuRow) -> Menu {
    Menu {
        id,
        title,
        description,
        submenus_count,
        dishes_count,
    }
}

pub async fn list_menus(pool: &PgPool, skip: i64, limit: i64) -> sqlx::Result<Vec<Menu>> {
    let rows: Vec<MenuRow> = sqlx::query_as(
        r#"
        SELECT m.id, m.title, m.description,
               (SELECT COUNT(*) FROM submenus s WHERE s.menu_id = m.id),
               (SELECT COUNT(*) FROM dishes d
                  JOIN submenus s ON d.submenu_id = s.id
                 WHERE s.menu_id = m.id)
        FROM menus m
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(into_menu).collect())
}

pub async fn get_menu(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<Menu>> {
    let row: Option<MenuRow> = sqlx::query_as(
        r#"
        SELECT m.id, m.title, m.description,
               (SELECT COUNT(*) FROM submenus s WHERE s.menu_id = m.id),
               (SELECT COUNT(*) FROM dishes d
                  JOIN submenus s ON d.submenu_id = s.id
                 WHERE s.menu_id = m.id)
        FROM menus m
        WHERE m.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_menu))
}

pub async fn create_menu(pool: &PgPool, data: &MenuCreate) -> sqlx::Result<Menu> {
    let (id, title, description): (Uuid, String, String) = sqlx::query_as(
        r#"
        INSERT INTO menus (id, title, description)
        VALUES ($1, $2, $3)
        RETURNING id, title, description
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.title)
    .bind(data.description.as_deref().unwrap_or(""))
    .fetch_one(pool)
    .await?;

    // A freshly created menu has no descendants yet.
    Ok(Menu {
        id,
        title,
        description,
        submenus_count: 0,
        dishes_count: 0,
    })
}

pub async fn update_menu(
    pool: &PgPool,
    id: Uuid,
    data: &MenuUpdate,
) -> sqlx::Result<Option<Menu>> {
    let row: Option<MenuRow> = sqlx::query_as(
        r#"
        UPDATE menus SET
            title = COALESCE($2, title),
            description = COALESCE($3, description)
        WHERE id = $1
        RETURNING id, title, description,
            (SELECT COUNT(*) FROM submenus s WHERE s.menu_id = menus.id),
            (SELECT COUNT(*) FROM dishes d
               JOIN submenus s ON d.submenu_id = s.id
              WHERE s.menu_id = menus.id)
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_menu))
}

/// Delete a menu; descendants go with it via FK cascade.
/// Returns false if the menu did not exist.
pub async fn delete_menu(pool: &PgPool, id: Uuid) -> sqlx::Result<bool> {
    let rows = sqlx::query("DELETE FROM menus WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
