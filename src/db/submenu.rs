//! Submenu database operations
//!
//! Every operation is scoped by the owning menu id; a submenu reached
//! through the wrong menu resolves to nothing.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Submenu, SubmenuCreate, SubmenuUpdate};

type SubmenuRow = (Uuid, Uuid, String, String, i64);

fn into_submenu((id, menu_id, title, description, dishes_count): SubmenuRow) -> Submenu {
    Submenu {
        id,
        menu_id,
        title,
        description,
        dishes_count,
    }
}

pub async fn list_submenus(pool: &PgPool, menu_id: Uuid) -> sqlx::Result<Vec<Submenu>> {
    let rows: Vec<SubmenuRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.menu_id, s.title, s.description,
               (SELECT COUNT(*) FROM dishes d WHERE d.submenu_id = s.id)
        FROM submenus s
        WHERE s.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(into_submenu).collect())
}

pub async fn get_submenu(
    pool: &PgPool,
    menu_id: Uuid,
    id: Uuid,
) -> sqlx::Result<Option<Submenu>> {
    let row: Option<SubmenuRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.menu_id, s.title, s.description,
               (SELECT COUNT(*) FROM dishes d WHERE d.submenu_id = s.id)
        FROM submenus s
        WHERE s.id = $2 AND s.menu_id = $1
        "#,
    )
    .bind(menu_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_submenu))
}

/// Insert a submenu under an existing menu. The parent is resolved in the
/// same statement; returns None when the menu does not exist.
pub async fn create_submenu(
    pool: &PgPool,
    menu_id: Uuid,
    data: &SubmenuCreate,
) -> sqlx::Result<Option<Submenu>> {
    let row: Option<(Uuid, Uuid, String, String)> = sqlx::query_as(
        r#"
        INSERT INTO submenus (id, menu_id, title, description)
        SELECT $1, m.id, $3, $4 FROM menus m WHERE m.id = $2
        RETURNING id, menu_id, title, description
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(menu_id)
    .bind(&data.title)
    .bind(data.description.as_deref().unwrap_or(""))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id, menu_id, title, description)| Submenu {
        id,
        menu_id,
        title,
        description,
        dishes_count: 0,
    }))
}

pub async fn update_submenu(
    pool: &PgPool,
    menu_id: Uuid,
    id: Uuid,
    data: &SubmenuUpdate,
) -> sqlx::Result<Option<Submenu>> {
    let row: Option<SubmenuRow> = sqlx::query_as(
        r#"
        UPDATE submenus SET
            title = COALESCE($3, title),
            description = COALESCE($4, description)
        WHERE id = $2 AND menu_id = $1
        RETURNING id, menu_id, title, description,
            (SELECT COUNT(*) FROM dishes d WHERE d.submenu_id = submenus.id)
        "#,
    )
    .bind(menu_id)
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(into_submenu))
}

/// Delete a submenu scoped by its menu; dishes go with it via FK cascade.
/// Returns false if the scoped lookup did not resolve.
pub async fn delete_submenu(pool: &PgPool, menu_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
    let rows = sqlx::query("DELETE FROM submenus WHERE id = $2 AND menu_id = $1")
        .bind(menu_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
