//! Submenu Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Submenu entity with read-time aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submenu {
    pub id: Uuid,
    /// Owning menu, fixed at creation
    pub menu_id: Uuid,
    pub title: String,
    pub description: String,
    /// Count of child dishes, computed fresh per read
    pub dishes_count: i64,
}

/// Create submenu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmenuCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Update submenu payload — absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmenuUpdate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
}
