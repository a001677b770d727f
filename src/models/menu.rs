//! Menu Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu entity with read-time aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Count of child submenus, computed fresh per read
    pub submenus_count: i64,
    /// Count of all dishes transitively under this menu
    pub dishes_count: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Update menu payload — absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
}
