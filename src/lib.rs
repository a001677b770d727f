//! menu-server — three-level Menu → Submenu → Dish CRUD API over PostgreSQL
//!
//! JSON/HTTP surface under `/api/v1`: scoped hierarchical lookups,
//! computed aggregate counts, partial PATCH updates, FK cascade deletes.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
