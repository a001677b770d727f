//! Database access layer
//!
//! Scoped lookups are single composed queries: every ancestor id on the
//! request path must match in the same statement, never a separate
//! existence probe per level.

pub mod dish;
pub mod menu;
pub mod submenu;

pub use dish::*;
pub use menu::*;
pub use submenu::*;
