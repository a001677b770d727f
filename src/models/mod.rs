//! Request/response contracts for the menu hierarchy

pub mod dish;
pub mod menu;
pub mod submenu;

pub use dish::*;
pub use menu::*;
pub use submenu::*;
