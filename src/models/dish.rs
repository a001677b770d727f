//! Dish Model

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Dish entity
///
/// Price is stored as NUMERIC(10,2) and always rendered as a string with
/// exactly two decimal places, see [`format_price`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: Uuid,
    /// Owning submenu, fixed at creation
    pub submenu_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: String,
}

/// Create dish payload — price is accepted as a JSON number
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DishCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = price_non_negative))]
    pub price: Decimal,
}

/// Update dish payload — absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DishUpdate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = price_non_negative))]
    pub price: Option<Decimal>,
}

fn price_non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("price");
        err.message = Some("price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Canonical price rendering: round to two decimal places (midpoint away
/// from zero) and format with a fixed two-digit fraction.
pub fn format_price(price: Decimal) -> String {
    format!(
        "{:.2}",
        price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
