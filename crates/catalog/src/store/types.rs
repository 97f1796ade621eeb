//! Wire types for the remote store.
//!
//! Field names follow the store's camelCase JSON (`imgSrc`, `avgRating`,
//! `productId`). Prices and discounts are plain JSON numbers, so the
//! `Decimal` fields go through `rust_decimal::serde::float`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use petalcart_core::{CartLineId, ProductId, discounted_price};

/// A flower in the catalog.
///
/// Immutable as sourced from the store; cart-derived state lives on the
/// view item, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flower {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Image reference.
    #[serde(default)]
    pub img_src: String,
    /// Unit price in whole currency units.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Discount percentage (0-100).
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Average review rating (e.g., 4.5).
    #[serde(default)]
    pub avg_rating: f64,
    /// Review count in thousands, as the store records it (e.g., 1.2).
    #[serde(default)]
    pub rating_count: f64,
    /// Category name (e.g., "Roses").
    #[serde(default)]
    pub category: String,
}

impl Flower {
    /// Discounted price for display, rounded to the nearest whole unit.
    ///
    /// The stored `price` and `discount` are left untouched.
    #[must_use]
    pub fn display_price(&self) -> Decimal {
        discounted_price(self.price, self.discount)
    }
}

/// One entry in a user's cart.
///
/// Carries denormalized copies of the flower's display fields taken at the
/// time of adding, so the cart renders without refetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Client-generated line ID.
    pub id: CartLineId,
    /// The flower this line refers to.
    pub product_id: ProductId,
    /// Flower name at time of adding.
    pub name: String,
    /// Quantity, always >= 1.
    pub quantity: u32,
    /// Image reference at time of adding.
    #[serde(default)]
    pub img_src: String,
    /// Unit price at time of adding.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Discount percentage at time of adding.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// PATCH body replacing a user's cart wholesale.
#[derive(Debug, Serialize)]
pub(crate) struct CartPatch<'a> {
    pub cart: &'a [CartLine],
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rose() -> Flower {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Red Rose Bouquet",
            "description": "A dozen long-stemmed red roses",
            "imgSrc": "/images/red-rose.jpg",
            "price": 500,
            "discount": 20,
            "avgRating": 4.5,
            "ratingCount": 1.2,
            "category": "Roses"
        }))
        .unwrap()
    }

    #[test]
    fn test_flower_parses_store_json() {
        let flower = rose();
        assert_eq!(flower.id, ProductId::new(1));
        assert_eq!(flower.price, Decimal::from(500));
        assert_eq!(flower.category, "Roses");
    }

    #[test]
    fn test_display_price_leaves_fields_untouched() {
        let flower = rose();
        assert_eq!(flower.display_price(), Decimal::from(400));
        assert_eq!(flower.price, Decimal::from(500));
        assert_eq!(flower.discount, Decimal::from(20));
    }

    #[test]
    fn test_cart_line_serializes_camel_case_numbers() {
        let line = CartLine {
            id: CartLineId::from("line-1"),
            product_id: ProductId::new(1),
            name: "Red Rose Bouquet".to_string(),
            quantity: 2,
            img_src: "/images/red-rose.jpg".to_string(),
            price: Decimal::from(500),
            discount: Decimal::from(20),
        };

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["productId"], 1);
        assert_eq!(value["imgSrc"], "/images/red-rose.jpg");
        assert_eq!(value["price"], 500.0);
        assert_eq!(value["quantity"], 2);
    }
}
