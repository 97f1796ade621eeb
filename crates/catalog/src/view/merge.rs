//! Cart/catalog reconciliation.
//!
//! [`merge_cart`] is a pure function over the fetched catalog and a user's
//! cart - no hidden state, callable directly in tests without any rendering
//! surface.

use serde::Serialize;

use petalcart_core::CartLineId;

use crate::store::types::{CartLine, Flower};

/// A flower annotated with the visitor's cart state.
///
/// Recomputed whenever the catalog or the cart changes; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// The catalog flower, unmodified.
    #[serde(flatten)]
    pub flower: Flower,
    /// Whether a cart line references this flower.
    #[serde(rename = "isFlowerInCart")]
    pub in_cart: bool,
    /// Quantity in the cart, 0 when not in the cart.
    pub quantity: u32,
    /// The matching cart line ID, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<CartLineId>,
}

impl CatalogItem {
    /// An item with no cart state.
    #[must_use]
    pub const fn not_in_cart(flower: Flower) -> Self {
        Self {
            flower,
            in_cart: false,
            quantity: 0,
            cart_id: None,
        }
    }
}

/// Merge a user's cart into the catalog.
///
/// Every flower becomes one [`CatalogItem`]; a flower whose ID matches a
/// cart line's product reference takes that line's quantity and ID (first
/// match wins), all others are marked not-in-cart with quantity 0.
pub fn merge_cart<'a, I>(flowers: I, cart: &[CartLine]) -> Vec<CatalogItem>
where
    I: IntoIterator<Item = &'a Flower>,
{
    flowers
        .into_iter()
        .map(|flower| {
            cart.iter()
                .find(|line| line.product_id == flower.id)
                .map_or_else(
                    || CatalogItem::not_in_cart(flower.clone()),
                    |line| CatalogItem {
                        flower: flower.clone(),
                        in_cart: true,
                        quantity: line.quantity,
                        cart_id: Some(line.id.clone()),
                    },
                )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use petalcart_core::ProductId;

    use super::*;

    fn flower(id: i32, name: &str, category: &str) -> Flower {
        Flower {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            img_src: format!("/images/{id}.jpg"),
            price: Decimal::from(500),
            discount: Decimal::from(20),
            avg_rating: 4.5,
            rating_count: 1.2,
            category: category.to_string(),
        }
    }

    fn line(id: &str, product: i32, quantity: u32) -> CartLine {
        CartLine {
            id: CartLineId::from(id),
            product_id: ProductId::new(product),
            name: format!("flower {product}"),
            quantity,
            img_src: String::new(),
            price: Decimal::from(500),
            discount: Decimal::from(20),
        }
    }

    #[test]
    fn test_unmatched_flowers_are_not_in_cart() {
        let flowers = vec![flower(1, "Rose", "Roses"), flower(2, "Tulip", "Tulips")];
        let merged = merge_cart(&flowers, &[]);

        assert_eq!(merged.len(), 2);
        for item in &merged {
            assert!(!item.in_cart);
            assert_eq!(item.quantity, 0);
            assert!(item.cart_id.is_none());
        }
    }

    #[test]
    fn test_each_cart_line_matches_exactly_one_item() {
        let flowers = vec![
            flower(1, "Rose", "Roses"),
            flower(2, "Tulip", "Tulips"),
            flower(3, "Lily", "Lilies"),
        ];
        let cart = vec![line("a", 1, 2), line("b", 3, 5)];
        let merged = merge_cart(&flowers, &cart);

        for cart_line in &cart {
            let matches: Vec<_> = merged
                .iter()
                .filter(|item| item.cart_id.as_ref() == Some(&cart_line.id))
                .collect();
            assert_eq!(matches.len(), 1);
            let item = matches.first().unwrap();
            assert!(item.in_cart);
            assert_eq!(item.quantity, cart_line.quantity);
            assert_eq!(item.flower.id, cart_line.product_id);
        }

        let tulip = merged.iter().find(|i| i.flower.name == "Tulip").unwrap();
        assert!(!tulip.in_cart);
    }

    #[test]
    fn test_merge_is_deterministic_on_same_inputs() {
        let flowers = vec![flower(1, "Rose", "Roses")];
        let cart = vec![line("a", 1, 3)];
        assert_eq!(merge_cart(&flowers, &cart), merge_cart(&flowers, &cart));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let flowers = vec![flower(1, "Rose", "Roses")];
        let cart = vec![line("first", 1, 2), line("second", 1, 9)];
        let merged = merge_cart(&flowers, &cart);

        let item = merged.first().unwrap();
        assert_eq!(item.cart_id, Some(CartLineId::from("first")));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_item_serializes_with_original_field_names() {
        let merged = merge_cart(&vec![flower(1, "Rose", "Roses")], &[line("a", 1, 2)]);
        let value = serde_json::to_value(merged.first().unwrap()).unwrap();

        assert_eq!(value["isFlowerInCart"], true);
        assert_eq!(value["cartId"], "a");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["imgSrc"], "/images/1.jpg");
    }
}
