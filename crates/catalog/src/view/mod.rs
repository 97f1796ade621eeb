//! The catalog view component.
//!
//! Composes three responsibilities sequentially:
//!
//! 1. **Load** - [`CatalogView::mount`] fetches the flower catalog once per
//!    view lifetime.
//! 2. **Reconcile** - [`CatalogView::reconcile`] fetches the authenticated
//!    user's cart and merges it into the catalog via [`merge::merge_cart`].
//!    The shell calls it whenever the user reference changes.
//! 3. **Mutate** - [`CatalogView::add_to_cart`] and
//!    [`CatalogView::adjust_quantity`] compute a full replacement cart,
//!    persist it, and mirror the change locally only after the store
//!    accepted it.
//!
//! Failures are logged and leave all observable state untouched; the only
//! condition surfaced to the caller is [`CartOutcome::LoginRequired`], which
//! the shell turns into its login notice. Overlapping mutations are not
//! serialized against each other - each reads the then-current cart and the
//! later write wins, as the remote store offers no version check.

pub mod merge;

use std::sync::Arc;

use tracing::{error, instrument, warn};

use petalcart_core::{CartLineId, ProductId};

use crate::models::session::keys;
use crate::models::{SessionStore, User, UserHandle};
use crate::store::types::CartLine;
use crate::store::{StoreClient, StoreError};

pub use merge::{CatalogItem, merge_cart};

/// Category filter options offered by the view.
pub const CATEGORIES: [&str; 6] = ["All", "Roses", "Tulips", "Lilies", "Sunflowers", "Orchids"];

/// The category value that disables filtering.
pub const SHOW_ALL: &str = "All";

/// Result of a cart mutation, for the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CartOutcome {
    /// The store accepted the write and local state now mirrors it.
    Saved,
    /// No authenticated user; the shell should show its login notice. No
    /// request was issued.
    LoginRequired,
    /// The operation did not happen; all state is unchanged. Details were
    /// logged.
    Failed,
}

/// Direction of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Add one.
    Increment,
    /// Subtract one, flooring at 1. Quantities never reach zero - there is
    /// no removal path.
    Decrement,
}

impl QuantityChange {
    const fn apply(self, quantity: u32) -> u32 {
        match self {
            Self::Increment => quantity.saturating_add(1),
            Self::Decrement => {
                if quantity > 1 {
                    quantity - 1
                } else {
                    1
                }
            }
        }
    }
}

/// The storefront catalog view.
pub struct CatalogView {
    store: StoreClient,
    session: Arc<dyn SessionStore>,
    user: UserHandle,
    items: Vec<CatalogItem>,
    mounted: bool,
}

impl CatalogView {
    /// Create a view over the given store, session storage, and shared user
    /// handle.
    #[must_use]
    pub fn new(store: StoreClient, session: Arc<dyn SessionStore>, user: UserHandle) -> Self {
        Self {
            store,
            session,
            user,
            items: Vec::new(),
            mounted: false,
        }
    }

    /// The current view items.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items visible under a category filter. [`SHOW_ALL`] yields
    /// everything; any other value yields items whose category matches it.
    pub fn visible<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> {
        self.items
            .iter()
            .filter(move |item| category == SHOW_ALL || item.flower.category == category)
    }

    /// Load the flower catalog.
    ///
    /// Runs exactly once per view lifetime; later calls are no-ops. On
    /// success the items are populated from the returned list unmodified
    /// and, if a user is authenticated, reconciled with their cart. On
    /// failure the error is logged and the item list stays empty.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match self.store.list_flowers().await {
            Ok(flowers) => {
                self.items = flowers.into_iter().map(CatalogItem::not_in_cart).collect();
                if self.user.current().is_some() {
                    self.reconcile().await;
                }
            }
            Err(e) => error!(error = %e, "failed to load flower catalog"),
        }
    }

    /// Merge the authenticated user's persisted cart into the catalog.
    ///
    /// Call whenever the user reference changes. With no user, every item
    /// is marked not-in-cart. With a user, their record is fetched and the
    /// merged list replaces the items only if a derived field actually
    /// changed; the user handle's cart is replaced only if the fetched cart
    /// serializes differently (guards against reconcile feedback loops).
    ///
    /// A 404 on the user fetch means the session is stale: the session
    /// marker is cleared, the user handle is emptied, and the items are
    /// left as previously rendered. Any other failure is logged and aborts
    /// without a partial merge.
    #[instrument(skip(self))]
    pub async fn reconcile(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let Some(user) = self.user.current() else {
            self.clear_cart_state();
            return;
        };

        let fetched = match self.store.get_user(user.id).await {
            Ok(record) => record,
            Err(StoreError::NotFound(_)) => {
                warn!(user_id = %user.id, "user record gone, clearing stale session");
                self.session.remove(keys::CURRENT_USER);
                self.user.replace(None);
                return;
            }
            Err(e) => {
                error!(error = %e, user_id = %user.id, "failed to fetch user cart");
                return;
            }
        };

        let merged = merge_cart(self.items.iter().map(|item| &item.flower), &fetched.cart);
        if merged != self.items {
            self.items = merged;
        }

        if carts_differ(&user.cart, &fetched.cart) {
            self.user.replace(Some(User {
                id: user.id,
                cart: fetched.cart,
            }));
        }
    }

    /// Add a flower to the cart with quantity 1.
    ///
    /// Requires an authenticated user and a flower not already in the cart
    /// (the shell only offers the action in that state). The full updated
    /// cart is persisted first; local state and the user handle are only
    /// touched once the store accepted the write.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(&mut self, product_id: ProductId) -> CartOutcome {
        let Some(user) = self.user.current() else {
            return CartOutcome::LoginRequired;
        };

        let Some(index) = self.find_item(product_id) else {
            warn!(%product_id, "add to cart for unknown product");
            return CartOutcome::Failed;
        };
        let Some(item) = self.items.get(index) else {
            return CartOutcome::Failed;
        };
        if item.in_cart {
            warn!(%product_id, "product already in cart, ignoring add");
            return CartOutcome::Failed;
        }

        let line = CartLine {
            id: CartLineId::generate(),
            product_id,
            name: item.flower.name.clone(),
            quantity: 1,
            img_src: item.flower.img_src.clone(),
            price: item.flower.price,
            discount: item.flower.discount,
        };
        let mut updated_cart = user.cart.clone();
        updated_cart.push(line.clone());

        if let Err(e) = self.store.replace_cart(user.id, &updated_cart).await {
            error!(error = %e, %product_id, "failed to add item to cart");
            return CartOutcome::Failed;
        }

        if let Some(item) = self.items.get_mut(index) {
            item.in_cart = true;
            item.quantity = 1;
            item.cart_id = Some(line.id);
        }
        self.user.replace(Some(User {
            id: user.id,
            cart: updated_cart,
        }));

        CartOutcome::Saved
    }

    /// Adjust the quantity of a flower already in the cart.
    ///
    /// Builds the full replacement cart with only the matching line
    /// altered, persists it, and mirrors the new quantity locally once the
    /// store accepted the write.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn adjust_quantity(
        &mut self,
        product_id: ProductId,
        change: QuantityChange,
    ) -> CartOutcome {
        let Some(user) = self.user.current() else {
            return CartOutcome::LoginRequired;
        };

        let Some(index) = self.find_item(product_id) else {
            warn!(%product_id, "quantity change for unknown product");
            return CartOutcome::Failed;
        };
        let Some(line_id) = self
            .items
            .get(index)
            .and_then(|item| item.cart_id.clone())
        else {
            warn!(%product_id, "quantity change for product with no cart line");
            return CartOutcome::Failed;
        };
        let Some(current) = user.cart.iter().find(|line| line.id == line_id) else {
            warn!(%product_id, "cart line missing from user cart");
            return CartOutcome::Failed;
        };

        let new_quantity = change.apply(current.quantity);
        let updated_cart: Vec<CartLine> = user
            .cart
            .iter()
            .map(|line| {
                if line.id == line_id {
                    CartLine {
                        quantity: new_quantity,
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect();

        if let Err(e) = self.store.replace_cart(user.id, &updated_cart).await {
            error!(error = %e, %product_id, "failed to update cart quantity");
            return CartOutcome::Failed;
        }

        if let Some(item) = self.items.get_mut(index) {
            item.quantity = new_quantity;
        }
        self.user.replace(Some(User {
            id: user.id,
            cart: updated_cart,
        }));

        CartOutcome::Saved
    }

    fn find_item(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.flower.id == product_id)
    }

    /// Mark every item not-in-cart, skipping the write when nothing would
    /// change.
    fn clear_cart_state(&mut self) {
        let dirty = self
            .items
            .iter()
            .any(|item| item.in_cart || item.quantity != 0 || item.cart_id.is_some());
        if dirty {
            self.items = self
                .items
                .iter()
                .map(|item| CatalogItem::not_in_cart(item.flower.clone()))
                .collect();
        }
    }
}

/// Compare two carts by serialized content.
///
/// Unserializable carts conservatively count as differing.
fn carts_differ(current: &[CartLine], fetched: &[CartLine]) -> bool {
    match (
        serde_json::to_value(current),
        serde_json::to_value(fetched),
    ) {
        (Ok(a), Ok(b)) => a != b,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_adds_one() {
        assert_eq!(QuantityChange::Increment.apply(1), 2);
        assert_eq!(QuantityChange::Increment.apply(7), 8);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        assert_eq!(QuantityChange::Decrement.apply(3), 2);
        assert_eq!(QuantityChange::Decrement.apply(1), 1);
    }

    #[test]
    fn test_categories_start_with_show_all() {
        assert_eq!(CATEGORIES.first(), Some(&SHOW_ALL));
    }
}
