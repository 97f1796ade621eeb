//! Petalcart Catalog - storefront catalog view.
//!
//! This crate implements the catalog view of the Petalcart storefront: the
//! full flower list merged with the authenticated visitor's persisted cart,
//! plus the add/increment/decrement cart operations.
//!
//! # Architecture
//!
//! - The remote store is the source of truth - no local sync, direct API
//!   calls via [`store::StoreClient`]
//! - The authenticated user is owned by the surrounding application and
//!   shared with this view through [`models::UserHandle`]; the view only
//!   ever replaces the user record wholesale
//! - Cart mutations are fail-closed: the remote write is awaited and checked
//!   before any local state is mirrored, so the rendered cart never claims a
//!   change the store did not accept
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use petalcart_catalog::config::CatalogConfig;
//! use petalcart_catalog::models::{MemorySessionStore, UserHandle};
//! use petalcart_catalog::store::StoreClient;
//! use petalcart_catalog::view::CatalogView;
//!
//! let config = CatalogConfig::from_env()?;
//! let store = StoreClient::new(&config);
//! let user = UserHandle::default();
//! let session = Arc::new(MemorySessionStore::default());
//!
//! let mut view = CatalogView::new(store, session, user);
//! view.mount().await;
//! for item in view.items() {
//!     // render item.flower, item.quantity, item.flower.display_price()
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod models;
pub mod store;
pub mod view;
