//! User domain types.
//!
//! The authenticated user is owned by the application shell, not by the
//! catalog view. The view receives a [`UserHandle`] - a shared reference
//! plus a replace operation - and only ever swaps the record wholesale,
//! preserving a single source of truth outside this component.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use petalcart_core::UserId;

use crate::store::types::CartLine;

/// An authenticated storefront visitor.
///
/// Only the fields this view reads are modeled; the remote user record may
/// carry more, which the store client ignores on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// The user's persisted cart. Absent on the wire means empty.
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

/// Shared handle to the externally owned authenticated user.
///
/// Cheaply cloneable; the shell and the catalog view hold clones of the same
/// handle. `replace` swaps the whole record - there is no partial mutation.
#[derive(Debug, Clone, Default)]
pub struct UserHandle {
    inner: Arc<RwLock<Option<User>>>,
}

impl UserHandle {
    /// Create a handle holding the given user (or none).
    #[must_use]
    pub fn new(user: Option<User>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(user)),
        }
    }

    /// Snapshot of the current user, if any.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the user record wholesale.
    pub fn replace(&self, user: Option<User>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}
