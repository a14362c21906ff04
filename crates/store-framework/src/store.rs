//! # Stores & the Order Template
//!
//! A [`Store`] is the creation authority for one sub-family of products. It answers a single
//! question: "given this request code, what do I build?" via [`Store::create`].
//!
//! How a product is built is *not* up to the store. [`StoreExt::order`] is the template
//! method: it asks the store to create the product, announces it, then runs every
//! [`Step`] exactly once in the fixed order. `StoreExt` is blanket-implemented for every
//! `Store`, so no store can replace the sequencing.
//!
//! ## Absent results
//!
//! `create` returns `None` for requests outside the store's menu. That is a normal outcome,
//! not a failure: the same request may legitimately belong to another store, and the caller
//! decides where to route it. `order` propagates `None` unchanged and never runs a hook on
//! a product that does not exist.

use crate::product::{OrderTicket, Product, Step};
use std::fmt::{Debug, Display};
use tracing::{debug, info};

/// Trait that every concrete store implements.
///
/// Stores hold no per-order state, so a single instance can be shared by many callers.
pub trait Store: Send + Sync {
    /// The closed set of request codes callers pick from.
    type Request: Copy + Eq + Debug + Display + Send + Sync + 'static;

    /// What this store builds.
    type Product: Product;

    /// Name used in logs and handed to hooks through the [`OrderTicket`].
    fn name(&self) -> &'static str;

    /// Resolves a request to a fresh product, or `None` if the request is not on this
    /// store's menu.
    fn create(&self, request: Self::Request) -> Option<Self::Product>;

    /// Whether `create` would produce something for `request`.
    ///
    /// The default builds a product and throws it away; stores backed by a
    /// [`Menu`](crate::Menu) should answer from the menu instead.
    fn supports(&self, request: Self::Request) -> bool {
        self.create(request).is_some()
    }
}

/// The order template, available on every [`Store`].
pub trait StoreExt: Store {
    /// Creates the product for `request` and drives it through prepare → cook → serve.
    ///
    /// Returns `None` without running any step when the store does not carry `request`.
    fn order(&self, request: Self::Request) -> Option<Self::Product>;
}

impl<S: Store + ?Sized> StoreExt for S {
    #[tracing::instrument(skip(self), fields(store = self.name()))]
    fn order(&self, request: Self::Request) -> Option<Self::Product> {
        let Some(mut product) = self.create(request) else {
            debug!(%request, "Request not on the menu");
            return None;
        };

        info!(%request, product = product.display_name(), "Making a {}", product.display_name());

        let ticket = OrderTicket::new(self.name(), request);
        for step in Step::ALL {
            debug!(%step, product = product.display_name(), "Step");
            match step {
                Step::Prepare => product.prepare(&ticket),
                Step::Cook => product.cook(&ticket),
                Step::Serve => product.serve(&ticket),
            }
        }

        info!(product = product.display_name(), "Order served");
        Some(product)
    }
}
