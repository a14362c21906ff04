//! # Product Trait
//!
//! The `Product` trait defines the contract that every orderable item must implement to be
//! driven through the lifecycle by [`StoreExt::order`](crate::StoreExt::order). It specifies
//! the display name accessor and the three lifecycle hooks (`prepare`, `cook`, `serve`).
//!
//! # Provided Methods (Hooks)
//! All three hooks are **Provided Methods** with a default implementation that does nothing.
//! Override only the steps your product actually cares about.
//!
//! # Who calls the hooks?
//! Every hook receives an [`OrderTicket`]. The ticket has no public constructor: only the
//! `order` template can issue one, so code outside this crate can implement the hooks but
//! never invoke them out of sequence.

use std::fmt::{self, Debug, Display};

/// One step of the fixed product lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Prepare,
    Cook,
    Serve,
}

impl Step {
    /// The lifecycle sequence, in the order `order` runs it.
    pub const ALL: [Step; 3] = [Step::Prepare, Step::Cook, Step::Serve];
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Step::Prepare => "preparing",
                Step::Cook => "cooking",
                Step::Serve => "serving",
            }
        )
    }
}

/// Context handed to every lifecycle hook for the duration of one order.
///
/// Built exclusively by the `order` template; holding one is proof that the hook is being
/// called from inside the fixed prepare → cook → serve sequence.
///
/// Hooks only ever see a borrow that ends with the call, and the ticket cannot be copied
/// out of it:
///
/// ```rust,compile_fail
/// use store_framework::OrderTicket;
///
/// fn keep(ticket: &OrderTicket) -> OrderTicket {
///     ticket.clone()
/// }
/// ```
#[derive(Debug)]
pub struct OrderTicket {
    store: &'static str,
    request: String,
}

impl OrderTicket {
    pub(crate) fn new(store: &'static str, request: impl Display) -> Self {
        Self {
            store,
            request: request.to_string(),
        }
    }

    /// Name of the store running this order.
    pub fn store(&self) -> &'static str {
        self.store
    }

    /// The request code that was ordered, rendered with `Display`.
    pub fn request(&self) -> &str {
        &self.request
    }
}

/// Trait that any product must implement to be ordered through a [`Store`](crate::Store).
///
/// # Ownership
/// A product is created by exactly one store's `create` and handed to the caller once the
/// lifecycle completes. Stores never keep a reference to it.
pub trait Product: Debug + Send + 'static {
    /// Human-readable name fixed at construction.
    fn display_name(&self) -> &str;

    // --- Lifecycle Hooks ---

    /// First step. Mutable attributes (bread, sauce, toppings, ...) are set here.
    fn prepare(&mut self, _ticket: &OrderTicket) {}

    /// Second step.
    fn cook(&mut self, _ticket: &OrderTicket) {}

    /// Final step. The product is handed to the caller afterward.
    fn serve(&mut self, _ticket: &OrderTicket) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_prepare_cook_serve() {
        assert_eq!(Step::ALL, [Step::Prepare, Step::Cook, Step::Serve]);
        assert_eq!(Step::Cook.to_string(), "cooking");
    }

    #[test]
    fn ticket_exposes_store_and_request() {
        let ticket = OrderTicket::new("Test Store", "CHEESE");
        assert_eq!(ticket.store(), "Test Store");
        assert_eq!(ticket.request(), "CHEESE");
    }
}
