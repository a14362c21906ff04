//! Error types for the burger stores.

use thiserror::Error;

/// Errors that can occur while handling burger requests.
///
/// A store turning a request away is *not* an error: `order` returns `None` for that.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BurgerError {
    /// The code does not name any burger on any menu.
    #[error("Unknown burger request: {0:?}")]
    UnknownRequest(String),
}
