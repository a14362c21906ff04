//! Pure data: request codes, the [`Burger`] product and its ingredients.

pub mod burger;
pub mod ingredients;
pub mod request;

pub use burger::*;
pub use ingredients::*;
pub use request::*;
