//! # Burger Store
//!
//! Burger stores built on [`store_framework`].
//!
//! - **[model]**: request codes ([`BurgerRequest`](model::BurgerRequest)), the
//!   [`Burger`](model::Burger) product and its ingredients.
//! - **[stores]**: [`CheeseStore`](stores::CheeseStore) and [`VeganStore`](stores::VeganStore).
//! - **[error]**: [`BurgerError`](error::BurgerError).

pub mod error;
pub mod model;
pub mod stores;
