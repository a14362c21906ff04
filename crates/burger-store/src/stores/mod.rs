//! # Burger Stores
//!
//! Each store is the creation authority for one burger family. A store only decides which
//! [`Burger`](crate::model::Burger) a request turns into; the prepare → cook → serve
//! sequence comes from [`StoreExt::order`](store_framework::StoreExt::order).
//!
//! | Store | Requests |
//! |-------|----------|
//! | [`CheeseStore`] | `CHEESE`, `DELUXE_CHEESE` |
//! | [`VeganStore`] | `VEGAN`, `DELUXE_VEGAN` |
//!
//! A request outside a store's menu yields `None`. Picking the right store for a request is
//! the caller's job.
//!
//! ## Usage
//!
//! ```rust
//! use burger_store::model::BurgerRequest;
//! use burger_store::stores::{CheeseStore, VeganStore};
//! use store_framework::{Product, StoreExt};
//!
//! let burger = CheeseStore.order(BurgerRequest::Cheese).unwrap();
//! println!("Ethan ordered a {}", burger.display_name());
//!
//! assert!(CheeseStore.order(BurgerRequest::Vegan).is_none());
//! assert!(VeganStore.order(BurgerRequest::DeluxeVegan).is_some());
//! ```

pub mod cheese_store;
pub mod vegan_store;

pub use cheese_store::*;
pub use vegan_store::*;
