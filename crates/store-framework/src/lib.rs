//! # Store Framework
//!
//! Building blocks for product creation with a uniform lifecycle. Concrete stores decide
//! *what* gets built for a request; the framework decides *how* the build is sequenced.
//!
//! ## Architecture Overview
//!
//! 1. **Product Layer** ([`Product`]) - display name plus `prepare`/`cook`/`serve` hooks
//! 2. **Creation Layer** ([`Store`], [`Menu`]) - maps a request code to a fresh product
//! 3. **Template Layer** ([`StoreExt::order`]) - create, announce, prepare, cook, serve
//!
//! ## Quick Example
//!
//! ```rust
//! use store_framework::{Menu, OrderTicket, Product, Store, StoreExt};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Snack { Fries, Onion }
//!
//! impl std::fmt::Display for Snack {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{:?}", self)
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Fries { salted: bool }
//!
//! impl Product for Fries {
//!     fn display_name(&self) -> &str { "Fries" }
//!     fn cook(&mut self, _ticket: &OrderTicket) { self.salted = true; }
//! }
//!
//! fn fries() -> Fries { Fries { salted: false } }
//!
//! struct FryStation;
//!
//! const FRY_MENU: Menu<Snack, Fries> = Menu::new(&[(Snack::Fries, fries as fn() -> Fries)]);
//!
//! impl Store for FryStation {
//!     type Request = Snack;
//!     type Product = Fries;
//!     fn name(&self) -> &'static str { "Fry Station" }
//!     fn create(&self, request: Snack) -> Option<Fries> { FRY_MENU.build(request) }
//! }
//!
//! let fries = FryStation.order(Snack::Fries).unwrap();
//! assert!(fries.salted);
//! assert!(FryStation.order(Snack::Onion).is_none());
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for a store that records every hook call.

pub mod menu;
pub mod mock;
pub mod product;
pub mod store;
pub mod tracing;

pub use menu::Menu;
pub use product::{OrderTicket, Product, Step};
pub use store::{Store, StoreExt};
