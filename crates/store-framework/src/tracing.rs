//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for any binary
//! built on this framework.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses the compact
//! format and hides the crate/module prefix (`with_target(false)`), since every event
//! already carries a `store` field.
//!
//! ```bash
//! # The "Making a ..." notification and served orders
//! RUST_LOG=info cargo run
//!
//! # Every lifecycle step and every request a store turned away
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! With `RUST_LOG=debug`, a single order looks like:
//!
//! ```text
//! INFO order{store="Cheese Burger Store" request=Cheese}: Making a Cheese Burger request=CHEESE product="Cheese Burger"
//! DEBUG order{store="Cheese Burger Store" request=Cheese}: Step step=preparing product="Cheese Burger"
//! DEBUG order{store="Cheese Burger Store" request=Cheese}: Step step=cooking product="Cheese Burger"
//! DEBUG order{store="Cheese Burger Store" request=Cheese}: Step step=serving product="Cheese Burger"
//! INFO order{store="Cheese Burger Store" request=Cheese}: Order served product="Cheese Burger"
//! ```
//!
//! A request outside the store's menu produces only:
//!
//! ```text
//! DEBUG order{store="Cheese Burger Store" request=Vegan}: Request not on the menu request=VEGAN
//! ```

/// Installs the global compact subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
