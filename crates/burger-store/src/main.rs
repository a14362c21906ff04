//! # Burger Store Demo
//!
//! Plays the part of the external caller: it picks a store for each request, orders, and
//! prints what each customer got.
//!
//! ```bash
//! RUST_LOG=info cargo run -p burger-store
//! ```

use burger_store::model::BurgerRequest;
use burger_store::stores::{CheeseStore, VeganStore};
use store_framework::tracing::setup_tracing;
use store_framework::{Product, StoreExt};
use tracing::{info, warn};

fn main() {
    setup_tracing();

    info!("Opening the burger stores");

    let cheese_store = CheeseStore;
    let vegan_store = VeganStore;

    let orders = [
        ("Ethan", BurgerRequest::Cheese),
        ("Joel", BurgerRequest::Vegan),
    ];

    for (customer, request) in orders {
        let span = tracing::info_span!("customer", name = customer);
        let _entered = span.enter();

        let burger = match request {
            BurgerRequest::Cheese | BurgerRequest::DeluxeCheese => cheese_store.order(request),
            BurgerRequest::Vegan | BurgerRequest::DeluxeVegan => vegan_store.order(request),
        };

        match burger {
            Some(burger) => {
                println!("{} ordered a {}", customer, burger.display_name());
                info!(burger = %burger, "Handed over");
            }
            None => warn!(%request, "Nothing to hand over"),
        }
    }

    // Asking the wrong store is not an error, just an empty tray.
    match cheese_store.order(BurgerRequest::Vegan) {
        Some(burger) => warn!(burger = %burger, "Cheese store made a vegan burger"),
        None => info!(store = CheeseStore::NAME, "VEGAN is not on this menu"),
    }

    info!("Stores closed");
}
