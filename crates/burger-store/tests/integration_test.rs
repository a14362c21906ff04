use burger_store::model::{Bread, BurgerKind, BurgerRequest, Sauce, Stage, Topping};
use burger_store::stores::{CheeseStore, VeganStore};
use std::sync::Arc;
use store_framework::{Product, Store, StoreExt};

#[test]
fn test_cheese_store_orders_cheese_burger() {
    let burger = CheeseStore
        .order(BurgerRequest::Cheese)
        .expect("Cheese store should make a cheese burger");

    assert_eq!(burger.display_name(), "Cheese Burger");
    assert_eq!(burger.stage(), Stage::Served);
    assert_eq!(burger.bread(), Some(Bread::SesameBun));
    assert_eq!(burger.sauce(), Some(Sauce::Ketchup));
    assert_eq!(burger.toppings(), &[Topping::Cheddar, Topping::Pickles]);
}

#[test]
fn test_cheese_store_turns_away_vegan() {
    assert!(CheeseStore.order(BurgerRequest::Vegan).is_none());
    assert!(CheeseStore.order(BurgerRequest::DeluxeVegan).is_none());
}

#[test]
fn test_vegan_store_orders_deluxe_vegan() {
    let burger = VeganStore
        .order(BurgerRequest::DeluxeVegan)
        .expect("Vegan store should make a deluxe vegan burger");

    assert_eq!(burger.kind(), BurgerKind::DeluxeVegan);
    assert_eq!(burger.display_name(), "Delux Vegan Burger");
    assert_eq!(burger.stage(), Stage::Served);
    assert_eq!(
        burger.to_string(),
        "Delux Vegan Burger on a brioche bun with vegan mayo, topped with avocado, lettuce, tomato, onion, pickles"
    );
}

#[test]
fn test_vegan_store_turns_away_cheese() {
    assert!(VeganStore.order(BurgerRequest::Cheese).is_none());
    assert!(VeganStore.order(BurgerRequest::DeluxeCheese).is_none());
}

#[test]
fn test_every_supported_request_is_fully_served() {
    let expected = [
        (BurgerRequest::Cheese, "Cheese Burger"),
        (BurgerRequest::DeluxeCheese, "Delux Cheese Burger"),
    ];
    for (request, name) in expected {
        let burger = CheeseStore.order(request).unwrap();
        assert_eq!(burger.display_name(), name);
        assert_eq!(burger.stage(), Stage::Served, "{name} was not served");
        assert!(burger.bread().is_some());
        assert!(!burger.toppings().is_empty());
    }

    let expected = [
        (BurgerRequest::Vegan, "Vegan Burger"),
        (BurgerRequest::DeluxeVegan, "Delux Vegan Burger"),
    ];
    for (request, name) in expected {
        let burger = VeganStore.order(request).unwrap();
        assert_eq!(burger.display_name(), name);
        assert_eq!(burger.stage(), Stage::Served, "{name} was not served");
    }
}

#[test]
fn test_display_name_is_stable() {
    let burger = VeganStore.order(BurgerRequest::Vegan).unwrap();
    let first = burger.display_name().to_string();
    for _ in 0..3 {
        assert_eq!(burger.display_name(), first);
    }
}

#[test]
fn test_sequential_orders_are_independent() {
    let plain = CheeseStore.order(BurgerRequest::Cheese).unwrap();
    let deluxe = CheeseStore.order(BurgerRequest::DeluxeCheese).unwrap();
    let plain_again = CheeseStore.order(BurgerRequest::Cheese).unwrap();

    assert_ne!(plain, deluxe);
    assert_eq!(plain, plain_again);
    assert_eq!(plain.toppings().len(), 2);
    assert_eq!(deluxe.toppings().len(), 5);
}

/// Every request code is carried by at least one store.
#[test]
fn test_stores_cover_every_request() {
    for request in BurgerRequest::ALL {
        let carried = CheeseStore.supports(request) || VeganStore.supports(request);
        assert!(carried, "No store carries {request}");
    }

    let menus: usize = CheeseStore::MENU.len() + VeganStore::MENU.len();
    assert_eq!(menus, BurgerRequest::ALL.len(), "Menus should not overlap");
}

#[test]
fn test_requests_parse_then_order() {
    let request: BurgerRequest = "deluxe_cheese".parse().unwrap();
    let burger = CheeseStore.order(request).unwrap();
    assert_eq!(burger.display_name(), "Delux Cheese Burger");

    assert!("DOUBLE_BACON".parse::<BurgerRequest>().is_err());
}

/// One store shared across tasks: stores hold no per-order state.
#[tokio::test]
async fn test_concurrent_orders_share_one_store() {
    let store = Arc::new(VeganStore);

    let mut handles = vec![];
    for i in 0..10 {
        let store = store.clone();
        let request = if i % 2 == 0 {
            BurgerRequest::Vegan
        } else {
            BurgerRequest::DeluxeVegan
        };
        handles.push(tokio::spawn(async move { (request, store.order(request)) }));
    }

    for handle in handles {
        let (request, burger) = handle.await.unwrap();
        let burger = burger.expect("Vegan store should serve vegan requests");
        assert_eq!(burger.stage(), Stage::Served);
        match request {
            BurgerRequest::Vegan => assert_eq!(burger.kind(), BurgerKind::Vegan),
            _ => assert_eq!(burger.kind(), BurgerKind::DeluxeVegan),
        }
    }
}
