use crate::model::{Burger, BurgerRequest};
use store_framework::{Menu, Store};

/// Serves the vegan family: `VEGAN` and `DELUXE_VEGAN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VeganStore;

impl VeganStore {
    pub const NAME: &'static str = "Vegan Burger Store";

    pub const MENU: Menu<BurgerRequest, Burger> = Menu::new(&[
        (BurgerRequest::Vegan, Burger::vegan),
        (BurgerRequest::DeluxeVegan, Burger::deluxe_vegan),
    ]);
}

impl Store for VeganStore {
    type Request = BurgerRequest;
    type Product = Burger;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create(&self, request: BurgerRequest) -> Option<Burger> {
        Self::MENU.build(request)
    }

    fn supports(&self, request: BurgerRequest) -> bool {
        Self::MENU.supports(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BurgerKind, Stage};

    #[test]
    fn test_create_vegan_family() {
        let store = VeganStore;
        assert_eq!(store.create(BurgerRequest::Vegan).map(|b| b.kind()), Some(BurgerKind::Vegan));
        assert_eq!(
            store.create(BurgerRequest::DeluxeVegan).map(|b| b.kind()),
            Some(BurgerKind::DeluxeVegan)
        );
    }

    #[test]
    fn test_create_does_not_start_lifecycle() {
        let burger = VeganStore.create(BurgerRequest::Vegan).unwrap();
        assert_eq!(burger.stage(), Stage::Ordered);
        assert!(burger.toppings().is_empty());
    }

    #[test]
    fn test_cheese_requests_are_absent() {
        assert!(VeganStore.create(BurgerRequest::Cheese).is_none());
        assert!(VeganStore.create(BurgerRequest::DeluxeCheese).is_none());
    }
}
