use crate::model::{Burger, BurgerRequest};
use store_framework::{Menu, Store};

/// Serves the cheese family: `CHEESE` and `DELUXE_CHEESE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheeseStore;

impl CheeseStore {
    pub const NAME: &'static str = "Cheese Burger Store";

    pub const MENU: Menu<BurgerRequest, Burger> = Menu::new(&[
        (BurgerRequest::Cheese, Burger::cheese),
        (BurgerRequest::DeluxeCheese, Burger::deluxe_cheese),
    ]);
}

impl Store for CheeseStore {
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
