//! A burger built by one of the stores.
//!
//! # Store Framework
//! [`Burger`] implements the [`Product`](store_framework::Product) trait, allowing it to be
//! ordered through any [`Store`](store_framework::Store) whose product type is `Burger`.
//!
//! Every variant shares this one struct; [`BurgerKind`] is the tag and the only thing a
//! constructor chooses. Bread, sauce and toppings stay empty until the `prepare` step
//! fills them from the variant's recipe.

use super::ingredients::{Bread, Sauce, Topping};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use store_framework::{OrderTicket, Product};
use tracing::debug;

/// The burger variants on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurgerKind {
    Cheese,
    DeluxeCheese,
    Vegan,
    DeluxeVegan,
}

impl BurgerKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            BurgerKind::Cheese => "Cheese Burger",
            BurgerKind::DeluxeCheese => "Delux Cheese Burger",
            BurgerKind::Vegan => "Vegan Burger",
            BurgerKind::DeluxeVegan => "Delux Vegan Burger",
        }
    }

    fn recipe(&self) -> (Bread, Sauce, &'static [Topping]) {
        match self {
            BurgerKind::Cheese => (
                Bread::SesameBun,
                Sauce::Ketchup,
                &[Topping::Cheddar, Topping::Pickles],
            ),
            BurgerKind::DeluxeCheese => (
                Bread::BriocheBun,
                Sauce::SpecialSauce,
                &[
                    Topping::Cheddar,
                    Topping::Bacon,
                    Topping::Lettuce,
                    Topping::Tomato,
                    Topping::Onion,
                ],
            ),
            BurgerKind::Vegan => (
                Bread::WholeWheatBun,
                Sauce::VeganMayo,
                &[Topping::Lettuce, Topping::Tomato],
            ),
            BurgerKind::DeluxeVegan => (
                Bread::BriocheBun,
                Sauce::VeganMayo,
                &[
                    Topping::Avocado,
                    Topping::Lettuce,
                    Topping::Tomato,
                    Topping::Onion,
                    Topping::Pickles,
                ],
            ),
        }
    }
}

/// How far along the lifecycle a burger is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Ordered,
    Prepared,
    Cooked,
    Served,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Burger {
    kind: BurgerKind,
    name: &'static str,
    bread: Option<Bread>,
    sauce: Option<Sauce>,
    toppings: Vec<Topping>,
    stage: Stage,
}

impl Burger {
    /// Creates an unprepared burger of the given variant.
    pub fn new(kind: BurgerKind) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            bread: None,
            sauce: None,
            toppings: Vec::new(),
            stage: Stage::Ordered,
        }
    }

    pub fn cheese() -> Self {
        Self::new(BurgerKind::Cheese)
    }

    pub fn deluxe_cheese() -> Self {
        Self::new(BurgerKind::DeluxeCheese)
    }

    pub fn vegan() -> Self {
        Self::new(BurgerKind::Vegan)
    }

    pub fn deluxe_vegan() -> Self {
        Self::new(BurgerKind::DeluxeVegan)
    }

    pub fn kind(&self) -> BurgerKind {
        self.kind
    }

    pub fn bread(&self) -> Option<Bread> {
        self.bread
    }

    pub fn sauce(&self) -> Option<Sauce> {
        self.sauce
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, from: Stage, to: Stage) {
        debug_assert_eq!(self.stage, from, "{} skipped a lifecycle step", self.name);
        self.stage = to;
    }
}

impl Display for Burger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let (Some(bread), Some(sauce)) = (self.bread, self.sauce) {
            write!(f, " on a {} with {}", bread, sauce)?;
        }
        if !self.toppings.is_empty() {
            let toppings: Vec<String> = self.toppings.iter().map(ToString::to_string).collect();
            write!(f, ", topped with {}", toppings.join(", "))?;
        }
        Ok(())
    }
}

impl Product for Burger {
    fn display_name(&self) -> &str {
        self.name
    }

    fn prepare(&mut self, ticket: &OrderTicket) {
        let (bread, sauce, toppings) = self.kind.recipe();
        self.bread = Some(bread);
        self.sauce = Some(sauce);
        self.toppings = toppings.to_vec();
        self.advance(Stage::Ordered, Stage::Prepared);
        debug!(store = ticket.store(), burger = self.name, %bread, %sauce, "Prepared");
    }

    fn cook(&mut self, _ticket: &OrderTicket) {
        self.advance(Stage::Prepared, Stage::Cooked);
    }

    fn serve(&mut self, _ticket: &OrderTicket) {
        self.advance(Stage::Cooked, Stage::Served);
    }
}
