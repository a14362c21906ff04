use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bread {
    SesameBun,
    BriocheBun,
    WholeWheatBun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sauce {
    Ketchup,
    SpecialSauce,
    VeganMayo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Cheddar,
    Bacon,
    Lettuce,
    Tomato,
    Onion,
    Pickles,
    Avocado,
}

impl Display for Bread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Bread::SesameBun => "sesame bun",
                Bread::BriocheBun => "brioche bun",
                Bread::WholeWheatBun => "whole wheat bun",
            }
        )
    }
}

impl Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sauce::Ketchup => "ketchup",
                Sauce::SpecialSauce => "special sauce",
                Sauce::VeganMayo => "vegan mayo",
            }
        )
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Topping::Cheddar => "cheddar",
                Topping::Bacon => "bacon",
                Topping::Lettuce => "lettuce",
                Topping::Tomato => "tomato",
                Topping::Onion => "onion",
                Topping::Pickles => "pickles",
                Topping::Avocado => "avocado",
            }
        )
    }
}
