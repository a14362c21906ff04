use crate::error::BurgerError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// The closed set of codes a caller uses to ask for a burger.
///
/// Codes render as `CHEESE`, `DELUXE_CHEESE`, `VEGAN` and `DELUXE_VEGAN`, both through
/// [`Display`] and through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BurgerRequest {
    Cheese,
    DeluxeCheese,
    Vegan,
    DeluxeVegan,
}

impl BurgerRequest {
    pub const ALL: [BurgerRequest; 4] = [
        BurgerRequest::Cheese,
        BurgerRequest::DeluxeCheese,
        BurgerRequest::Vegan,
        BurgerRequest::DeluxeVegan,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BurgerRequest::Cheese => "CHEESE",
            BurgerRequest::DeluxeCheese => "DELUXE_CHEESE",
            BurgerRequest::Vegan => "VEGAN",
            BurgerRequest::DeluxeVegan => "DELUXE_VEGAN",
        }
    }
}

impl Display for BurgerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BurgerRequest {
    type Err = BurgerError;

    /// Parses a request code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        BurgerRequest::ALL
            .into_iter()
            .find(|request| request.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| BurgerError::UnknownRequest(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("CHEESE".parse(), Ok(BurgerRequest::Cheese));
        assert_eq!(" deluxe_vegan ".parse(), Ok(BurgerRequest::DeluxeVegan));
        assert_eq!(
            "VEGANBURGER".parse::<BurgerRequest>(),
            Err(BurgerError::UnknownRequest("VEGANBURGER".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for request in BurgerRequest::ALL {
            assert_eq!(request.to_string().parse(), Ok(request));
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&BurgerRequest::DeluxeCheese).unwrap();
        assert_eq!(json, "\"DELUXE_CHEESE\"");

        let request: BurgerRequest = serde_json::from_str("\"VEGAN\"").unwrap();
        assert_eq!(request, BurgerRequest::Vegan);
        assert!(serde_json::from_str::<BurgerRequest>("\"CHEESEBURGER\"").is_err());
    }
}
