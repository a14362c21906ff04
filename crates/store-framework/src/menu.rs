//! # Menus
//!
//! A [`Menu`] is a static table mapping request codes to constructor functions. Each store
//! owns one, which keeps its supported subset explicit and closed while replacing the
//! near-identical match arms every store would otherwise repeat.
//!
//! ```rust
//! use store_framework::Menu;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Drink { Tea, Coffee, Juice }
//!
//! fn tea() -> &'static str { "Tea" }
//! fn coffee() -> &'static str { "Coffee" }
//!
//! const HOT_DRINKS: Menu<Drink, &'static str> =
//!     Menu::new(&[(Drink::Tea, tea), (Drink::Coffee, coffee)]);
//!
//! assert_eq!(HOT_DRINKS.build(Drink::Coffee), Some("Coffee"));
//! assert_eq!(HOT_DRINKS.build(Drink::Juice), None);
//! ```

/// Request code → constructor table.
#[derive(Debug)]
pub struct Menu<R: 'static, P: 'static> {
    entries: &'static [(R, fn() -> P)],
}

impl<R: 'static, P: 'static> Clone for Menu<R, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static, P: 'static> Copy for Menu<R, P> {}

impl<R: Copy + PartialEq + 'static, P: 'static> Menu<R, P> {
    pub const fn new(entries: &'static [(R, fn() -> P)]) -> Self {
        Self { entries }
    }

    /// Runs the constructor registered for `request`, if any.
    pub fn build(&self, request: R) -> Option<P> {
        self.entries
            .iter()
            .find(|(code, _)| *code == request)
            .map(|(_, construct)| construct())
    }

    pub fn supports(&self, request: R) -> bool {
        self.entries.iter().any(|(code, _)| *code == request)
    }

    /// Request codes on this menu, in registration order.
    pub fn requests(&self) -> impl Iterator<Item = R> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Size {
        Small,
        Large,
        Family,
    }

    fn small() -> u32 {
        1
    }

    fn large() -> u32 {
        2
    }

    const SIZES: Menu<Size, u32> = Menu::new(&[(Size::Small, small), (Size::Large, large)]);

    #[test]
    fn test_build_runs_matching_constructor() {
        assert_eq!(SIZES.build(Size::Small), Some(1));
        assert_eq!(SIZES.build(Size::Large), Some(2));
    }

    #[test]
    fn test_unknown_request_is_absent() {
        assert_eq!(SIZES.build(Size::Family), None);
        assert!(!SIZES.supports(Size::Family));
    }

    #[test]
    fn test_requests_in_registration_order() {
        let requests: Vec<_> = SIZES.requests().collect();
        assert_eq!(requests, vec![Size::Small, Size::Large]);
        assert_eq!(SIZES.len(), 2);
        assert!(!SIZES.is_empty());
    }
}
