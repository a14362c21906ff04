//! # Mock Framework
//!
//! Utilities for testing the order template in isolation, without any concrete product.
//!
//! [`MockStore`] returns [`RecordingProduct`]s according to queued expectations. Every
//! creation and every lifecycle hook is appended to a shared [`Journal`], so a test can
//! assert exactly which hooks ran, on which product, and in what order.
//!
//! # Example
//! ```rust
//! use store_framework::mock::{JournalEntry, MockStore};
//! use store_framework::{Step, StoreExt};
//!
//! let mut mock = MockStore::new();
//! mock.expect_create("A").return_product("Alpha");
//! mock.expect_create("B").return_absent();
//!
//! assert!(mock.order("A").is_some());
//! assert!(mock.order("B").is_none());
//!
//! assert_eq!(
//!     mock.journal().entries(),
//!     vec![
//!         JournalEntry::Created { product: 1 },
//!         JournalEntry::Step { product: 1, step: Step::Prepare },
//!         JournalEntry::Step { product: 1, step: Step::Cook },
//!         JournalEntry::Step { product: 1, step: Step::Serve },
//!     ]
//! );
//! mock.verify();
//! ```

use crate::product::{OrderTicket, Product, Step};
use crate::store::Store;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalEntry {
    Created { product: u32 },
    Step { product: u32, step: Step },
}

/// Shared, append-only log of creations and hook calls.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    fn record(&self, entry: JournalEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    /// Assigns the next product id and records its creation under one lock.
    fn register(&self) -> u32 {
        let mut entries = self.entries.lock().unwrap();
        let created = entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::Created { .. }))
            .count();
        let id = created as u32 + 1;
        entries.push(JournalEntry::Created { product: id });
        id
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Steps run on one product, in call order.
    pub fn steps_for(&self, product: u32) -> Vec<Step> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                JournalEntry::Step { product: p, step } if *p == product => Some(*step),
                _ => None,
            })
            .collect()
    }
}

/// A product that records every hook call into its store's [`Journal`].
#[derive(Debug)]
pub struct RecordingProduct {
    id: u32,
    name: String,
    tickets: Vec<(Step, String)>,
    journal: Journal,
}

impl RecordingProduct {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// `(step, request)` pairs seen through the tickets, local to this instance.
    pub fn tickets(&self) -> &[(Step, String)] {
        &self.tickets
    }

    fn run(&mut self, step: Step, ticket: &OrderTicket) {
        self.tickets.push((step, ticket.request().to_string()));
        self.journal.record(JournalEntry::Step {
            product: self.id,
            step,
        });
    }
}

impl Product for RecordingProduct {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self, ticket: &OrderTicket) {
        self.run(Step::Prepare, ticket);
    }

    fn cook(&mut self, ticket: &OrderTicket) {
        self.run(Step::Cook, ticket);
    }

    fn serve(&mut self, ticket: &OrderTicket) {
        self.run(Step::Serve, ticket);
    }
}

/// Represents an expected `create` call and its canned outcome.
#[derive(Debug)]
struct Expectation {
    request: &'static str,
    product: Option<String>,
}

/// A store driven by expectations, for fluent testing of the order template.
///
/// Requests are plain `&'static str` codes. Each `create` call consumes the next
/// expectation and panics if the request does not match it.
#[derive(Debug, Default)]
pub struct MockStore {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    journal: Journal,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `create` call for `request`.
    pub fn expect_create(&mut self, request: &'static str) -> CreateExpectationBuilder {
        CreateExpectationBuilder {
            request,
            expectations: self.expectations.clone(),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl Store for MockStore {
    type Request = &'static str;
    type Product = RecordingProduct;

    fn name(&self) -> &'static str {
        "Mock Store"
    }

    fn create(&self, request: &'static str) -> Option<RecordingProduct> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation {
                request: expected,
                product,
            }) if expected == request => product.map(|name| {
                let id = self.journal.register();
                RecordingProduct {
                    id,
                    name,
                    tickets: Vec::new(),
                    journal: self.journal.clone(),
                }
            }),
            other => panic!("Unexpected create({request:?}), expected {other:?}"),
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder {
    request: &'static str,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CreateExpectationBuilder {
    /// The store builds a product with this display name.
    pub fn return_product(self, name: impl Into<String>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            request: self.request,
            product: Some(name.into()),
        });
    }

    /// The store does not carry the request.
    pub fn return_absent(self) {
        self.expectations.lock().unwrap().push_back(Expectation {
            request: self.request,
            product: None,
        });
    }
}
