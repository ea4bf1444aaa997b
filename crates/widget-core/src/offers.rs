//! # Offer Rules
//!
//! Promotional discounts computed from basket contents.
//!
//! ## How Discounts Compose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        OfferSet::discount                               │
//! │                                                                         │
//! │   ItemCounts + Catalog                                                  │
//! │        │                                                                │
//! │        ├──► Offer #1 .discount() ──► $16.475                            │
//! │        ├──► Offer #2 .discount() ──►  $0.00                             │
//! │        └──► ...                                                         │
//! │                                     ─────────                           │
//! │                               Σ  =  $16.475   (unrounded)               │
//! │                                                                         │
//! │   Basket::total = subtotal − Σ (+ delivery), rounded once               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every offer is a pure function of the counts and the catalog. Adding an
//! offer means adding an [`Offer`] impl and pushing it onto the set;
//! `Basket::total` does not change.

use std::fmt;

use crate::basket::ItemCounts;
use crate::catalog::{Catalog, ItemCode};
use crate::money::Money;

// =============================================================================
// Offer Trait
// =============================================================================

/// A promotional rule.
pub trait Offer: fmt::Debug {
    /// Human readable description, listed by the shell's `offers` command.
    fn description(&self) -> &str;

    /// Amount to take off the basket subtotal. Never negative.
    fn discount(&self, items: &ItemCounts, catalog: &Catalog) -> Money;
}

// =============================================================================
// Half Price Second
// =============================================================================

/// "Buy one, get the second half price" for a single code.
///
/// For `n` units, `floor(n / 2)` of them are discounted by half their unit
/// price. A code the catalog does not stock yields no discount.
#[derive(Debug, Clone)]
pub struct HalfPriceSecond {
    code: ItemCode,
    description: String,
}

impl HalfPriceSecond {
    pub fn new(code: ItemCode, description: impl Into<String>) -> Self {
        HalfPriceSecond {
            code,
            description: description.into(),
        }
    }

    /// The shop's running promotion on red widgets.
    pub fn red_widget() -> Self {
        HalfPriceSecond::new(
            ItemCode::R01,
            "Buy one red widget, get the second half price",
        )
    }

    pub fn code(&self) -> ItemCode {
        self.code
    }
}

impl Offer for HalfPriceSecond {
    fn description(&self) -> &str {
        &self.description
    }

    fn discount(&self, items: &ItemCounts, catalog: &Catalog) -> Money {
        let pairs = items.quantity(self.code) / 2;
        match catalog.unit_price(self.code) {
            Some(price) => price.half() * pairs,
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Offer Set
// =============================================================================

/// Ordered collection of offers whose discounts are summed.
#[derive(Debug, Default)]
pub struct OfferSet {
    offers: Vec<Box<dyn Offer>>,
}

impl OfferSet {
    pub fn new() -> Self {
        OfferSet { offers: Vec::new() }
    }

    /// The shop's current promotions.
    pub fn standard() -> Self {
        OfferSet::new().with(HalfPriceSecond::red_widget())
    }

    /// Builder-style push.
    pub fn with(mut self, offer: impl Offer + 'static) -> Self {
        self.push(offer);
        self
    }

    pub fn push(&mut self, offer: impl Offer + 'static) {
        self.offers.push(Box::new(offer));
    }

    /// Total discount across all offers.
    ///
    /// An empty basket gets no discount regardless of the rules.
    pub fn discount(&self, items: &ItemCounts, catalog: &Catalog) -> Money {
        if items.is_empty() {
            return Money::zero();
        }
        self.offers
            .iter()
            .map(|offer| offer.discount(items, catalog))
            .sum()
    }

    /// Offer descriptions in insertion order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.offers.iter().map(|o| o.description()).collect()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
