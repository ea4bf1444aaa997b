//! # Basket
//!
//! The widgets a customer has picked during a session, and their price.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Shell Command        Basket Method          State Change               │
//! │  ─────────────        ─────────────          ────────────               │
//! │                                                                         │
//! │  add R01 ───────────► add("R01") ──────────► counts[R01] += 1           │
//! │                                              (or UnknownItemCode)       │
//! │                                                                         │
//! │  clear ─────────────► clear() ─────────────► counts emptied             │
//! │                                                                         │
//! │  widgets ───────────► widgets() ───────────► (read only)                │
//! │                                                                         │
//! │  total ─────────────► total() ─────────────► (read only)                │
//! │                                                                         │
//! │  total() = round( subtotal − Σ offers + delivery )                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A basket is an ordinary value owned by whoever drives the session. There
//! is no shared or global basket; tests simply build a fresh one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Catalog, ItemCode};
use crate::delivery::DeliveryCharges;
use crate::error::CoreResult;
use crate::money::Money;
use crate::offers::OfferSet;

// =============================================================================
// Item Counts
// =============================================================================

/// Quantity per code.
///
/// ## Invariants
/// - Stored quantities are always ≥ 1 (absent means zero)
/// - Iteration follows catalog order (see [`ItemCode`])
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemCounts(BTreeMap<ItemCode, u32>);

impl ItemCounts {
    /// Quantity of a code, zero if absent.
    pub fn quantity(&self, code: ItemCode) -> u32 {
        self.0.get(&code).copied().unwrap_or(0)
    }

    /// Adds one unit of `code`.
    pub fn increment(&mut self, code: ItemCode) {
        *self.0.entry(code).or_insert(0) += 1;
    }

    /// `(code, quantity)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemCode, u32)> + '_ {
        self.0.iter().map(|(code, qty)| (*code, *qty))
    }

    /// Total number of units.
    pub fn total_quantity(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Basket Line / Totals
// =============================================================================

/// One row of the `widgets` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLine {
    pub code: ItemCode,
    pub name: String,
    pub quantity: u32,
}

/// Price breakdown for rendering.
///
/// `subtotal`, `discount` and `delivery` are unrounded; `total` is the
/// rounded figure returned by [`Basket::total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketTotals {
    pub item_count: u32,
    pub subtotal: Money,
    pub discount: Money,
    pub delivery: Money,
    pub total: Money,
}

impl From<&Basket> for BasketTotals {
    fn from(basket: &Basket) -> Self {
        BasketTotals {
            item_count: basket.item_count(),
            subtotal: basket.subtotal(),
            discount: basket.discount(),
            delivery: basket.delivery_charge(),
            total: basket.total(),
        }
    }
}

// =============================================================================
// Basket
// =============================================================================

/// A shopping basket priced against a catalog, offers and optional delivery.
///
/// ## Invariants
/// - Every counted code exists in `catalog`
/// - Counts are ≥ 1; `widgets()` never lists a zero quantity
/// - Read operations (`total`, `widgets`, ...) never mutate
#[derive(Debug)]
pub struct Basket {
    catalog: Catalog,
    offers: OfferSet,
    delivery: Option<DeliveryCharges>,
    items: ItemCounts,
}

impl Basket {
    /// Creates an empty basket without delivery charges.
    pub fn new(catalog: Catalog, offers: OfferSet) -> Self {
        Basket {
            catalog,
            offers,
            delivery: None,
            items: ItemCounts::default(),
        }
    }

    /// Standard catalog and offers, no delivery charge.
    pub fn standard() -> Self {
        Basket::new(Catalog::standard(), OfferSet::standard())
    }

    /// Enables delivery charges on this basket.
    pub fn with_delivery(mut self, delivery: DeliveryCharges) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Adds one unit of the widget named by `code`.
    ///
    /// ## Errors
    /// [`crate::CoreError::UnknownItemCode`] if the catalog has no such code. The
    /// basket is unchanged in that case.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::Basket;
    ///
    /// let mut basket = Basket::standard();
    /// basket.add("R01").unwrap();
    /// assert!(basket.add("X99").is_err());
    /// assert_eq!(basket.item_count(), 1);
    /// ```
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        let code = self.catalog.get(code)?.code;
        self.items.increment(code);
        Ok(())
    }

    /// Empties the basket. Configuration (catalog, offers, delivery) is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current contents in catalog order.
    pub fn widgets(&self) -> Vec<BasketLine> {
        self.catalog
            .all()
            .iter()
            .filter_map(|entry| {
                let quantity = self.items.quantity(entry.code);
                (quantity > 0).then(|| BasketLine {
                    code: entry.code,
                    name: entry.name.clone(),
                    quantity,
                })
            })
            .collect()
    }

    /// Quantity of a single code.
    pub fn quantity(&self, code: ItemCode) -> u32 {
        self.items.quantity(code)
    }

    /// Total number of units.
    pub fn item_count(&self) -> u32 {
        self.items.total_quantity()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ unit price × quantity, before offers.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .filter_map(|(code, qty)| self.catalog.unit_price(code).map(|p| p * qty))
            .sum()
    }

    /// Σ of all offer discounts.
    pub fn discount(&self) -> Money {
        self.offers.discount(&self.items, &self.catalog)
    }

    /// Delivery charge on the discounted subtotal, zero when disabled.
    pub fn delivery_charge(&self) -> Money {
        self.delivery_on(self.subtotal() - self.discount())
    }

    fn delivery_on(&self, discounted: Money) -> Money {
        self.delivery
            .as_ref()
            .map(|delivery| delivery.charge_for(discounted))
            .unwrap_or_default()
    }

    /// Amount due, rounded to cents in one final step.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::Basket;
    ///
    /// let mut basket = Basket::standard();
    /// for _ in 0..3 {
    ///     basket.add("R01").unwrap();
    /// }
    /// // 3 × 32.95 − 16.475 = 82.375
    /// assert_eq!(basket.total().to_decimal_string(), "82.38");
    /// ```
    pub fn total(&self) -> Money {
        let discounted = self.subtotal() - self.discount();
        (discounted + self.delivery_on(discounted)).round_to_cents()
    }

    /// Full price breakdown.
    pub fn totals(&self) -> BasketTotals {
        BasketTotals::from(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn offers(&self) -> &OfferSet {
        &self.offers
    }

    pub fn delivery(&self) -> Option<&DeliveryCharges> {
        self.delivery.as_ref()
    }

    pub fn items(&self) -> &ItemCounts {
        &self.items
    }
}

impl Default for Basket {
    fn default() -> Self {
        Basket::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn basket_with(codes: &[&str]) -> Basket {
        let mut basket = Basket::standard();
        for code in codes {
            basket.add(code).unwrap();
        }
        basket
    }

    fn delivered_basket_with(codes: &[&str]) -> Basket {
        let mut basket = Basket::standard().with_delivery(DeliveryCharges::standard());
        for code in codes {
            basket.add(code).unwrap();
        }
        basket
    }

    #[test]
    fn test_add_increments_only_that_code() {
        let mut basket = basket_with(&["G01"]);
        let before = basket.widgets();

        basket.add("R01").unwrap();

        assert_eq!(basket.quantity(ItemCode::R01), 1);
        assert_eq!(basket.quantity(ItemCode::G01), 1);
        assert_eq!(basket.quantity(ItemCode::B01), 0);
        assert_eq!(before.len() + 1, basket.widgets().len());
    }

    #[test]
    fn test_add_same_code_increases_quantity() {
        let basket = basket_with(&["B01", "B01", "B01"]);
        assert_eq!(
            basket.widgets(),
            vec![BasketLine {
                code: ItemCode::B01,
                name: "Blue Widget".to_string(),
                quantity: 3,
            }]
        );
    }

    #[test]
    fn test_add_unknown_code_leaves_basket_unchanged() {
        let mut basket = basket_with(&["R01", "B01"]);
        let before = basket.items().clone();

        let err = basket.add("X99").unwrap_err();

        assert_eq!(err, CoreError::UnknownItemCode("X99".to_string()));
        assert_eq!(basket.items(), &before);
        assert_eq!(basket.total(), basket_with(&["R01", "B01"]).total());
    }

    #[test]
    fn test_add_rejects_non_canonical_codes() {
        let mut basket = Basket::standard();
        for input in ["r01", " R01\t", "g01"] {
            assert_eq!(
                basket.add(input),
                Err(CoreError::UnknownItemCode(input.to_string()))
            );
        }
        assert!(basket.is_empty());
    }

    #[test]
    fn test_widgets_in_catalog_order() {
        let basket = basket_with(&["B01", "R01", "B01", "G01"]);
        let listing: Vec<(String, u32)> = basket
            .widgets()
            .into_iter()
            .map(|line| (line.name, line.quantity))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("Red Widget".to_string(), 1),
                ("Green Widget".to_string(), 1),
                ("Blue Widget".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_empty_basket_totals_zero() {
        let basket = Basket::standard();
        assert!(basket.is_empty());
        assert!(basket.widgets().is_empty());
        assert_eq!(basket.total().to_decimal_string(), "0.00");

        let delivered = Basket::standard().with_delivery(DeliveryCharges::standard());
        assert_eq!(delivered.total().to_decimal_string(), "0.00");
    }

    #[test]
    fn test_clear_resets_any_state() {
        let mut basket = basket_with(&["R01", "R01", "G01", "B01"]);
        basket.clear();
        assert!(basket.is_empty());
        assert!(basket.total().is_zero());

        basket.clear();
        assert!(basket.total().is_zero());

        basket.add("G01").unwrap();
        assert_eq!(basket.total().to_decimal_string(), "24.95");
    }

    #[test]
    fn test_clear_keeps_delivery_configuration() {
        let mut basket = delivered_basket_with(&["R01"]);
        basket.clear();
        assert!(basket.delivery().is_some());
    }

    #[test]
    fn test_red_widget_discount_law() {
        for n in 0..=7u32 {
            let mut basket = Basket::standard();
            for _ in 0..n {
                basket.add("R01").unwrap();
            }
            let expected =
                (Money::from_cents(3295) * n - Money::from_mills(16_475) * (n / 2)).round_to_cents();
            assert_eq!(basket.total(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_reads_are_idempotent() {
        let basket = basket_with(&["R01", "R01", "G01"]);
        assert_eq!(basket.total(), basket.total());
        assert_eq!(basket.widgets(), basket.widgets());
        assert_eq!(basket.totals(), basket.totals());
    }

    #[test]
    fn test_scenario_red_and_green() {
        let basket = basket_with(&["R01", "G01"]);
        assert_eq!(basket.total().to_decimal_string(), "57.90");
    }

    #[test]
    fn test_scenario_red_pair_and_green() {
        // 65.90 − 16.475 + 24.95 = 74.375
        let basket = basket_with(&["R01", "R01", "G01"]);
        assert_eq!(basket.total().to_decimal_string(), "74.38");
    }

    #[test]
    fn test_scenario_three_blue() {
        let basket = basket_with(&["B01", "B01", "B01"]);
        assert_eq!(basket.total().to_decimal_string(), "23.85");
    }

    #[test]
    fn test_scenario_three_red() {
        let basket = basket_with(&["R01", "R01", "R01"]);
        assert_eq!(basket.discount().mills(), 16_475);
        assert_eq!(basket.total().to_decimal_string(), "82.38");
    }

    #[test]
    fn test_delivery_scenarios() {
        let cases: [(&[&str], &str); 4] = [
            (&["B01", "G01"], "37.85"),
            (&["R01", "R01"], "54.38"),
            (&["R01", "G01"], "60.85"),
            (&["B01", "B01", "R01", "R01", "R01"], "98.28"),
        ];
        for (codes, expected) in cases {
            let basket = delivered_basket_with(codes);
            assert_eq!(basket.total().to_decimal_string(), expected, "{:?}", codes);
        }
    }

    #[test]
    fn test_totals_breakdown() {
        let totals = delivered_basket_with(&["R01", "R01"]).totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.subtotal.mills(), 65_900);
        assert_eq!(totals.discount.mills(), 16_475);
        assert_eq!(totals.delivery.cents(), 495);
        assert_eq!(totals.total.to_decimal_string(), "54.38");
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let json = serde_json::to_value(basket_with(&["B01"]).totals()).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 7950);
        assert_eq!(json["delivery"], 0);
    }

    #[test]
    fn test_item_counts_serialize_in_catalog_order() {
        let basket = basket_with(&["B01", "R01", "R01"]);
        let json = serde_json::to_string(basket.items()).unwrap();
        assert_eq!(json, r#"{"R01":2,"B01":1}"#);
    }

    #[test]
    fn test_without_offers() {
        let mut basket = Basket::new(Catalog::standard(), OfferSet::new());
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        assert_eq!(basket.total().to_decimal_string(), "65.90");
    }
}
