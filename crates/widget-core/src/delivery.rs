//! # Delivery Charges
//!
//! Tiered delivery pricing based on the discounted basket subtotal.
//!
//! ## Standard Tiers
//! ```text
//! discounted subtotal        charge
//! ───────────────────        ──────
//!   s ≤ $0.00                 $0.00   (nothing to deliver)
//!   s < $50.00                $4.95
//!   s < $90.00                $2.95
//!   s ≥ $90.00                $0.00   (free delivery)
//! ```
//!
//! The comparison uses the unrounded subtotal, so $49.425 falls in the
//! $4.95 tier even though it displays as $49.43.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A single tier: subtotals strictly below `below` pay `charge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub below: Money,
    pub charge: Money,
}

impl DeliveryTier {
    pub const fn new(below: Money, charge: Money) -> Self {
        DeliveryTier { below, charge }
    }
}

/// Delivery pricing rule.
///
/// ## Invariants
/// - Tiers are kept sorted by threshold
/// - Subtotals at or above the last threshold ship free
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryCharges {
    tiers: Vec<DeliveryTier>,
}

impl DeliveryCharges {
    pub fn new(tiers: impl IntoIterator<Item = DeliveryTier>) -> Self {
        let mut tiers: Vec<DeliveryTier> = tiers.into_iter().collect();
        tiers.sort_by_key(|t| t.below);
        DeliveryCharges { tiers }
    }

    /// The shop's delivery pricing.
    pub fn standard() -> Self {
        DeliveryCharges::new([
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(495)),
            DeliveryTier::new(Money::from_cents(9000), Money::from_cents(295)),
        ])
    }

    /// Charge for a discounted subtotal.
    pub fn charge_for(&self, subtotal: Money) -> Money {
        if !subtotal.is_positive() {
            return Money::zero();
        }
        self.tiers
            .iter()
            .find(|tier| subtotal < tier.below)
            .map(|tier| tier.charge)
            .unwrap_or_default()
    }

    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }
}

impl Default for DeliveryCharges {
    fn default() -> Self {
        DeliveryCharges::standard()
    }
}
