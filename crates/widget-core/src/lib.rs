//! # widget-core: Pure Pricing Logic for the Widget Shop
//!
//! This crate holds the catalog, basket and promotion rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Widget Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 widget-shell (REPL binary)                      │   │
//! │  │    add R01 ──► total ──► widgets ──► catalog ──► offers         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ parsed commands                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ widget-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │  basket   │  │  offers   │  │   │
//! │  │   │  ItemCode │  │   Money   │  │  Basket   │  │  Offer    │  │   │
//! │  │   │  Entry    │  │  (mills)  │  │  Totals   │  │  OfferSet │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Item codes and the fixed catalog
//! - [`basket`] - Basket state and total computation
//! - [`offers`] - Promotional discount rules
//! - [`delivery`] - Tiered delivery charges
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every read is deterministic - same basket = same total
//! 2. **No I/O**: Printing and prompting belong to the shell
//! 3. **Integer Money**: Amounts are mills (i64), rounded to cents once
//! 4. **Explicit Errors**: Unknown codes are a typed error, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use widget_core::Basket;
//!
//! let mut basket = Basket::standard();
//! basket.add("R01").unwrap();
//! basket.add("R01").unwrap();
//! basket.add("G01").unwrap();
//!
//! // Second red widget is half price: 32.95 + 16.475 + 24.95
//! assert_eq!(basket.total().to_decimal_string(), "74.38");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offers;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketLine, BasketTotals, ItemCounts};
pub use catalog::{Catalog, CatalogEntry, ItemCode};
pub use delivery::{DeliveryCharges, DeliveryTier};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use offers::{HalfPriceSecond, Offer, OfferSet};
