//! # Catalog
//!
//! The fixed set of widgets the shop sells.
//!
//! ## Standard Catalog
//! ```text
//! ┌──────────┬────────────────┬────────────┐
//! │  code    │  name          │ unit price │
//! ├──────────┼────────────────┼────────────┤
//! │  R01     │  Red Widget    │   $32.95   │
//! │  G01     │  Green Widget  │   $24.95   │
//! │  B01     │  Blue Widget   │    $7.95   │
//! └──────────┴────────────────┴────────────┘
//! ```
//!
//! Codes are a closed enum rather than free strings: the set of valid codes
//! is known at compile time and string input is parsed once at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Item Code
// =============================================================================

/// Code identifying a widget.
///
/// Variant order is catalog order, so ordered collections keyed by
/// `ItemCode` iterate in the same order as [`Catalog::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemCode {
    R01,
    G01,
    B01,
}

impl ItemCode {
    /// All codes, in catalog order.
    pub const ALL: [ItemCode; 3] = [ItemCode::R01, ItemCode::G01, ItemCode::B01];

    /// Canonical string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemCode::R01 => "R01",
            ItemCode::G01 => "G01",
            ItemCode::B01 => "B01",
        }
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a canonical code such as `"R01"`.
///
/// Matching is exact: `"r01"` or `" R01"` is an
/// [`CoreError::UnknownItemCode`] carrying the raw text.
impl FromStr for ItemCode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        ItemCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownItemCode(s.to_string()))
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A widget available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Business identifier.
    pub code: ItemCode,

    /// Display name shown in listings.
    pub name: String,

    /// Price per unit before any discount.
    pub unit_price: Money,
}

impl CatalogEntry {
    pub fn new(code: ItemCode, name: impl Into<String>, unit_price: Money) -> Self {
        CatalogEntry {
            code,
            name: name.into(),
            unit_price,
        }
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}, price {}, order with code {}",
            self.name, self.unit_price, self.code
        )
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable lookup table from [`ItemCode`] to [`CatalogEntry`].
///
/// ## Invariants
/// - At most one entry per code
/// - `all()` returns entries in creation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog; a later entry with the same code replaces the earlier
    /// one in place.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Catalog {
            entries: Vec::new(),
        };
        for entry in entries {
            match catalog.entries.iter_mut().find(|e| e.code == entry.code) {
                Some(existing) => *existing = entry,
                None => catalog.entries.push(entry),
            }
        }
        catalog
    }

    /// The shop's catalog.
    pub fn standard() -> Self {
        Catalog::new([
            CatalogEntry::new(ItemCode::R01, "Red Widget", Money::from_cents(3295)),
            CatalogEntry::new(ItemCode::G01, "Green Widget", Money::from_cents(2495)),
            CatalogEntry::new(ItemCode::B01, "Blue Widget", Money::from_cents(795)),
        ])
    }

    /// Finds the entry for a code.
    pub fn lookup(&self, code: ItemCode) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Finds the entry for raw user input.
    ///
    /// ## Errors
    /// [`CoreError::UnknownItemCode`] if the input does not parse or the code
    /// is not stocked by this catalog.
    pub fn get(&self, code: &str) -> CoreResult<&CatalogEntry> {
        let parsed: ItemCode = code.parse()?;
        self.lookup(parsed)
            .ok_or_else(|| CoreError::UnknownItemCode(parsed.to_string()))
    }

    /// Checks whether a code is stocked.
    pub fn contains(&self, code: ItemCode) -> bool {
        self.lookup(code).is_some()
    }

    /// Unit price for a code, if stocked.
    pub fn unit_price(&self, code: ItemCode) -> Option<Money> {
        self.lookup(code).map(|e| e.unit_price)
    }

    /// All entries in creation order.
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

/// One line per entry, as printed by the shell's `catalog` command.
impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
