//! # Error Types
//!
//! Domain-specific error types for widget-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  widget-core errors (this file)                                         │
//! │  └── CoreError        - Basket/catalog failures (unknown item code)     │
//! │                                                                         │
//! │  widget-shell errors (separate crate)                                   │
//! │  └── ShellError       - I/O, configuration, rendering                   │
//! │                                                                         │
//! │  Flow: CoreError::UnknownItemCode → shell message                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding an unrecognised code is the only way the core can fail. Codes are
//! matched exactly, so malformed input is just another unknown code and
//! callers only ever match a single variant.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The code does not name an item in the catalog.
    ///
    /// ## When This Occurs
    /// ```text
    /// add "X99"
    ///      │
    ///      ▼
    /// Catalog lookup: no entry
    ///      │
    ///      ▼
    /// UnknownItemCode("X99")   (basket left unchanged)
    ///      │
    ///      ▼
    /// Shell prints the message and keeps the session going
    /// ```
    #[error("Catalog does not contain widget with code {0}")]
    UnknownItemCode(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
