//! # Shell Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  CoreError::UnknownItemCode ──► printed to the user, session continues │
//! │                                                                         │
//! │  ShellError::Io / Render    ──► REPL stops, main reports it            │
//! │  ShellError::Config         ──► startup fails, main reports it         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Basket errors never become a `ShellError`: they are user mistakes, not
//! failures of the program.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment configuration was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON rendering failed.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
