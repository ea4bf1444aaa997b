//! # Session
//!
//! Executes parsed commands against the session's basket and renders the
//! result as text (or JSON for `total` and `widgets`).
//!
//! ## Command Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command          Basket call           Reply                           │
//! │  ───────          ───────────           ─────                           │
//! │  Add(code)  ────► add(code) ─────────►  Silent, or error message        │
//! │  Total      ────► total()   ─────────►  "57.90"                         │
//! │  Widgets    ────► widgets() ─────────►  "Red Widget: 1" lines or "[]"   │
//! │  Catalog    ────► catalog() ─────────►  one line per entry              │
//! │  Offers     ────► offers()  ─────────►  offer descriptions              │
//! │  Clear      ────► clear()   ─────────►  Silent                          │
//! │  Exit       ────► (none)    ─────────►  Exit                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};
use widget_core::{Basket, BasketTotals, DeliveryCharges};

use crate::commands::{Command, HELP};
use crate::config::ShellConfig;
use crate::error::ShellResult;

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Text(String),
    /// Nothing to print.
    Silent,
    /// End the session.
    Exit,
}

/// Output rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON view of [`BasketTotals`] with amounts as decimal strings.
///
/// `subtotal − discount + delivery = total` holds for the printed figures:
/// the discount shown absorbs the final rounding of the total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalsView {
    item_count: u32,
    subtotal: String,
    discount: String,
    delivery: String,
    total: String,
}

impl From<BasketTotals> for TotalsView {
    fn from(totals: BasketTotals) -> Self {
        let subtotal = totals.subtotal.round_to_cents();
        let delivery = totals.delivery.round_to_cents();
        TotalsView {
            item_count: totals.item_count,
            subtotal: subtotal.to_decimal_string(),
            discount: (subtotal + delivery - totals.total).to_decimal_string(),
            delivery: delivery.to_decimal_string(),
            total: totals.total.to_decimal_string(),
        }
    }
}

/// One interactive session: a basket plus rendering preferences.
#[derive(Debug)]
pub struct Session {
    basket: Basket,
    format: OutputFormat,
}

impl Session {
    pub fn new(basket: Basket, format: OutputFormat) -> Self {
        Session { basket, format }
    }

    /// Builds the session basket described by `config`.
    pub fn from_config(config: &ShellConfig) -> Self {
        let basket = if config.delivery_enabled {
            Basket::standard().with_delivery(DeliveryCharges::standard())
        } else {
            Basket::standard()
        };
        let format = if config.json_output {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Session::new(basket, format)
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Runs one command.
    ///
    /// ## Errors
    /// Only JSON rendering can fail. An unknown item code is reported as
    /// [`Reply::Text`] and leaves the basket untouched.
    pub fn execute(&mut self, command: Command) -> ShellResult<Reply> {
        debug!(?command, "executing command");

        let reply = match command {
            Command::Add(code) => match self.basket.add(&code) {
                Ok(()) => {
                    debug!(code = %code, items = self.basket.item_count(), "widget added");
                    Reply::Silent
                }
                Err(err) => {
                    warn!(code = %code, %err, "rejected widget code");
                    Reply::Text(format!("Encountered error while adding widget: {}", err))
                }
            },
            Command::MalformedAdd => Reply::Text("Unrecognized 'add' command".to_string()),
            Command::Total => Reply::Text(self.render_total()?),
            Command::Widgets => Reply::Text(self.render_widgets()?),
            Command::Catalog => Reply::Text(self.basket.catalog().to_string()),
            Command::Offers => Reply::Text(self.render_offers()),
            Command::Clear => {
                self.basket.clear();
                Reply::Silent
            }
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Exit => Reply::Exit,
            Command::Empty => Reply::Silent,
            Command::Unknown(_) => Reply::Text("Unknown input".to_string()),
        };

        Ok(reply)
    }

    fn render_total(&self) -> ShellResult<String> {
        match self.format {
            OutputFormat::Text => Ok(self.basket.total().to_decimal_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&TotalsView::from(
                self.basket.totals(),
            ))?),
        }
    }

    fn render_widgets(&self) -> ShellResult<String> {
        let lines = self.basket.widgets();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&lines)?),
            OutputFormat::Text if lines.is_empty() => {
                Ok("📦️ Current widgets 📦️\n[]".to_string())
            }
            OutputFormat::Text => {
                let body = lines
                    .iter()
                    .map(|line| format!("{}: {}", line.name, line.quantity))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(format!("📦️ Current widgets 📦️\n{}", body))
            }
        }
    }

    fn render_offers(&self) -> String {
        let mut out = match self.basket.offers().descriptions().as_slice() {
            [] => "Sad, no offers available this time.".to_string(),
            descriptions => format!("🔥 Offers available 🔥\n{}", descriptions.join("\n")),
        };
        if let Some(delivery) = self.basket.delivery() {
            out.push_str("\nDelivery charges:");
            for tier in delivery.tiers() {
                out.push_str(&format!(
                    "\n- orders under {}: {}",
                    tier.below, tier.charge
                ));
            }
            out.push_str("\n- all other orders: free");
        }
        out
    }
}
