//! # Widget Shell Library
//!
//! Interactive command loop around `widget-core`.
//!
//! ## Module Organization
//! ```text
//! widget_shell/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── cli.rs          ◄─── Command line flags (clap)
//! ├── config.rs       ◄─── Environment configuration
//! ├── commands.rs     ◄─── Line → Command parser
//! ├── session.rs      ◄─── Command → Basket call → rendered reply
//! ├── repl.rs         ◄─── Read/eval/print loop
//! └── error.rs        ◄─── Shell error type
//! ```
//!
//! ## Session State
//! The basket is created once in [`run`] and owned by the [`Session`]; it is
//! passed down explicitly rather than living in a global.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod session;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::ShellConfig;
use session::Session;

pub use error::{ShellError, ShellResult};

/// Runs the interactive shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags ─────────────► --delivery --json --prompt --verbose     │
/// │  2. Initialize Logging ──────► stderr, RUST_LOG overrides               │
/// │  3. Load Configuration ──────► WIDGET_SHOP_* env vars + flags           │
/// │  4. Build Session ───────────► standard basket (± delivery)             │
/// │  5. REPL ────────────────────► until `exit` or end of input             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.apply(ShellConfig::load().map_err(ShellError::from)?);
    info!(
        delivery = config.delivery_enabled,
        json = config.json_output,
        "Starting widget shell"
    );

    let mut session = Session::from_config(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let commands = repl::run_repl(&mut session, stdin.lock(), &mut stdout, &config.prompt)?;

    info!(commands, "Widget shell finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `widget_shell=info` (warnings from other crates)
/// - `--verbose`: `widget_shell=debug`
/// - `RUST_LOG` always wins when set
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,widget_shell=debug"
    } else {
        "warn,widget_shell=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
