//! # Widget Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line flags
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration from the environment, apply flag overrides
//! 4. Build the session basket
//! 5. Run the REPL on stdin/stdout until `exit` or end of input

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    widget_shell::run()
}
