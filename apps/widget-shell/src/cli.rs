use clap::Parser;

use crate::config::ShellConfig;

#[derive(Debug, Parser)]
#[command(name = "widget-shell")]
#[command(about = "Interactive basket for the widget shop")]
#[command(version)]
pub struct Args {
    /// Add tiered delivery charges to basket totals
    #[arg(long)]
    pub delivery: bool,

    /// Render `total` and `widgets` as JSON
    #[arg(long)]
    pub json: bool,

    /// Prompt shown before each command
    #[arg(long)]
    pub prompt: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Flags only ever switch features on; an unset flag keeps the
    /// environment's value.
    pub fn apply(&self, mut config: ShellConfig) -> ShellConfig {
        config.delivery_enabled |= self.delivery;
        config.json_output |= self.json;
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        config
    }
}
