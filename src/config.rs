//! Command-line configuration.

use clap::Parser;

pub const DEFAULT_PROMPT: &str = "Calculator> ";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for one calculator session.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(name = "calcline", version, about = "Interactive decimal calculator")]
pub struct CalculatorConfig {
    /// Prompt shown before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Skip the welcome banner
    #[arg(long = "no-banner", action = clap::ArgAction::SetFalse)]
    pub show_banner: bool,

    /// Log filter written to stderr (e.g. `debug`, `calcline=trace`)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
