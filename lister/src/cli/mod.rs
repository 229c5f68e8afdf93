//! CLI module for endpoint-lister
//!
//! Without arguments the tool prints the plain-text listing and exits.

/// Listing command
pub mod list;

pub use list::execute;

use clap::{Parser, ValueEnum};
use endpoint_lister_common::EndpointGroup;

/// Endpoint Lister - prints the endpoints still to be moved to the multi-trip API
#[derive(Parser, Debug)]
#[command(name = "endpoint-lister")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    ENDPOINT_LISTER_LOG_LEVEL   Log filter for stderr diagnostics (default: warn)
    LOG_LEVEL                   Deprecated alias of ENDPOINT_LISTER_LOG_LEVEL
    RUST_LOG                    Used when neither of the above is set
"#)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only list one group (contributions, expenses, members, budget)
    #[arg(long, value_parser = parse_group)]
    pub group: Option<EndpointGroup>,
}

/// Listing output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable blocks
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

fn parse_group(value: &str) -> Result<EndpointGroup, String> {
    value.parse().map_err(|e: endpoint_lister_common::CommonError| e.to_string())
}
