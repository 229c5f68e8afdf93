//! Endpoint Lister Entry Point

use clap::Parser;
use endpoint_lister::cli::{execute, Cli};
use endpoint_lister::logging;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: {:#}", e);
    }
    debug!("Endpoint Lister v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    if let Err(e) = execute(&cli, stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
