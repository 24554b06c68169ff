use anyhow::Result;
use clap::Parser;

use filesearcher::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Bare invocation shows the banner instead of scanning
    if std::env::args_os().len() <= 1 {
        cli::print_banner();
        return Ok(());
    }

    let cli = Cli::parse();
    cli.run().await
}
