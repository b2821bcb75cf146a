//! iptrack - locate IPv4 and IPv6 addresses from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    iptrack_cli::run().await
}
