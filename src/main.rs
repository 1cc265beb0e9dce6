use anyhow::Result;
use todoctl::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG can raise verbosity; errors only by default so the table
    // output stays clean.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::ERROR.into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    Cli::menu().await
}
