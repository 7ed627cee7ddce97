mod commands;
mod main_lib;

use clap::Parser;
use commands::Cli;
use main_lib::{build_state, init_tracing};
use spendzen_connect::RequestScope;
use spendzen_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let config = AppConfig::from_env()?;
    let state = build_state(config)?;
    tracing::debug!("Backend at {}", state.config.backend_url());

    // Dropping the scope on Ctrl-C cancels the in-flight request.
    let scope = RequestScope::new();
    tokio::select! {
        result = commands::run(cli.command, &state, scope.context()) => result,
        _ = tokio::signal::ctrl_c() => {
            scope.cancel();
            anyhow::bail!("Interrupted")
        }
    }
}
