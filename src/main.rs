use std::process::ExitCode;

use felix_rate_bot::{AppState, config, services::rate_check};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let settings = config::load();
    tracing::debug!(
        chain_id = settings.chain_id,
        market_id = %settings.market_id,
        webhook_configured = settings.discord_webhook_url.is_some(),
        "loaded settings"
    );

    let state = match AppState::new(settings) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let outcome = rate_check::run(&state).await;
    tracing::info!(?outcome, "rate check finished");

    ExitCode::from(outcome.exit_status())
}
