//! Library entrypoint for the Felix rate bot.
//!
//! The binary is a thin wrapper; keeping the pieces here lets integration
//! tests under `tests/` run a full check against local mock servers.

use std::time::Duration;

pub mod config;
pub mod models;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub morpho: services::morpho::MorphoClient,
    pub discord: services::discord::DiscordNotifier,
}

impl AppState {
    /// Builds the shared HTTP client (bounded timeout) and both service clients.
    pub fn new(settings: config::Settings) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()
            .map_err(|e| e.to_string())?;

        let morpho =
            services::morpho::MorphoClient::new(http.clone(), settings.morpho_api_url.clone());
        let discord =
            services::discord::DiscordNotifier::new(http, settings.discord_webhook_url.clone());

        Ok(Self {
            settings,
            morpho,
            discord,
        })
    }
}
