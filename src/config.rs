use std::env;
use std::path::PathBuf;

pub const DEFAULT_MORPHO_API_URL: &str = "https://blue-api.morpho.org/graphql";
// Felix Vanilla UBTC/USDH on HyperEVM
pub const DEFAULT_MARKET_ID: &str =
    "0x87272614b7a2022c31ddd7bba8eb21d5ab40a6bcbea671264d59dc732053721d";
pub const DEFAULT_CHAIN_ID: u64 = 999;
pub const DEFAULT_RATE_THRESHOLD: f64 = 0.0;
pub const DEFAULT_MARKER_PATH: &str = "NOTIFICATION_SENT";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Settings {
    pub morpho_api_url: String,
    pub market_id: String,
    pub chain_id: u64,

    /// Net rate (percent) at or above which the alert fires.
    pub rate_threshold: f64,

    pub discord_webhook_url: Option<String>,
    pub marker_path: PathBuf,
    pub http_timeout_secs: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    from_lookup(|key| env::var(key).ok())
}

/// Builds settings from an arbitrary key lookup so tests don't have to touch
/// the process environment.
pub fn from_lookup<F>(get: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let morpho_api_url = get("MORPHO_API_URL")
        .unwrap_or_else(|| DEFAULT_MORPHO_API_URL.to_string());

    let market_id = get("MARKET_ID")
        .unwrap_or_else(|| DEFAULT_MARKET_ID.to_string());

    let chain_id = get("CHAIN_ID")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CHAIN_ID);

    let rate_threshold = get("RATE_THRESHOLD")
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
        .unwrap_or(DEFAULT_RATE_THRESHOLD);

    let discord_webhook_url = get("DISCORD_WEBHOOK_URL")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let marker_path = get("MARKER_PATH")
        .unwrap_or_else(|| DEFAULT_MARKER_PATH.to_string())
        .into();

    let http_timeout_secs = get("HTTP_TIMEOUT_SECS")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    Settings {
        morpho_api_url,
        market_id,
        chain_id,
        rate_threshold,
        discord_webhook_url,
        marker_path,
        http_timeout_secs,
    }
}
