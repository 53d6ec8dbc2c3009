use std::fmt;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

pub const ALERT_COLOR: u32 = 0xFF6B6B;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    MissingWebhookUrl,
    Transport(String),
    UnexpectedStatus(u16),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::MissingWebhookUrl => write!(f, "DISCORD_WEBHOOK_URL is not set"),
            NotifyError::Transport(e) => write!(f, "webhook request failed: {e}"),
            NotifyError::UnexpectedStatus(code) => {
                write!(f, "webhook responded with status {code}, expected 204")
            }
        }
    }
}

impl std::error::Error for NotifyError {}

#[derive(Clone)]
pub struct DiscordNotifier {
    http: Client,
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    pub fn new(http: Client, webhook_url: Option<String>) -> Self {
        Self {
            http,
            webhook_url: webhook_url.filter(|u| !u.trim().is_empty()),
        }
    }

    /// Posts the rate alert embed. Only a 204 counts as delivered.
    pub async fn send_rate_alert(
        &self,
        net_rate: f64,
        borrow_apy: f64,
        reward_apr: f64,
    ) -> Result<(), NotifyError> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Err(NotifyError::MissingWebhookUrl);
        };

        let res = self
            .http
            .post(url)
            .json(&rate_alert_payload(net_rate, borrow_apy, reward_apr))
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        match res.status() {
            StatusCode::NO_CONTENT => Ok(()),
            other => Err(NotifyError::UnexpectedStatus(other.as_u16())),
        }
    }
}

pub fn rate_alert_payload(net_rate: f64, borrow_apy: f64, reward_apr: f64) -> Value {
    json!({ "embeds": [rate_alert_embed(net_rate, borrow_apy, reward_apr)] })
}

pub fn rate_alert_embed(net_rate: f64, borrow_apy: f64, reward_apr: f64) -> Value {
    json!({
        "title": "🚨 Felix Rate Alert",
        "description": "**UBTC/USDH net borrow rate has turned positive!**",
        "color": ALERT_COLOR,
        "fields": [
            { "name": "📊 Net Rate", "value": format!("**{net_rate:.2}%**"), "inline": true },
            { "name": "💰 Borrow APY", "value": format!("{borrow_apy:.2}%"), "inline": true },
            // rewards reduce the cost, so they're shown as a negative contribution
            { "name": "🎁 Reward APR", "value": format!("-{reward_apr:.2}%"), "inline": true },
            { "name": "⚠️ Action", "value": "Consider closing the position", "inline": false }
        ],
        "footer": { "text": "Felix Vanilla | UBTC collateral → USDH borrow" }
    })
}
