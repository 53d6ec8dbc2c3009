#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use felix_rate_bot::{AppState, config};
use serde_json::Value;

/// Canned-response HTTP endpoint that records every JSON body it receives.
#[derive(Clone)]
pub struct MockEndpoint {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockEndpoint {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn json(body: Value) -> Self {
        Self::new(StatusCode::OK, body.to_string())
    }

    pub fn status(status: StatusCode) -> Self {
        Self::new(status, String::new())
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Serves this endpoint on an ephemeral port and returns its URL.
    pub async fn serve(&self) -> String {
        let app = Router::new()
            .route("/", post(handle))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/")
    }
}

async fn handle(State(mock): State<MockEndpoint>, body: String) -> impl IntoResponse {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.received.lock().unwrap().push(parsed);

    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.body.clone(),
    )
}

/// GraphQL payload for a single market.
pub fn market_body(raw_borrow_apy: f64, raw_reward_aprs: &[f64]) -> Value {
    let rewards: Vec<Value> = raw_reward_aprs
        .iter()
        .map(|r| serde_json::json!({ "borrowApr": r, "supplyApr": 0.0 }))
        .collect();

    serde_json::json!({
        "data": { "markets": { "items": [ {
            "uniqueKey": config::DEFAULT_MARKET_ID,
            "state": {
                "borrowApy": raw_borrow_apy,
                "supplyApy": 0.01,
                "rewards": rewards
            }
        } ] } }
    })
}

pub fn empty_items_body() -> Value {
    serde_json::json!({ "data": { "markets": { "items": [] } } })
}

/// Fresh marker path under the temp dir; any leftover from a previous run is removed.
pub fn temp_marker(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "felix-rate-bot-{}-{name}-NOTIFICATION_SENT",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

pub fn test_settings(
    morpho_api_url: String,
    discord_webhook_url: Option<String>,
    marker_path: PathBuf,
) -> config::Settings {
    let mut settings = config::from_lookup(|_| None);
    settings.morpho_api_url = morpho_api_url;
    settings.discord_webhook_url = discord_webhook_url;
    settings.marker_path = marker_path;
    settings.http_timeout_secs = 5;
    settings
}

pub fn test_state(settings: config::Settings) -> AppState {
    AppState::new(settings).expect("http client")
}
