use reqwest::Client;
use serde_json::json;

use crate::models::{GraphQlResponse, MarketItem, MarketRateSnapshot};

/// Result of one rate fetch. `Unavailable` is a normal outcome, not an error:
/// the next scheduled run simply tries again.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Available(MarketRateSnapshot),
    Unavailable(String),
}

#[derive(Clone)]
pub struct MorphoClient {
    http: Client,
    api_url: String,
}

impl MorphoClient {
    pub fn new(http: Client, api_url: String) -> Self {
        Self { http, api_url }
    }

    pub async fn markets(&self, chain_id: u64, market_id: &str) -> Result<GraphQlResponse, String> {
        let query = market_rates_query(chain_id, market_id);

        let res = self
            .http
            .post(&self.api_url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Morpho markets query failed: {status} {body}"));
        }

        res.json::<GraphQlResponse>().await.map_err(|e| e.to_string())
    }

    pub async fn fetch_rate(&self, chain_id: u64, market_id: &str) -> FetchOutcome {
        let res = match self.markets(chain_id, market_id).await {
            Ok(r) => r,
            Err(e) => return FetchOutcome::Unavailable(e),
        };

        let Some(raw) = res.first_item() else {
            return FetchOutcome::Unavailable(format!("no market items returned for {market_id}"));
        };

        // explicit nulls in the rate fields are malformed, not zero
        let market = match MarketItem::from_value(raw) {
            Ok(m) => m,
            Err(e) => return FetchOutcome::Unavailable(e),
        };

        let snapshot = MarketRateSnapshot::from_state(&market.state);

        FetchOutcome::Available(snapshot)
    }
}

pub fn market_rates_query(chain_id: u64, market_id: &str) -> String {
    format!(
        r#"
        query {{
            markets(
                where: {{
                    chainId_in: [{chain_id}]
                    uniqueKey_in: ["{market_id}"]
                }}
            ) {{
                items {{
                    uniqueKey
                    state {{
                        borrowApy
                        supplyApy
                        rewards {{
                            borrowApr
                            supplyApr
                        }}
                    }}
                }}
            }}
        }}
        "#
    )
}
