use serde::Deserialize;
use serde_json::Value;

// Wire shapes of the Morpho GraphQL `markets` query.
// Absent rate keys default to 0; an explicit `null` fails to deserialize,
// which the fetcher reports as "no data".

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<MarketsData>,
}

#[derive(Debug, Deserialize)]
pub struct MarketsData {
    pub markets: Option<MarketPage>,
}

/// Items stay raw so only the first one has to be well-formed.
#[derive(Debug, Deserialize)]
pub struct MarketPage {
    pub items: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct MarketItem {
    #[serde(rename = "uniqueKey", default)]
    pub unique_key: Option<String>,

    #[serde(default)]
    pub state: MarketState,
}

/// Rates are fractions (0.05 == 5%).
#[derive(Debug, Default, Deserialize)]
pub struct MarketState {
    #[serde(rename = "borrowApy", default)]
    pub borrow_apy: f64,

    #[serde(rename = "supplyApy", default)]
    pub supply_apy: Option<f64>,

    #[serde(default)]
    pub rewards: Vec<RewardRate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RewardRate {
    #[serde(rename = "borrowApr", default)]
    pub borrow_apr: f64,

    #[serde(rename = "supplyApr", default)]
    pub supply_apr: Option<f64>,
}

impl GraphQlResponse {
    /// First raw market item, if the payload carries one.
    pub fn first_item(&self) -> Option<&Value> {
        self.data
            .as_ref()?
            .markets
            .as_ref()?
            .items
            .as_ref()?
            .first()
    }
}

impl MarketItem {
    pub fn from_value(raw: &Value) -> Result<Self, String> {
        Self::deserialize(raw).map_err(|e| format!("malformed market item: {e}"))
    }
}

/// Borrow-side rates for one market, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketRateSnapshot {
    pub borrow_apy: f64,
    pub reward_apr: f64,
    pub net_rate: f64,
}

impl MarketRateSnapshot {
    /// `raw_borrow_apy` and the reward aprs are fractions as returned by the API.
    pub fn from_raw<I>(raw_borrow_apy: f64, raw_reward_aprs: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let borrow_apy = raw_borrow_apy * 100.0;
        // fold from +0.0: an empty `sum()` yields -0.0, which prints as "-0.00"
        let reward_apr = raw_reward_aprs
            .into_iter()
            .fold(0.0, |acc, r| acc + r * 100.0);

        Self {
            borrow_apy,
            reward_apr,
            net_rate: borrow_apy - reward_apr,
        }
    }

    pub fn from_state(state: &MarketState) -> Self {
        let rewards = state.rewards.iter().map(|r| r.borrow_apr);

        Self::from_raw(state.borrow_apy, rewards)
    }
}
