pub mod market;

pub use market::{GraphQlResponse, MarketItem, MarketRateSnapshot, MarketState, RewardRate};
