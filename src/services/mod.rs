pub mod morpho;
pub mod discord;
pub mod marker;

pub mod rate_check;
