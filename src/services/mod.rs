pub mod http;
pub mod market_api;
