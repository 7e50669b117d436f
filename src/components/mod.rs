pub mod ai_prediction;
pub mod backend_status;
pub mod crop_form;
pub mod demand_list;
pub mod market_prices;
pub mod price_table;
pub mod status;
pub mod trend_chart;

pub use ai_prediction::AiPredictionPage;
pub use backend_status::BackendStatus;
pub use market_prices::MarketPricesPage;

use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Parses the value of an `<input type="date">`; blank or invalid is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn input_value(e: &Event) -> String {
    let target: HtmlInputElement = e.target_unchecked_into();
    target.value()
}

pub(crate) fn select_value(e: &Event) -> String {
    let target: HtmlSelectElement = e.target_unchecked_into();
    target.value()
}
