use chrono::{Local, NaiveDate};
use yew::prelude::*;

use super::{
    input_value, parse_date_input, price_table::PriceTable, select_value, status::{Status, StatusProps},
    trend_chart::TrendChart,
};
use crate::hooks::{use_market_prices::use_market_prices, use_price_trend::use_price_trend};
use crate::models::market::default_trend_vegetable;
use crate::services::market_api::MarketFilter;

/// Today's market prices with filters, followed by the monthly trend chart.
#[function_component(MarketPricesPage)]
pub fn market_prices_page() -> Html {
    let market = use_market_prices();

    let date = use_state(|| None::<NaiveDate>);
    let vegetable = use_state(String::new);
    let trend_month = use_state(|| Local::now().format("%Y-%m").to_string());
    let trend_vegetable = use_state(String::new);
    let trend = use_price_trend((*trend_month).clone(), (*trend_vegetable).clone());

    // Default the trend selector once vegetables are known.
    {
        let trend_vegetable = trend_vegetable.clone();
        use_effect_with(market.vegetables.clone(), move |vegetables| {
            if let Some(choice) = default_trend_vegetable(trend_vegetable.as_str(), vegetables) {
                if *trend_vegetable != choice {
                    trend_vegetable.set(choice);
                }
            }
            || ()
        });
    }

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| date.set(parse_date_input(&input_value(&e))))
    };
    let on_vegetable = {
        let vegetable = vegetable.clone();
        Callback::from(move |e: Event| vegetable.set(select_value(&e)))
    };
    let on_filter = {
        let apply_filter = market.apply_filter.clone();
        let date = date.clone();
        let vegetable = vegetable.clone();
        Callback::from(move |_: MouseEvent| {
            apply_filter.emit(MarketFilter {
                date: *date,
                vegetable: Some((*vegetable).clone()).filter(|v| !v.is_empty()),
            });
        })
    };
    let on_trend_month = {
        let trend_month = trend_month.clone();
        Callback::from(move |e: Event| trend_month.set(input_value(&e)))
    };
    let on_trend_vegetable = {
        let trend_vegetable = trend_vegetable.clone();
        Callback::from(move |e: Event| trend_vegetable.set(select_value(&e)))
    };

    let quotes = market
        .state
        .data()
        .map(|prices| prices.quotes.clone())
        .unwrap_or_default();
    let heading = market
        .state
        .data()
        .and_then(|prices| prices.date.clone())
        .map_or_else(
            || "Market Prices – Pettah, Dambulla, Narahenpita".to_string(),
            |d| format!("Market Prices for {d} – Pettah, Dambulla, Narahenpita"),
        );

    html! {
        <div class="market-prices-page">
            <section class="prices-section">
                <h1>{heading}</h1>
                <div class="filters">
                    <label class="filter">
                        <span>{"Date"}</span>
                        <input type="date" onchange={on_date} />
                    </label>
                    <label class="filter">
                        <span>{"Vegetable"}</span>
                        <select onchange={on_vegetable}>
                            <option value="" selected={vegetable.is_empty()}>{"All"}</option>
                            {
                                market.vegetables.iter().map(|v| html! {
                                    <option value={v.clone()} selected={*v == *vegetable}>{v}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <button class="primary-button" onclick={on_filter} disabled={market.state.is_loading()}>
                        {"Filter"}
                    </button>
                </div>
                <Status ..StatusProps::of(&market.state) />
                if market.state.data().is_some() {
                    <PriceTable {quotes} />
                }
            </section>

            <section class="trend-section">
                <h2>{"Price Trend"}</h2>
                <p class="trend-subtitle">{"Average wholesale price (Rs/kg)"}</p>
                <div class="filters">
                    <label class="filter">
                        <span>{"Month"}</span>
                        <input type="month" value={(*trend_month).clone()} onchange={on_trend_month} />
                    </label>
                    <label class="filter">
                        <span>{"Vegetable"}</span>
                        <select onchange={on_trend_vegetable}>
                            {
                                market.vegetables.iter().map(|v| html! {
                                    <option value={v.clone()} selected={*v == *trend_vegetable}>{v}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                </div>
                <Status ..StatusProps::of(&trend) />
                if let Some(data) = trend.data() {
                    <TrendChart trend={data.clone()} />
                }
            </section>
        </div>
    }
}
