use yew::prelude::*;

use super::{
    crop_form::{CropForm, CropResult},
    demand_list::DemandList,
    input_value, parse_date_input,
    price_table::PriceTable,
    status::{Status, StatusProps},
};
use crate::config::Config;
use crate::hooks::{
    use_crop_recommendation::use_crop_recommendation,
    use_demand_forecast::use_demand_forecast,
    use_price_prediction::{PredictionSelection, use_price_prediction},
};
use crate::models::market::PredictionOutcome;
use crate::services::market_api::DemandFilter;

/// Tabs of the AI prediction page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    PricePrediction,
    DemandForecast,
    CropRecommendation,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::PricePrediction, Self::DemandForecast, Self::CropRecommendation];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::PricePrediction => "Price Prediction",
            Self::DemandForecast => "Demand Forecast",
            Self::CropRecommendation => "Crop Recommendation",
        }
    }
}

#[function_component(AiPredictionPage)]
pub fn ai_prediction_page() -> Html {
    let active = use_state(Tab::default);

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let onclick = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(tab))
            };
            let class = classes!("tab-button", (*active == tab).then_some("active"));
            html! { <button {class} {onclick}>{tab.label()}</button> }
        })
        .collect::<Html>();

    html! {
        <div class="ai-prediction-page">
            <aside class="tab-list">{tabs}</aside>
            <div class="tab-panel">
                {
                    match *active {
                        Tab::PricePrediction => html! { <PricePredictionPanel /> },
                        Tab::DemandForecast => html! { <DemandForecastPanel /> },
                        Tab::CropRecommendation => html! { <CropRecommendationPanel /> },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(PricePredictionPanel)]
fn price_prediction_panel() -> Html {
    let prediction = use_price_prediction();
    let selection = use_state(PredictionSelection::default);

    let on_date = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            let mut next = (*selection).clone();
            next.date = parse_date_input(&input_value(&e));
            selection.set(next);
        })
    };

    let checkboxes = Config::VEGETABLE_OPTIONS
        .into_iter()
        .map(|veg| {
            let onchange = {
                let selection = selection.clone();
                Callback::from(move |_: Event| {
                    let mut next = (*selection).clone();
                    next.toggle(veg);
                    selection.set(next);
                })
            };
            html! {
                <label class="vegetable-option">
                    <input type="checkbox" checked={selection.is_selected(veg)} {onchange} />
                    <span>{veg}</span>
                </label>
            }
        })
        .collect::<Html>();

    let on_show = {
        let predict = prediction.predict.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| predict.emit((*selection).clone()))
    };

    let loading = prediction.state.is_loading();
    let result = match prediction.state.data().map(|o| &**o) {
        Some(PredictionOutcome::Prices(map)) => html! {
            <>
                <p class="prediction-summary">{map.summary()}</p>
                <PriceTable quotes={map.quotes().to_vec()} />
            </>
        },
        Some(PredictionOutcome::Legacy(text)) => html! {
            <p class="prediction-summary">{text}</p>
        },
        // Refusals are already mapped to the error state.
        Some(PredictionOutcome::Rejected(_)) | None => html! {},
    };

    html! {
        <div class="panel price-prediction">
            <div class="prediction-inputs">
                <label class="filter">
                    <span>{"Date"}</span>
                    <input type="date" onchange={on_date} />
                </label>
                <div class="vegetable-options">{checkboxes}</div>
                <button class="primary-button" onclick={on_show} disabled={loading}>
                    { if loading { "Loading..." } else { "Show Price" } }
                </button>
            </div>
            <Status
                loading={loading}
                error={prediction.state.error().map(str::to_string)}
                notice={prediction.notice.clone()}
            />
            {result}
        </div>
    }
}

#[function_component(DemandForecastPanel)]
fn demand_forecast_panel() -> Html {
    let demand = use_demand_forecast();
    let month = use_state(String::new);

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: Event| month.set(input_value(&e)))
    };
    let on_refresh = {
        let refresh = demand.refresh.clone();
        let month = month.clone();
        Callback::from(move |_: MouseEvent| {
            refresh.emit(DemandFilter {
                month: Some((*month).clone()).filter(|m| !m.is_empty()),
                vegetable: None,
            });
        })
    };

    html! {
        <div class="panel demand-forecast-panel">
            <div class="filters">
                <label class="filter">
                    <span>{"Month"}</span>
                    <input type="month" onchange={on_month} />
                </label>
                <button class="primary-button" onclick={on_refresh} disabled={demand.state.is_loading()}>
                    {"Update"}
                </button>
            </div>
            <Status ..StatusProps::of(&demand.state) />
            if let Some(forecast) = demand.state.data() {
                <DemandList forecast={forecast.clone()} />
            }
        </div>
    }
}

#[function_component(CropRecommendationPanel)]
fn crop_recommendation_panel() -> Html {
    let crop = use_crop_recommendation();

    html! {
        <div class="panel crop-panel">
            <CropForm on_submit={crop.submit.clone()} loading={crop.state.is_loading()} />
            <Status
                loading={crop.state.is_loading()}
                error={crop.state.error().map(str::to_string)}
                notice={crop.notice.clone()}
            />
            if let Some(recommendation) = crop.state.data() {
                <CropResult recommendation={recommendation.clone()} />
            }
        </div>
    }
}
