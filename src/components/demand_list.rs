use crate::models::{demand::DemandForecast, market::format_price};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DemandListProps {
    pub forecast: Rc<DemandForecast>,
}

/// One bar per vegetable, sized by demand level.
#[function_component(DemandList)]
pub fn demand_list(props: &DemandListProps) -> Html {
    let forecast = &props.forecast;

    if forecast.entries.is_empty() {
        return html! {
            <p class="demand-empty">{"No demand forecast available"}</p>
        };
    }

    html! {
        <div class="demand-forecast">
            if !forecast.month.is_empty() {
                <h3>{format!("Demand forecast for {}", forecast.month)}</h3>
            }
            <ul class="demand-list">
                {
                    forecast.entries.iter().map(|entry| {
                        let level = entry.demand_level;
                        let change_class = if entry.price_change >= 0.0 { "price-increase" } else { "price-decrease" };
                        html! {
                            <li class="demand-item">
                                <div class="demand-head">
                                    <span class="demand-vegetable">{&entry.vegetable}</span>
                                    <span class="demand-range">{&entry.date_range}</span>
                                </div>
                                <div class="demand-track">
                                    <div
                                        class={classes!("demand-bar", level.css_class())}
                                        style={entry.bar_style()}
                                    >
                                        {level.label()}
                                    </div>
                                </div>
                                <div class="demand-meta">
                                    <span>{format_price(entry.current_price)}</span>
                                    <span class={change_class}>{entry.price_change_label()}</span>
                                </div>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
