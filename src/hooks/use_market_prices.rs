use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};
use crate::models::market::MarketPrices;
use crate::services::market_api::MarketFilter;

/// Handle returned by `use_market_prices` hook
#[derive(Clone, PartialEq)]
pub struct MarketPricesHandle {
    pub state: FetchState<MarketPrices>,
    /// Distinct vegetables of the most recent response, sorted.
    pub vegetables: Vec<String>,
    pub apply_filter: Callback<MarketFilter>,
}

/// Fetches unfiltered market prices on mount, then again on every filter.
#[hook]
pub fn use_market_prices() -> MarketPricesHandle {
    let api = use_api();
    let state = use_state(|| FetchState::<MarketPrices>::Idle);
    let sequence = use_mut_ref(RequestSequence::default);
    let known_vegetables = use_mut_ref(Vec::<String>::new);

    let apply_filter = {
        let state = state.clone();
        let sequence = sequence.clone();
        Callback::from(move |filter: MarketFilter| {
            let api = api.clone();
            spawn_tracked(state.clone(), sequence.clone(), async move {
                api.market_prices(&filter).await
            });
        })
    };

    {
        let apply_filter = apply_filter.clone();
        use_effect_with((), move |_| {
            apply_filter.emit(MarketFilter::default());
            || ()
        });
    }

    // Keep the last list while a new request is in flight.
    if let Some(prices) = state.data() {
        *known_vegetables.borrow_mut() = prices.vegetables();
    }
    let vegetables = known_vegetables.borrow().clone();

    MarketPricesHandle {
        state: (*state).clone(),
        vegetables,
        apply_filter,
    }
}
