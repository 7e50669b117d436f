use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};
use crate::models::demand::DemandForecast;
use crate::services::market_api::DemandFilter;

/// Handle returned by `use_demand_forecast` hook
#[derive(Clone, PartialEq)]
pub struct DemandForecastHandle {
    pub state: FetchState<DemandForecast>,
    pub refresh: Callback<DemandFilter>,
}

#[hook]
pub fn use_demand_forecast() -> DemandForecastHandle {
    let api = use_api();
    let state = use_state(|| FetchState::<DemandForecast>::Idle);
    let sequence = use_mut_ref(RequestSequence::default);

    let refresh = {
        let state = state.clone();
        Callback::from(move |filter: DemandFilter| {
            let api = api.clone();
            spawn_tracked(state.clone(), sequence.clone(), async move {
                api.demand_forecast(&filter).await
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(DemandFilter::default());
            || ()
        });
    }

    DemandForecastHandle {
        state: (*state).clone(),
        refresh,
    }
}
