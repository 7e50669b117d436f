use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};
use crate::models::trend::PriceTrend;

/// True once both selectors hold a value.
pub fn trend_selection_ready(month: &str, vegetable: &str) -> bool {
    !month.trim().is_empty() && !vegetable.trim().is_empty()
}

/// Re-fetches the price trend whenever the month or vegetable changes and
/// both are set. Clearing either one drops back to idle.
#[hook]
pub fn use_price_trend(month: String, vegetable: String) -> FetchState<PriceTrend> {
    let api = use_api();
    let state = use_state(|| FetchState::<PriceTrend>::Idle);
    let sequence = use_mut_ref(RequestSequence::default);

    {
        let state = state.clone();
        use_effect_with((month, vegetable), move |(month, vegetable)| {
            if trend_selection_ready(month, vegetable) {
                let (month, vegetable) = (month.clone(), vegetable.clone());
                spawn_tracked(state, sequence, async move {
                    api.price_trend(&month, &vegetable).await
                });
            } else {
                // Invalidate anything still in flight for the old selection.
                sequence.borrow_mut().issue();
                state.set(FetchState::Idle);
            }
            || ()
        });
    }

    (*state).clone()
}
