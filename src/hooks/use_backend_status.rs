use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};

/// Probes `/hello` once on mount.
#[hook]
pub fn use_backend_status() -> FetchState<String> {
    let api = use_api();
    let state = use_state(|| FetchState::<String>::Idle);
    let sequence = use_mut_ref(RequestSequence::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_tracked(state, sequence, async move { api.hello().await });
            || ()
        });
    }

    (*state).clone()
}
