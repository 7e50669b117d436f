use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};
use crate::models::crop::{CropRecommendation, SoilInputs};

/// Handle returned by `use_crop_recommendation` hook
#[derive(Clone, PartialEq)]
pub struct CropRecommendationHandle {
    pub state: FetchState<CropRecommendation>,
    /// Set when the form was submitted with blank or invalid fields.
    pub notice: Option<String>,
    pub submit: Callback<SoilInputs>,
}

#[hook]
pub fn use_crop_recommendation() -> CropRecommendationHandle {
    let api = use_api();
    let state = use_state(|| FetchState::<CropRecommendation>::Idle);
    let notice = use_state(|| None::<String>);
    let sequence = use_mut_ref(RequestSequence::default);

    let submit = {
        let state = state.clone();
        let notice = notice.clone();
        Callback::from(move |inputs: SoilInputs| {
            if let Err(e) = inputs.parse() {
                notice.set(Some(e.to_string()));
                return;
            }

            notice.set(None);
            let api = api.clone();
            spawn_tracked(state.clone(), sequence.clone(), async move {
                api.recommend_crop(&inputs).await
            });
        })
    };

    CropRecommendationHandle {
        state: (*state).clone(),
        notice: (*notice).clone(),
        submit,
    }
}
