use chrono::NaiveDate;
use yew::prelude::*;

use super::{FetchState, RequestSequence, spawn_tracked, use_api};
use crate::models::error::AppError;
use crate::models::market::PredictionOutcome;
use crate::services::market_api::PredictionRequest;

/// Date and vegetables chosen on the price prediction tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionSelection {
    pub date: Option<NaiveDate>,
    pub vegetables: Vec<String>,
}

impl PredictionSelection {
    /// Adds the vegetable if absent, removes it otherwise. Selection order is kept.
    pub fn toggle(&mut self, vegetable: &str) {
        if let Some(pos) = self.vegetables.iter().position(|v| v == vegetable) {
            self.vegetables.remove(pos);
        } else {
            self.vegetables.push(vegetable.to_string());
        }
    }

    pub fn is_selected(&self, vegetable: &str) -> bool {
        self.vegetables.iter().any(|v| v == vegetable)
    }

    /// Local check run before any request. Returns the message to show.
    pub fn validate(&self) -> Result<(), String> {
        PredictionRequest::new(self.date, &self.vegetables)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// A backend refusal is shown exactly like a transport failure.
pub fn accept_outcome(outcome: PredictionOutcome) -> Result<PredictionOutcome, AppError> {
    match outcome {
        PredictionOutcome::Rejected(message) => Err(AppError::Domain(message)),
        other => Ok(other),
    }
}

/// Handle returned by `use_price_prediction` hook
#[derive(Clone, PartialEq)]
pub struct PricePredictionHandle {
    pub state: FetchState<PredictionOutcome>,
    /// Validation hint shown instead of a result.
    pub notice: Option<String>,
    pub predict: Callback<PredictionSelection>,
}

/// Requests a prediction on demand. Repeated presses are not guarded; the
/// last issued request wins.
#[hook]
pub fn use_price_prediction() -> PricePredictionHandle {
    let api = use_api();
    let state = use_state(|| FetchState::<PredictionOutcome>::Idle);
    let notice = use_state(|| None::<String>);
    let sequence = use_mut_ref(RequestSequence::default);

    let predict = {
        let state = state.clone();
        let notice = notice.clone();
        Callback::from(move |selection: PredictionSelection| {
            if let Err(message) = selection.validate() {
                notice.set(Some(message));
                sequence.borrow_mut().issue();
                state.set(FetchState::Idle);
                return;
            }

            notice.set(None);
            let api = api.clone();
            spawn_tracked(state.clone(), sequence.clone(), async move {
                api.predict_prices(selection.date, &selection.vegetables)
                    .await
                    .and_then(accept_outcome)
            });
        })
    };

    PricePredictionHandle {
        state: (*state).clone(),
        notice: (*notice).clone(),
        predict,
    }
}
