use crate::hooks::{FetchState, use_backend_status::use_backend_status};
use yew::prelude::*;

/// Small header badge telling whether the backend answered `/hello`.
#[function_component(BackendStatus)]
pub fn backend_status() -> Html {
    let state = use_backend_status();

    let (class, label, title) = match &state {
        FetchState::Idle | FetchState::Loading => {
            ("backend-status checking", "Checking backend…".to_string(), String::new())
        }
        FetchState::Loaded(message) => (
            "backend-status online",
            "Backend online".to_string(),
            message.to_string(),
        ),
        FetchState::Error(msg) => ("backend-status offline", "Backend offline".to_string(), msg.clone()),
    };

    html! {
        <span {class} {title}>{label}</span>
    }
}
