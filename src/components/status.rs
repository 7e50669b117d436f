use crate::hooks::FetchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Local validation hint, shown when there is nothing else to report.
    #[prop_or_default]
    pub notice: Option<String>,
}

impl StatusProps {
    pub fn of<T>(state: &FetchState<T>) -> Self {
        Self {
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
            notice: None,
        }
    }
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }

    match (&props.error, &props.notice) {
        (Some(msg), _) => html! {
            <div class="status error">
                <p>{"❌ "}{msg}</p>
            </div>
        },
        (None, Some(notice)) => html! {
            <div class="status notice">
                <p>{notice}</p>
            </div>
        },
        (None, None) => html! {},
    }
}
