use yew::prelude::*;

use smartagro_dashboard::components::{AiPredictionPage, BackendStatus, MarketPricesPage};
use smartagro_dashboard::hooks::ApiContext;
use smartagro_dashboard::services::http::ApiConfig;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    MarketPrices,
    AiPrediction,
}

impl Page {
    const fn label(self) -> &'static str {
        match self {
            Self::MarketPrices => "MARKET PRICES",
            Self::AiPrediction => "AI PREDICTION",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::MarketPrices);
    let api = use_memo((), |_| ApiContext::new(ApiConfig::default()));

    let nav = [Page::MarketPrices, Page::AiPrediction]
        .into_iter()
        .map(|target| {
            let onclick = {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| page.set(target))
            };
            let class = classes!("nav-link", (*page == target).then_some("active"));
            html! { <button {class} {onclick}>{target.label()}</button> }
        })
        .collect::<Html>();

    let content = match &*api {
        Ok(context) => html! {
            <ContextProvider<ApiContext> context={context.clone()}>
                <header class="app-header">
                    <span class="brand">{"SMARTAGRO"}</span>
                    <nav class="app-nav">{nav}</nav>
                    <BackendStatus />
                </header>
                <main class="app-main">
                    {
                        match *page {
                            Page::MarketPrices => html! { <MarketPricesPage /> },
                            Page::AiPrediction => html! { <AiPredictionPage /> },
                        }
                    }
                </main>
            </ContextProvider<ApiContext>>
        },
        Err(e) => html! {
            <div class="status error">
                <p>{"❌ "}{e.to_string()}</p>
            </div>
        },
    };

    html! {
        <div class="app-container">
            {content}
            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
