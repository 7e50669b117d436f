pub mod use_backend_status;
pub mod use_crop_recommendation;
pub mod use_demand_forecast;
pub mod use_market_prices;
pub mod use_price_prediction;
pub mod use_price_trend;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::http::{ApiConfig, HttpClient};
use crate::services::market_api::MarketApi;

/// Market API backed by the real HTTP client.
pub type Api = MarketApi<HttpClient>;

#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(Rc::new(data)),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Per-controller request counter. Only the most recently issued request
/// may update state; earlier completions are dropped. In-flight requests are
/// never cancelled.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// State to apply for a finished request, `None` if it was superseded.
    pub fn resolve<T>(&self, token: RequestToken, result: Result<T, AppError>) -> Option<FetchState<T>> {
        self.is_current(token).then(|| FetchState::from_result(result))
    }
}

/// Shares one API client with every hook below the provider.
#[derive(Clone)]
pub struct ApiContext(pub Rc<Api>);

impl ApiContext {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = HttpClient::with_config(config)?;
        Ok(Self(Rc::new(MarketApi::new(client))))
    }

    /// The provided context, or a default client when there is no provider.
    pub fn provided_or_default(provided: Option<Self>) -> Self {
        provided.unwrap_or_default()
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self(Rc::new(MarketApi::new(HttpClient::default())))
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Returns the API client provided by the nearest `ContextProvider<ApiContext>`.
/// A default client is built only when no provider is found.
#[hook]
pub fn use_api() -> Rc<Api> {
    let provided = use_context::<ApiContext>();
    let context = use_memo(provided, |provided| {
        ApiContext::provided_or_default(provided.clone())
    });
    context.0.clone()
}

/// Sets `state` to loading and runs `request` in the background. The result is
/// applied only if no newer request was issued on `sequence` in the meantime.
pub fn spawn_tracked<T, Fut>(
    state: UseStateHandle<FetchState<T>>,
    sequence: Rc<RefCell<RequestSequence>>,
    request: Fut,
) where
    T: 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let token = sequence.borrow_mut().issue();
    state.set(FetchState::Loading);

    spawn_local(async move {
        let result = request.await;
        let resolved = sequence.borrow().resolve(token, result);
        match resolved {
            Some(next) => state.set(next),
            None => gloo::console::log!(&format!("Discarding stale response #{}", token.id())),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_context_is_reused() {
        let config = ApiConfig::builder().base_url("http://10.0.0.5:8080/api").build();
        let provided = ApiContext::new(config).unwrap();

        let chosen = ApiContext::provided_or_default(Some(provided.clone()));

        assert!(Rc::ptr_eq(&chosen.0, &provided.0));
    }

    #[test]
    fn test_missing_provider_builds_default() {
        let first = ApiContext::provided_or_default(None);
        let second = ApiContext::provided_or_default(None);

        assert!(!Rc::ptr_eq(&first.0, &second.0));
    }
}
