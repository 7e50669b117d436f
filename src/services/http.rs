use crate::config::Config;
use crate::models::error::AppError;
use serde_json::Value;

// API CONFIGURATION
/// Configuration for the backend HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and a path that may already carry a query string.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL. A trailing slash is dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::DEFAULT_API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// BACKEND
/// JSON request/response transport used by the market-data fetchers.
///
/// Implementations return the decoded body for 2xx responses and an
/// [`AppError`] for everything else. No schema validation happens here.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get(&self, path: &str) -> Result<Value, AppError>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value, AppError>;
}

// HTTP CLIENT
/// HTTP client for the SmartAgro backend.
pub struct HttpClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Sends a request and normalizes the outcome.
    async fn execute(&self, method: &str, request: reqwest::RequestBuilder) -> Result<Value, AppError> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            gloo::console::error!(&format!("{method} request failed: {e}"));
        }
        result
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, AppError> {
        let response = request.send().await.map_err(|e| self.classify_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string());
        read_body(status, body)
    }

    /// Converts a transport failure into `NetworkUnreachable`, keeping the
    /// underlying cause in the console.
    fn classify_error(&self, error: &reqwest::Error) -> AppError {
        let kind = if error.is_timeout() {
            "timeout"
        } else if error.is_request() {
            "request error"
        } else {
            "network error"
        };
        gloo::console::warn!(&format!("Transport {kind}: {error}"));
        AppError::unreachable()
    }
}

/// Interprets a finished response. `body` is the text, or the reason it could
/// not be read.
///
/// A non-2xx status is always an `HttpStatus` error, even when the body is
/// unreadable.
fn read_body(status: u16, body: Result<String, String>) -> Result<Value, AppError> {
    if !(200..300).contains(&status) {
        return Err(AppError::from_status(status, body.as_deref().unwrap_or_default()));
    }

    let body = body.map_err(|e| AppError::MalformedBody(format!("Failed to read response: {e}")))?;
    serde_json::from_str(&body)
        .map_err(|e| AppError::MalformedBody(format!("Failed to parse response: {e}")))
}

impl Backend for HttpClient {
    async fn get(&self, path: &str) -> Result<Value, AppError> {
        let request = self.http.get(self.config.url(path));
        self.execute("GET", request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, AppError> {
        let request = self.http.post(self.config.url(path)).json(body);
        self.execute("POST", request).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_builder_custom_base_url() {
        let config = ApiConfig::builder()
            .base_url("http://10.0.0.5:8080/api/")
            .build();
        assert_eq!(config.base_url(), "http://10.0.0.5:8080/api");
    }

    #[test]
    fn test_unreadable_error_body_keeps_status() {
        let err = read_body(502, Err("connection reset".to_string())).unwrap_err();
        assert_eq!(
            err,
            AppError::HttpStatus {
                status: 502,
                message: "HTTP error! status: 502".to_string()
            }
        );
    }

    #[test]
    fn test_error_body_message_used() {
        let err = read_body(404, Ok(r#"{"error":"No data for month"}"#.to_string())).unwrap_err();
        assert_eq!(err.to_string(), "No data for month");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_success_body() {
        assert_eq!(
            read_body(200, Ok(r#"{"message":"hi"}"#.to_string())).unwrap(),
            serde_json::json!({"message": "hi"})
        );
        assert!(matches!(
            read_body(200, Err("truncated".to_string())),
            Err(AppError::MalformedBody(_))
        ));
        assert!(matches!(
            read_body(200, Ok("<html>".to_string())),
            Err(AppError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_url_concatenates_path_and_query() {
        let config = ApiConfig::builder().base_url("http://localhost:5000/api").build();
        assert_eq!(
            config.url("/market-prices?vegetable=Tomato"),
            "http://localhost:5000/api/market-prices?vegetable=Tomato"
        );
    }
}
