use crate::models::{
    crop::{CropRecommendation, SoilInputs},
    demand::DemandForecast,
    error::AppError,
    market::{MarketPrices, PredictionOutcome},
    trend::PriceTrend,
};
use crate::services::http::Backend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

// QUERY STRINGS
/// Ordered query parameters. Blank or absent values are left out entirely.
#[derive(Debug, Default)]
struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    fn param(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    fn to_path(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }

        let query: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("{path}?{}", query.join("&"))
    }
}

// REQUESTS
/// Optional filters for `/market-prices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketFilter {
    pub date: Option<NaiveDate>,
    pub vegetable: Option<String>,
}

impl MarketFilter {
    pub fn path(&self) -> String {
        let date = self.date.map(format_date);
        Query::default()
            .param("date", date.as_deref())
            .param("vegetable", self.vegetable.as_deref())
            .to_path("/market-prices")
    }
}

/// Optional filters for `/demand-forecast`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandFilter {
    pub month: Option<String>,
    pub vegetable: Option<String>,
}

impl DemandFilter {
    pub fn path(&self) -> String {
        Query::default()
            .param("month", self.month.as_deref())
            .param("vegetable", self.vegetable.as_deref())
            .to_path("/demand-forecast")
    }
}

pub fn price_trend_path(month: &str, vegetable: &str) -> Result<String, AppError> {
    if month.trim().is_empty() || vegetable.trim().is_empty() {
        return Err(AppError::Validation(
            "Select a month and a vegetable to see the trend".to_string(),
        ));
    }

    Ok(Query::default()
        .param("month", Some(month))
        .param("vegetable", Some(vegetable))
        .to_path("/price-trend"))
}

/// Body of `/predict`. Construction fails unless a date and at least one
/// vegetable are selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    #[serde(serialize_with = "serialize_date")]
    date: NaiveDate,
    vegetables: Vec<String>,
}

impl PredictionRequest {
    pub fn new(date: Option<NaiveDate>, vegetables: &[String]) -> Result<Self, AppError> {
        let date = date.ok_or_else(|| AppError::Validation("Select a date first".to_string()))?;
        if vegetables.is_empty() {
            return Err(AppError::Validation(
                "Select one or more vegetables".to_string(),
            ));
        }

        Ok(Self {
            date,
            vegetables: vegetables.to_vec(),
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

// RESPONSES
#[derive(Deserialize)]
struct HelloResponse {
    #[serde(default)]
    message: String,
}

/// Decodes a response body into `T`.
///
/// A body carrying an `error` string, or `success: false`, is a domain error
/// even when the status was 2xx.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(AppError::Domain(error.to_string()));
    }
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(AppError::Domain("Request was not successful".to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::MalformedBody(format!("Unexpected response shape: {e}")))
}

// MARKET API
/// Typed access to the SmartAgro backend endpoints.
pub struct MarketApi<B> {
    backend: B,
}

impl<B: Backend> MarketApi<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Liveness probe; returns the backend's greeting.
    pub async fn hello(&self) -> Result<String, AppError> {
        let value = self.backend.get("/hello").await?;
        decode::<HelloResponse>(value).map(|r| r.message)
    }

    /// Predicts prices for the selected vegetables on `date`.
    ///
    /// Missing inputs fail locally without a request.
    pub async fn predict_prices(
        &self,
        date: Option<NaiveDate>,
        vegetables: &[String],
    ) -> Result<PredictionOutcome, AppError> {
        let request = PredictionRequest::new(date, vegetables)?;
        let body = serde_json::to_value(&request)
            .map_err(|e| AppError::Validation(format!("Invalid prediction request: {e}")))?;

        let value = self.backend.post("/predict", &body).await?;
        PredictionOutcome::from_value(value)
    }

    pub async fn market_prices(&self, filter: &MarketFilter) -> Result<MarketPrices, AppError> {
        let value = self.backend.get(&filter.path()).await?;
        decode(value)
    }

    pub async fn price_trend(&self, month: &str, vegetable: &str) -> Result<PriceTrend, AppError> {
        let path = price_trend_path(month, vegetable)?;
        let value = self.backend.get(&path).await?;
        decode(value)
    }

    pub async fn demand_forecast(&self, filter: &DemandFilter) -> Result<DemandForecast, AppError> {
        let value = self.backend.get(&filter.path()).await?;
        decode(value)
    }

    /// Parses the crop form and asks for a recommendation.
    pub async fn recommend_crop(&self, inputs: &SoilInputs) -> Result<CropRecommendation, AppError> {
        let reading = inputs.parse()?;
        let body = serde_json::to_value(reading)
            .map_err(|e| AppError::Validation(format!("Invalid soil reading: {e}")))?;

        let value = self.backend.post("/crop-recommendation", &body).await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_filter_without_params() {
        assert_eq!(MarketFilter::default().path(), "/market-prices");
    }

    #[test]
    fn test_market_filter_omits_blank_vegetable() {
        let filter = MarketFilter {
            date: NaiveDate::from_ymd_opt(2024, 10, 5),
            vegetable: Some(String::new()),
        };
        assert_eq!(filter.path(), "/market-prices?date=2024-10-05");
    }

    #[test]
    fn test_demand_filter_encodes_values() {
        let filter = DemandFilter {
            month: Some("2024-10".to_string()),
            vegetable: Some("Green Chilli".to_string()),
        };
        assert_eq!(
            filter.path(),
            "/demand-forecast?month=2024-10&vegetable=Green%20Chilli"
        );
    }

    #[test]
    fn test_price_trend_path_requires_both() {
        assert_eq!(
            price_trend_path("2024-10", "Tomato").unwrap(),
            "/price-trend?month=2024-10&vegetable=Tomato"
        );
        assert!(price_trend_path("", "Tomato").is_err());
        assert!(price_trend_path("2024-10", " ").is_err());
    }

    #[test]
    fn test_prediction_request_body() {
        let request = PredictionRequest::new(
            NaiveDate::from_ymd_opt(2024, 11, 1),
            &["Beans".to_string()],
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"date": "2024-11-01", "vegetables": ["Beans"]})
        );
    }

    #[test]
    fn test_prediction_request_validation() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 1);
        assert_eq!(
            PredictionRequest::new(None, &["Beans".to_string()]).unwrap_err(),
            AppError::Validation("Select a date first".to_string())
        );
        assert_eq!(
            PredictionRequest::new(date, &[]).unwrap_err(),
            AppError::Validation("Select one or more vegetables".to_string())
        );
    }

    #[test]
    fn test_decode_error_field_is_domain_error() {
        let result = decode::<MarketPrices>(json!({"error": "No data for date"}));
        assert_eq!(
            result.unwrap_err(),
            AppError::Domain("No data for date".to_string())
        );
    }

    #[test]
    fn test_decode_unsuccessful_without_error() {
        let result = decode::<MarketPrices>(json!({"success": false}));
        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_decode_wrong_shape_is_malformed() {
        let result = decode::<PriceTrend>(json!({"success": true, "data": "nope"}));
        assert!(matches!(result, Err(AppError::MalformedBody(_))));
    }
}
