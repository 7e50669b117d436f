use super::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Formats a price cell, `N/A` when the market has no data for that tier.
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "N/A".to_string(), |p| format!("Rs {p:.2}"))
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Wholesale and retail prices for one vegetable at Pettah and Dambulla.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceQuote {
    pub vegetable: String,
    #[serde(default, alias = "Wholesale_Pettah(RS)")]
    pub wholesale_pettah: Option<f64>,
    #[serde(default, alias = "Wholesale_Dambulla(RS)")]
    pub wholesale_dambulla: Option<f64>,
    #[serde(default, alias = "Retail_Pettah(RS)")]
    pub retail_pettah: Option<f64>,
    #[serde(default, alias = "Retail_Dambulla(RS)")]
    pub retail_dambulla: Option<f64>,
}

impl PriceQuote {
    pub fn empty(vegetable: impl Into<String>) -> Self {
        Self {
            vegetable: vegetable.into(),
            wholesale_pettah: None,
            wholesale_dambulla: None,
            retail_pettah: None,
            retail_dambulla: None,
        }
    }

    /// Prices in table column order: wholesale Pettah, wholesale Dambulla,
    /// retail Pettah, retail Dambulla.
    pub const fn prices(&self) -> [Option<f64>; 4] {
        [
            self.wholesale_pettah,
            self.wholesale_dambulla,
            self.retail_pettah,
            self.retail_dambulla,
        ]
    }

    /// Rendered table cells, vegetable name first.
    pub fn cells(&self) -> [String; 5] {
        let [wp, wd, rp, rd] = self.prices().map(format_price);
        [self.vegetable.clone(), wp, wd, rp, rd]
    }

    pub fn table_row(&self) -> String {
        self.cells().join(" | ")
    }

    /// Price quoted in one-line summaries. Single-figure predictions land in
    /// the wholesale Pettah column, so that is the tier summarized.
    pub const fn headline_price(&self) -> Option<f64> {
        self.wholesale_pettah
    }
}

/// Result of `/market-prices`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketPrices {
    #[serde(rename = "data", default)]
    pub quotes: Vec<PriceQuote>,
    #[serde(default)]
    pub date: Option<String>,
}

impl MarketPrices {
    pub fn new(quotes: Vec<PriceQuote>, date: Option<String>) -> Self {
        Self { quotes, date }
    }

    /// Distinct vegetable names, sorted alphabetically.
    pub fn vegetables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.quotes.iter().map(|q| q.vegetable.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Picks the trend vegetable: keeps the current choice, otherwise the first
/// vegetable alphabetically.
pub fn default_trend_vegetable(current: &str, vegetables: &[String]) -> Option<String> {
    if current.is_empty() {
        vegetables.first().cloned()
    } else {
        Some(current.to_string())
    }
}

/// Predicted prices keyed by vegetable, sorted by name.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PriceMap {
    quotes: Vec<PriceQuote>,
    /// Total reported by the backend, if any.
    total: Option<f64>,
}

// A prediction is either the four-tier object or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictedPrice {
    Single(f64),
    Tiers {
        #[serde(default, alias = "Wholesale_Pettah(RS)")]
        wholesale_pettah: Option<f64>,
        #[serde(default, alias = "Wholesale_Dambulla(RS)")]
        wholesale_dambulla: Option<f64>,
        #[serde(default, alias = "Retail_Pettah(RS)")]
        retail_pettah: Option<f64>,
        #[serde(default, alias = "Retail_Dambulla(RS)")]
        retail_dambulla: Option<f64>,
    },
}

impl PredictedPrice {
    fn into_quote(self, vegetable: String) -> PriceQuote {
        match self {
            Self::Single(price) => PriceQuote {
                wholesale_pettah: Some(price),
                ..PriceQuote::empty(vegetable)
            },
            Self::Tiers {
                wholesale_pettah,
                wholesale_dambulla,
                retail_pettah,
                retail_dambulla,
            } => PriceQuote {
                vegetable,
                wholesale_pettah,
                wholesale_dambulla,
                retail_pettah,
                retail_dambulla,
            },
        }
    }
}

impl PriceMap {
    pub fn new(mut quotes: Vec<PriceQuote>) -> Self {
        quotes.sort_by(|a, b| a.vegetable.cmp(&b.vegetable));
        Self { quotes, total: None }
    }

    pub fn with_total(mut self, total: Option<f64>) -> Self {
        self.total = total;
        self
    }

    /// Decodes the `prices` object of a `/predict` response.
    ///
    /// A `null` entry means the backend had no prediction for that vegetable.
    pub fn from_value(prices: &serde_json::Map<String, Value>) -> Result<Self, AppError> {
        let quotes = prices
            .iter()
            .map(|(vegetable, value)| {
                if value.is_null() {
                    return Ok(PriceQuote::empty(vegetable.clone()));
                }
                serde_json::from_value::<PredictedPrice>(value.clone())
                    .map(|p| p.into_quote(vegetable.clone()))
                    .map_err(|e| {
                        AppError::MalformedBody(format!("Invalid price for {vegetable}: {e}"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(quotes))
    }

    pub fn quotes(&self) -> &[PriceQuote] {
        &self.quotes
    }

    pub fn get(&self, vegetable: &str) -> Option<&PriceQuote> {
        self.quotes.iter().find(|q| q.vegetable == vegetable)
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Backend total when present, else the sum of the summarized prices
    /// rounded to cents so it agrees with the printed items.
    pub fn total(&self) -> f64 {
        self.total.unwrap_or_else(|| {
            self.quotes
                .iter()
                .filter_map(PriceQuote::headline_price)
                .map(round_cents)
                .sum()
        })
    }

    /// One-line text such as `Beans: Rs 120.00, Tomato: N/A  |  Total: Rs 120.00`.
    pub fn summary(&self) -> String {
        let items: Vec<String> = self
            .quotes
            .iter()
            .map(|q| format!("{}: {}", q.vegetable, format_price(q.headline_price())))
            .collect();
        format!("{}  |  Total: Rs {:.2}", items.join(", "), self.total())
    }
}

/// Decoded `/predict` response.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    Prices(PriceMap),
    /// Free-text prediction, shown as-is.
    Legacy(String),
    /// The backend refused the request with an `error` message.
    Rejected(String),
}

impl PredictionOutcome {
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return Ok(Self::Rejected(error.to_string()));
        }

        if let Some(prices) = value.get("prices").and_then(Value::as_object) {
            let total = value.get("total").and_then(Value::as_f64);
            return PriceMap::from_value(prices).map(|map| Self::Prices(map.with_total(total)));
        }

        match value.get("prediction") {
            Some(Value::String(text)) => Ok(Self::Legacy(text.clone())),
            Some(other) => Ok(Self::Legacy(other.to_string())),
            None => Ok(Self::Legacy(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(120.0)), "Rs 120.00");
        assert_eq!(format_price(Some(99.456)), "Rs 99.46");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn test_partial_quote_renders_na() {
        let quote: PriceQuote = serde_json::from_value(json!({
            "vegetable": "carrot",
            "wholesale_pettah": 70,
            "retail_dambulla": null
        }))
        .unwrap();

        assert_eq!(quote.table_row(), "carrot | Rs 70.00 | N/A | N/A | N/A");
    }

    #[test]
    fn test_vegetables_sorted_and_distinct() {
        let prices = MarketPrices::new(
            vec![
                PriceQuote::empty("tomato"),
                PriceQuote::empty("beans"),
                PriceQuote::empty("tomato"),
            ],
            None,
        );
        assert_eq!(prices.vegetables(), vec!["beans", "tomato"]);
    }

    #[test]
    fn test_default_trend_vegetable() {
        let vegs = vec!["beans".to_string(), "carrot".to_string()];
        assert_eq!(default_trend_vegetable("", &vegs), Some("beans".to_string()));
        assert_eq!(default_trend_vegetable("carrot", &vegs), Some("carrot".to_string()));
        assert_eq!(default_trend_vegetable("", &[]), None);
    }

    #[test]
    fn test_prediction_tiers() {
        let outcome = PredictionOutcome::from_value(json!({
            "prices": {
                "Tomato": {
                    "wholesale_pettah": 90.5,
                    "wholesale_dambulla": 85,
                    "retail_pettah": 110,
                    "retail_dambulla": null
                }
            }
        }))
        .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        let tomato = map.get("Tomato").unwrap();
        assert_eq!(tomato.wholesale_pettah, Some(90.5));
        assert_eq!(tomato.retail_dambulla, None);
    }

    #[test]
    fn test_prediction_model_column_names() {
        let outcome = PredictionOutcome::from_value(json!({
            "prices": { "Beans": { "Wholesale_Pettah(RS)": 120.0, "Retail_Dambulla(RS)": 150.0 } }
        }))
        .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        assert_eq!(map.get("Beans").unwrap().retail_dambulla, Some(150.0));
    }

    #[test]
    fn test_prediction_bare_numbers_and_summary() {
        let outcome = PredictionOutcome::from_value(json!({
            "success": true,
            "prices": { "Tomato": 90, "Beans": 120 },
            "total": 210
        }))
        .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        assert_eq!(map.quotes()[0].vegetable, "Beans");
        assert_eq!(
            map.summary(),
            "Beans: Rs 120.00, Tomato: Rs 90.00  |  Total: Rs 210.00"
        );
    }

    #[test]
    fn test_summary_prefers_backend_total() {
        let outcome = PredictionOutcome::from_value(json!({
            "prices": { "Tomato": 90.004, "Beans": 120.004 },
            "total": 999.0
        }))
        .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        assert_eq!(
            map.summary(),
            "Beans: Rs 120.00, Tomato: Rs 90.00  |  Total: Rs 999.00"
        );
    }

    #[test]
    fn test_summary_sum_matches_printed_items() {
        let outcome =
            PredictionOutcome::from_value(json!({"prices": { "Tomato": 90.004, "Beans": 120.004 }}))
                .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        assert_eq!(
            map.summary(),
            "Beans: Rs 120.00, Tomato: Rs 90.00  |  Total: Rs 210.00"
        );
    }

    #[test]
    fn test_summary_never_mixes_tiers() {
        let outcome = PredictionOutcome::from_value(json!({
            "prices": {
                "Tomato": { "retail_dambulla": 100 },
                "Beans": { "wholesale_pettah": 50 }
            }
        }))
        .unwrap();

        let PredictionOutcome::Prices(map) = outcome else {
            panic!("expected prices");
        };
        assert_eq!(
            map.summary(),
            "Beans: Rs 50.00, Tomato: N/A  |  Total: Rs 50.00"
        );
    }

    #[test]
    fn test_prediction_error_and_legacy() {
        assert_eq!(
            PredictionOutcome::from_value(json!({"error": "Model not loaded"})).unwrap(),
            PredictionOutcome::Rejected("Model not loaded".to_string())
        );
        assert_eq!(
            PredictionOutcome::from_value(json!({"prediction": "Prices will rise"})).unwrap(),
            PredictionOutcome::Legacy("Prices will rise".to_string())
        );
    }

    #[test]
    fn test_prediction_invalid_price_is_malformed() {
        let result = PredictionOutcome::from_value(json!({"prices": {"Tomato": "cheap"}}));
        assert!(matches!(result, Err(AppError::MalformedBody(_))));
    }
}
