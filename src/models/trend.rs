use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    #[serde(default)]
    pub pettah_wholesale: Option<f64>,
    #[serde(default)]
    pub dambulla_wholesale: Option<f64>,
}

/// Result of `/price-trend`. Points keep the order the backend sent them in,
/// which is chronological.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceTrend {
    #[serde(rename = "data", default)]
    pub points: Vec<TrendPoint>,
    #[serde(default)]
    pub percentage_change: f64,
}

impl PriceTrend {
    pub fn new(points: Vec<TrendPoint>, percentage_change: f64) -> Self {
        Self {
            points,
            percentage_change,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pettah_series(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.pettah_wholesale).collect()
    }

    pub fn dambulla_series(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.dambulla_wholesale).collect()
    }

    pub fn day_labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.day.as_str()).collect()
    }

    /// Signed change label, e.g. `+4.70% vs last month`.
    pub fn change_label(&self) -> String {
        let sign = if self.percentage_change >= 0.0 { "+" } else { "" };
        format!("{sign}{:.2}% vs last month", self.percentage_change)
    }

    pub fn is_rising(&self) -> bool {
        self.percentage_change >= 0.0
    }
}
