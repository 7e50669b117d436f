use serde::Deserialize;

/// Three-bucket demand forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DemandLevel {
    #[serde(alias = "high", alias = "HIGH")]
    High,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "low", alias = "LOW")]
    Low,
}

impl DemandLevel {
    /// Relative bar width in percent. Fixed mapping, not configurable.
    pub const fn bar_width_percent(&self) -> u8 {
        match self {
            Self::High => 100,
            Self::Medium => 70,
            Self::Low => 40,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::High => "demand-high",
            Self::Medium => "demand-medium",
            Self::Low => "demand-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandEntry {
    pub vegetable: String,
    #[serde(alias = "demand")]
    pub demand_level: DemandLevel,
    /// Expected price movement in percent.
    #[serde(default, alias = "price_change_percent")]
    pub price_change: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Colour the backend suggests for the bar.
    #[serde(default, alias = "color_hint")]
    pub color: String,
    #[serde(default)]
    pub date_range: String,
}

impl DemandEntry {
    pub fn bar_style(&self) -> String {
        let mut style = format!("width: {}%;", self.demand_level.bar_width_percent());
        if !self.color.is_empty() {
            style.push_str(&format!(" background-color: {};", self.color));
        }
        style
    }

    pub fn price_change_label(&self) -> String {
        let sign = if self.price_change >= 0.0 { "+" } else { "" };
        format!("{sign}{:.1}%", self.price_change)
    }
}

/// Result of `/demand-forecast`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandForecast {
    #[serde(rename = "data", default)]
    pub entries: Vec<DemandEntry>,
    #[serde(default)]
    pub month: String,
}
