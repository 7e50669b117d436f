/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL. Override at build time with `SMARTAGRO_API_URL`.
    pub const DEFAULT_API_BASE_URL: &'static str = match option_env!("SMARTAGRO_API_URL") {
        Some(url) => url,
        None => "http://localhost:5000/api",
    };

    /// Vegetables offered on the price prediction tab
    pub const VEGETABLE_OPTIONS: [&'static str; 5] =
        ["Beans", "Tomato", "Brinjal", "Carrot", "Cabbage"];

    /// Trend chart viewbox
    pub const TREND_CHART_WIDTH: f64 = 360.0;
    pub const TREND_CHART_HEIGHT: f64 = 220.0;
    pub const TREND_CHART_PADDING: f64 = 8.0;
}
