use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Raw text of the seven soil and weather inputs, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoilInputs {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
}

/// Identifies one field of the crop form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl SoilField {
    pub const ALL: [Self; 7] = [
        Self::Nitrogen,
        Self::Phosphorus,
        Self::Potassium,
        Self::Temperature,
        Self::Humidity,
        Self::Ph,
        Self::Rainfall,
    ];

    /// Name used by the backend and in validation messages.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Nitrogen => "N",
            Self::Phosphorus => "P",
            Self::Potassium => "K",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Ph => "ph",
            Self::Rainfall => "rainfall",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nitrogen => "Nitrogen (N)",
            Self::Phosphorus => "Phosphorus (P)",
            Self::Potassium => "Potassium (K)",
            Self::Temperature => "Temperature (°C)",
            Self::Humidity => "Humidity (%)",
            Self::Ph => "pH",
            Self::Rainfall => "Rainfall (mm)",
        }
    }
}

impl SoilInputs {
    pub fn get(&self, field: SoilField) -> &str {
        match field {
            SoilField::Nitrogen => &self.nitrogen,
            SoilField::Phosphorus => &self.phosphorus,
            SoilField::Potassium => &self.potassium,
            SoilField::Temperature => &self.temperature,
            SoilField::Humidity => &self.humidity,
            SoilField::Ph => &self.ph,
            SoilField::Rainfall => &self.rainfall,
        }
    }

    pub fn set(&mut self, field: SoilField, value: String) {
        let slot = match field {
            SoilField::Nitrogen => &mut self.nitrogen,
            SoilField::Phosphorus => &mut self.phosphorus,
            SoilField::Potassium => &mut self.potassium,
            SoilField::Temperature => &mut self.temperature,
            SoilField::Humidity => &mut self.humidity,
            SoilField::Ph => &mut self.ph,
            SoilField::Rainfall => &mut self.rainfall,
        };
        *slot = value;
    }

    /// Fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<SoilField> {
        SoilField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Parses every field, failing on blank or non-numeric input.
    pub fn parse(&self) -> Result<SoilReading, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(SoilField::key).collect();
            return Err(AppError::Validation(format!(
                "Please fill in all fields. Missing: {}",
                names.join(", ")
            )));
        }

        let value = |field: SoilField| -> Result<f64, AppError> {
            let raw = self.get(field).trim();
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AppError::Validation(format!("{} must be a number, got '{raw}'", field.key()))
                })
        };

        Ok(SoilReading {
            nitrogen: value(SoilField::Nitrogen)?,
            phosphorus: value(SoilField::Phosphorus)?,
            potassium: value(SoilField::Potassium)?,
            temperature: value(SoilField::Temperature)?,
            humidity: value(SoilField::Humidity)?,
            ph: value(SoilField::Ph)?,
            rainfall: value(SoilField::Rainfall)?,
        })
    }
}

/// Validated crop form, serialized as the `/crop-recommendation` body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilReading {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropAlternative {
    pub crop: String,
    /// Model confidence in percent.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropRecommendation {
    pub recommended_crop: String,
    /// Ranked as returned by the backend.
    #[serde(rename = "recommendations", default)]
    pub alternatives: Vec<CropAlternative>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SoilInputs {
        SoilInputs {
            nitrogen: "90".into(),
            phosphorus: "42".into(),
            potassium: "43".into(),
            temperature: "20.8".into(),
            humidity: "82".into(),
            ph: "6.5".into(),
            rainfall: "202.9".into(),
        }
    }

    #[test]
    fn test_parse_filled_form() {
        let reading = filled().parse().unwrap();
        assert_eq!(reading.nitrogen, 90.0);
        assert_eq!(reading.ph, 6.5);

        let body = serde_json::to_value(reading).unwrap();
        assert_eq!(body["N"], 90.0);
        assert_eq!(body["rainfall"], 202.9);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut inputs = filled();
        inputs.set(SoilField::Potassium, String::new());
        inputs.set(SoilField::Humidity, "   ".into());

        let err = inputs.parse().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields. Missing: K, humidity");
        assert!(err.is_local());
    }

    #[test]
    fn test_non_numeric_field() {
        let mut inputs = filled();
        inputs.set(SoilField::Ph, "acidic".into());

        let err = inputs.parse().unwrap_err();
        assert_eq!(err.to_string(), "ph must be a number, got 'acidic'");
    }
}
