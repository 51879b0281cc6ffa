//! Request and response types shared by the API handlers.
//!
//! Each disease has its own request struct whose serde field names are the
//! exact column names the corresponding classifier was trained on. Field
//! order in `to_row` follows the trained column order; the `COLUMNS` constant
//! next to each struct is the single source of truth the form UI and the
//! model-info endpoint are built from.

pub mod kidney;
pub mod liver;
pub mod parkinson;

pub use kidney::{Appetite, KidneyRequest, YesNo};
pub use liver::{Gender, LiverRequest};
pub use parkinson::ParkinsonRequest;

use serde::{Deserialize, Serialize};

/// The diseases served by the API. Each variant owns a fixed request schema
/// and a dedicated model artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Parkinson,
    Kidney,
    Liver,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Parkinson, Disease::Kidney, Disease::Liver];

    /// File name of the trained artifact under `MODEL_DIR`.
    pub fn artifact_file(self) -> &'static str {
        match self {
            Disease::Parkinson => "parkinsons_status.onnx",
            Disease::Kidney => "kidney_classification.onnx",
            Disease::Liver => "liver_disease_classifier.onnx",
        }
    }

    /// Trained column names, in training order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Disease::Parkinson => &parkinson::COLUMNS,
            Disease::Kidney => &kidney::COLUMNS,
            Disease::Liver => &liver::COLUMNS,
        }
    }

    /// Input widget descriptions for the form UI, in training column order.
    pub fn field_specs(self) -> Vec<FieldSpec> {
        match self {
            Disease::Parkinson => parkinson::field_specs(),
            Disease::Kidney => kidney::field_specs(),
            Disease::Liver => liver::field_specs(),
        }
    }

    /// Map a raw model label to the diagnosis string for this disease.
    ///
    /// The mappings follow each artifact's training encoding: class 1 is the
    /// disease-positive class (for the kidney classifier, class 1 is the
    /// `ckd` label of the training data).
    pub fn diagnosis(self, label: i64) -> &'static str {
        match (self, label) {
            (Disease::Parkinson, 1) => "Parkinson Disease",
            (Disease::Kidney, 1) => "Chronic Kidney Disease",
            (Disease::Liver, 1) => "Liver Disease",
            _ => "Healthy",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Disease::Parkinson => write!(f, "Parkinson"),
            Disease::Kidney => write!(f, "Kidney"),
            Disease::Liver => write!(f, "Liver"),
        }
    }
}

/// Three-tier risk classification of the positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band thresholds with closed lower bounds: 0.50 is medium, 0.75 is high.
    pub fn from_probability(p: f32) -> Self {
        if p >= 0.75 {
            RiskBand::High
        } else if p >= 0.5 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Medium => "Medium Risk",
            RiskBand::High => "High Risk",
        }
    }

    /// Message tier used by the UI. High risk renders as the "success" tier,
    /// medium as "warning" and low as "info".
    pub fn style(self) -> &'static str {
        match self {
            RiskBand::Low => "info",
            RiskBand::Medium => "warning",
            RiskBand::High => "success",
        }
    }
}

/// Outcome of one prediction action. Built once per request and never stored;
/// two identical requests against the same model produce equal predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub disease: Disease,
    pub label: i64,
    pub diagnosis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_style: Option<&'static str>,
}

impl Prediction {
    pub fn new(disease: Disease, label: i64, probability: Option<f32>) -> Self {
        let risk = probability.map(RiskBand::from_probability);
        Prediction {
            disease,
            label,
            diagnosis: disease.diagnosis(label).to_string(),
            probability,
            risk,
            risk_message: risk
                .zip(probability)
                .map(|(band, p)| format!("{} ({:.2}%)", band.label(), p * 100.0)),
            risk_style: risk.map(RiskBand::style),
        }
    }
}

/// Description of one input widget, published by `/api/model-info` and used
/// by the form UI. The per-disease field lists are in training column order,
/// so the rendered form cannot drift from the row the model scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Trained column name; also the JSON field name of the request body.
    pub name: &'static str,
    /// Human-readable widget label.
    pub label: &'static str,
    /// Section the widget is rendered under.
    pub group: &'static str,
    #[serde(flatten)]
    pub widget: Widget,
}

/// Input semantics of a form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Unbounded numeric free entry.
    Number { default: f32 },
    /// Numeric entry constrained to [min, max] by the widget.
    Slider {
        min: f32,
        max: f32,
        step: f32,
        default: f32,
    },
    /// Choice over a fixed numeric vocabulary.
    NumericChoice {
        options: &'static [f32],
        default: f32,
    },
    /// Choice over a fixed string vocabulary.
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// Uniform response envelope for every API endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
    pub execution_time_ms: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_band_thresholds_have_closed_lower_bounds() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.49), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.5), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.749), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.75), RiskBand::High);
        assert_eq!(RiskBand::from_probability(1.0), RiskBand::High);
    }

    #[test]
    fn diagnosis_mapping_is_exact_per_disease() {
        assert_eq!(Disease::Parkinson.diagnosis(1), "Parkinson Disease");
        assert_eq!(Disease::Parkinson.diagnosis(0), "Healthy");
        assert_eq!(Disease::Kidney.diagnosis(1), "Chronic Kidney Disease");
        assert_eq!(Disease::Kidney.diagnosis(0), "Healthy");
        assert_eq!(Disease::Liver.diagnosis(1), "Liver Disease");
        assert_eq!(Disease::Liver.diagnosis(0), "Healthy");
        // Only the trained positive class maps to a disease string.
        assert_eq!(Disease::Parkinson.diagnosis(2), "Healthy");
        assert_eq!(Disease::Kidney.diagnosis(-1), "Healthy");
    }

    #[test]
    fn prediction_without_probability_has_no_risk_fields() {
        let p = Prediction::new(Disease::Liver, 1, None);
        assert_eq!(p.diagnosis, "Liver Disease");
        assert!(p.probability.is_none());
        assert!(p.risk.is_none());
        assert!(p.risk_message.is_none());
        assert!(p.risk_style.is_none());
    }

    #[test]
    fn prediction_risk_message_matches_band_and_percentage() {
        let p = Prediction::new(Disease::Parkinson, 1, Some(0.8235));
        assert_eq!(p.risk, Some(RiskBand::High));
        assert_eq!(p.risk_message.as_deref(), Some("High Risk (82.35%)"));
        assert_eq!(p.risk_style, Some("success"));

        let p = Prediction::new(Disease::Parkinson, 0, Some(0.25));
        assert_eq!(p.risk, Some(RiskBand::Low));
        assert_eq!(p.risk_message.as_deref(), Some("Low Risk (25.00%)"));
        assert_eq!(p.risk_style, Some("info"));
    }

    #[test]
    fn field_specs_follow_trained_column_order_for_every_disease() {
        for disease in Disease::ALL {
            let names: Vec<&str> = disease.field_specs().iter().map(|f| f.name).collect();
            assert_eq!(names, disease.columns(), "schema drift for {}", disease);
        }
    }
}
