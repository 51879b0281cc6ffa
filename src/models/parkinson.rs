//! Parkinson voice-measurement request.
//!
//! All 22 features are unbounded numeric free entry with a default of 0.0.
//! The source dataset never documents physiological bounds for these acoustic
//! measures, so unlike the kidney and liver forms no widget constrains them.

use serde::{Deserialize, Serialize};

use super::{FieldSpec, Widget};

/// Trained column order of the Parkinson classifier.
pub const COLUMNS: [&str; 22] = [
    "MDVP:Fo(Hz)",
    "MDVP:Fhi(Hz)",
    "MDVP:Flo(Hz)",
    "MDVP:Jitter(%)",
    "MDVP:Jitter(Abs)",
    "MDVP:RAP",
    "MDVP:PPQ",
    "Jitter:DDP",
    "MDVP:Shimmer",
    "MDVP:Shimmer(dB)",
    "Shimmer:APQ3",
    "Shimmer:APQ5",
    "MDVP:APQ",
    "Shimmer:DDA",
    "NHR",
    "HNR",
    "RPDE",
    "DFA",
    "spread1",
    "spread2",
    "D2",
    "PPE",
];

/// One row of voice measurements. Missing JSON fields fall back to 0.0, the
/// free-entry default of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkinsonRequest {
    #[serde(rename = "MDVP:Fo(Hz)")]
    pub fo: f32,
    #[serde(rename = "MDVP:Fhi(Hz)")]
    pub fhi: f32,
    #[serde(rename = "MDVP:Flo(Hz)")]
    pub flo: f32,
    #[serde(rename = "MDVP:Jitter(%)")]
    pub jitter_percent: f32,
    #[serde(rename = "MDVP:Jitter(Abs)")]
    pub jitter_abs: f32,
    #[serde(rename = "MDVP:RAP")]
    pub rap: f32,
    #[serde(rename = "MDVP:PPQ")]
    pub ppq: f32,
    #[serde(rename = "Jitter:DDP")]
    pub jitter_ddp: f32,
    #[serde(rename = "MDVP:Shimmer")]
    pub shimmer: f32,
    #[serde(rename = "MDVP:Shimmer(dB)")]
    pub shimmer_db: f32,
    #[serde(rename = "Shimmer:APQ3")]
    pub apq3: f32,
    #[serde(rename = "Shimmer:APQ5")]
    pub apq5: f32,
    #[serde(rename = "MDVP:APQ")]
    pub apq: f32,
    #[serde(rename = "Shimmer:DDA")]
    pub dda: f32,
    #[serde(rename = "NHR")]
    pub nhr: f32,
    #[serde(rename = "HNR")]
    pub hnr: f32,
    #[serde(rename = "RPDE")]
    pub rpde: f32,
    #[serde(rename = "DFA")]
    pub dfa: f32,
    pub spread1: f32,
    pub spread2: f32,
    #[serde(rename = "D2")]
    pub d2: f32,
    #[serde(rename = "PPE")]
    pub ppe: f32,
}

impl ParkinsonRequest {
    /// Lower the request to the row the model scores, in `COLUMNS` order.
    pub fn to_row(&self) -> [f32; 22] {
        [
            self.fo,
            self.fhi,
            self.flo,
            self.jitter_percent,
            self.jitter_abs,
            self.rap,
            self.ppq,
            self.jitter_ddp,
            self.shimmer,
            self.shimmer_db,
            self.apq3,
            self.apq5,
            self.apq,
            self.dda,
            self.nhr,
            self.hnr,
            self.rpde,
            self.dfa,
            self.spread1,
            self.spread2,
            self.d2,
            self.ppe,
        ]
    }
}

/// Widget list for the form UI, grouped the way the voice features are
/// conventionally presented.
pub fn field_specs() -> Vec<FieldSpec> {
    let group_of = |name: &str| match name {
        "MDVP:Fo(Hz)" | "MDVP:Fhi(Hz)" | "MDVP:Flo(Hz)" => "Frequency Features",
        n if n.contains("Jitter") || n == "MDVP:RAP" || n == "MDVP:PPQ" => "Jitter Features",
        n if n.contains("Shimmer") || n == "MDVP:APQ" => "Shimmer Features",
        _ => "Other Features",
    };

    COLUMNS
        .iter()
        .map(|&name| FieldSpec {
            name,
            label: name,
            group: group_of(name),
            widget: Widget::Number { default: 0.0 },
        })
        .collect()
}
