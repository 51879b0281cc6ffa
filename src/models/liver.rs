//! Liver disease request.
//!
//! Nine numeric measurements and the patient's gender. Column names keep the
//! training dataset's spelling (`Total_Protiens`) because the artifact was
//! fitted against those exact headers.

use serde::{Deserialize, Serialize};

use super::{FieldSpec, Widget};

/// Trained column order of the liver classifier.
pub const COLUMNS: [&str; 10] = [
    "Age",
    "Total_Bilirubin",
    "Direct_Bilirubin",
    "Alkaline_Phosphotase",
    "Alamine_Aminotransferase",
    "Aspartate_Aminotransferase",
    "Total_Protiens",
    "Albumin",
    "Albumin_and_Globulin_Ratio",
    "Gender",
];

/// Patient gender, encoded `Female` = 0, `Male` = 1 at training time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn encode(self) -> f32 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

/// One liver patient record. All fields are required; the widgets always
/// supply a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiverRequest {
    #[serde(rename = "Age")]
    pub age: f32,
    #[serde(rename = "Total_Bilirubin")]
    pub total_bilirubin: f32,
    #[serde(rename = "Direct_Bilirubin")]
    pub direct_bilirubin: f32,
    #[serde(rename = "Alkaline_Phosphotase")]
    pub alkaline_phosphotase: f32,
    #[serde(rename = "Alamine_Aminotransferase")]
    pub alamine_aminotransferase: f32,
    #[serde(rename = "Aspartate_Aminotransferase")]
    pub aspartate_aminotransferase: f32,
    #[serde(rename = "Total_Protiens")]
    pub total_protiens: f32,
    #[serde(rename = "Albumin")]
    pub albumin: f32,
    #[serde(rename = "Albumin_and_Globulin_Ratio")]
    pub albumin_and_globulin_ratio: f32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
}

impl LiverRequest {
    /// Lower the request to the row the model scores, in `COLUMNS` order.
    pub fn to_row(&self) -> [f32; 10] {
        [
            self.age,
            self.total_bilirubin,
            self.direct_bilirubin,
            self.alkaline_phosphotase,
            self.alamine_aminotransferase,
            self.aspartate_aminotransferase,
            self.total_protiens,
            self.albumin,
            self.albumin_and_globulin_ratio,
            self.gender.encode(),
        ]
    }
}

/// Widget list for the form UI. Slider bounds are a UI constraint only, the
/// server does not revalidate.
pub fn field_specs() -> Vec<FieldSpec> {
    const NUMERIC: &str = "Numeric Features";

    let slider = |name, label, min, max, step, default| FieldSpec {
        name,
        label,
        group: NUMERIC,
        widget: Widget::Slider {
            min,
            max,
            step,
            default,
        },
    };

    vec![
        slider("Age", "Age", 1.0, 100.0, 1.0, 30.0),
        slider("Total_Bilirubin", "Total Bilirubin", 0.1, 50.0, 0.1, 1.0),
        slider("Direct_Bilirubin", "Direct Bilirubin", 0.0, 30.0, 0.1, 0.1),
        slider("Alkaline_Phosphotase", "Alkaline Phosphotase", 0.0, 500.0, 1.0, 100.0),
        slider(
            "Alamine_Aminotransferase",
            "Alamine Aminotransferase",
            0.0,
            300.0,
            1.0,
            20.0,
        ),
        slider(
            "Aspartate_Aminotransferase",
            "Aspartate Aminotransferase",
            0.0,
            300.0,
            1.0,
            20.0,
        ),
        slider("Total_Protiens", "Total Proteins", 0.0, 10.0, 0.1, 6.0),
        slider("Albumin", "Albumin", 0.0, 5.0, 0.1, 3.5),
        slider(
            "Albumin_and_Globulin_Ratio",
            "Albumin and Globulin Ratio",
            0.0,
            2.5,
            0.1,
            1.0,
        ),
        FieldSpec {
            name: "Gender",
            label: "Gender",
            group: "Categorical Features",
            widget: Widget::Choice {
                options: &["Male", "Female"],
                default: "Male",
            },
        },
    ]
}
