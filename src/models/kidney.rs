//! Chronic kidney disease request.
//!
//! Fourteen numeric or ordinal measurements followed by ten categorical
//! findings. The categorical vocabularies and their numeric encodings are
//! part of the trained contract and must not change.

use serde::{Deserialize, Serialize};

use super::{FieldSpec, Widget};

/// Trained column order of the kidney classifier.
pub const COLUMNS: [&str; 24] = [
    "age", "bp", "sg", "al", "su", "bgr", "bu", "sc", "sod", "pot", "hemo", "pcv", "wc", "rc",
    "rbc", "pc", "pcc", "ba", "htn", "dm", "cad", "appet", "pe", "ane",
];

const SG_OPTIONS: [f32; 5] = [1.005, 1.010, 1.015, 1.020, 1.025];
const ORDINAL_OPTIONS: [f32; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Binary clinical finding, encoded `no` = 0, `yes` = 1 at training time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn encode(self) -> f32 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }
}

/// Appetite finding, encoded `good` = 0, `poor` = 1 at training time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appetite {
    Good,
    Poor,
}

impl Appetite {
    pub fn encode(self) -> f32 {
        match self {
            Appetite::Good => 0.0,
            Appetite::Poor => 1.0,
        }
    }
}

/// One kidney patient record. All fields are required; the widgets always
/// supply a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KidneyRequest {
    pub age: f32,
    pub bp: f32,
    pub sg: f32,
    pub al: f32,
    pub su: f32,
    pub bgr: f32,
    pub bu: f32,
    pub sc: f32,
    pub sod: f32,
    pub pot: f32,
    pub hemo: f32,
    pub pcv: f32,
    pub wc: f32,
    pub rc: f32,
    pub rbc: YesNo,
    pub pc: YesNo,
    pub pcc: YesNo,
    pub ba: YesNo,
    pub htn: YesNo,
    pub dm: YesNo,
    pub cad: YesNo,
    pub appet: Appetite,
    pub pe: YesNo,
    pub ane: YesNo,
}

impl KidneyRequest {
    /// Lower the request to the row the model scores, in `COLUMNS` order.
    /// Categorical findings take their trained numeric encodings.
    pub fn to_row(&self) -> [f32; 24] {
        [
            self.age,
            self.bp,
            self.sg,
            self.al,
            self.su,
            self.bgr,
            self.bu,
            self.sc,
            self.sod,
            self.pot,
            self.hemo,
            self.pcv,
            self.wc,
            self.rc,
            self.rbc.encode(),
            self.pc.encode(),
            self.pcc.encode(),
            self.ba.encode(),
            self.htn.encode(),
            self.dm.encode(),
            self.cad.encode(),
            self.appet.encode(),
            self.pe.encode(),
            self.ane.encode(),
        ]
    }
}

/// Widget list for the form UI. Slider bounds are a UI constraint only, the
/// server does not revalidate.
pub fn field_specs() -> Vec<FieldSpec> {
    const NUMERIC: &str = "Numeric Features";
    const CATEGORICAL: &str = "Categorical Features";

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
    let yes_no = |name, label| FieldSpec {
        name,
        label,
        group: CATEGORICAL,
        widget: Widget::Choice {
            options: &["yes", "no"],
            default: "yes",
        },
    };

    vec![
        slider("age", "Age", 1.0, 120.0, 1.0, 30.0),
        slider("bp", "Blood Pressure (bp)", 60.0, 200.0, 1.0, 80.0),
        FieldSpec {
            name: "sg",
            label: "Specific Gravity (sg)",
            group: NUMERIC,
            widget: Widget::NumericChoice {
                options: &SG_OPTIONS,
                default: 1.005,
            },
        },
        FieldSpec {
            name: "al",
            label: "Albumin (al)",
            group: NUMERIC,
            widget: Widget::NumericChoice {
                options: &ORDINAL_OPTIONS,
                default: 0.0,
            },
        },
        FieldSpec {
            name: "su",
            label: "Sugar (su)",
            group: NUMERIC,
            widget: Widget::NumericChoice {
                options: &ORDINAL_OPTIONS,
                default: 0.0,
            },
        },
        slider("bgr", "Blood Glucose Random (bgr)", 50.0, 500.0, 1.0, 80.0),
        slider("bu", "Blood Urea (bu)", 5.0, 200.0, 1.0, 20.0),
        slider("sc", "Serum Creatinine (sc)", 0.1, 20.0, 0.1, 1.0),
        slider("sod", "Sodium (sod)", 100.0, 180.0, 1.0, 135.0),
        slider("pot", "Potassium (pot)", 2.0, 10.0, 1.0, 4.0),
        slider("hemo", "Hemoglobin (hemo)", 5.0, 25.0, 1.0, 15.0),
        slider("pcv", "Packed Cell Volume (pcv)", 10.0, 60.0, 1.0, 40.0),
        slider("wc", "White Blood Cells (wc)", 2000.0, 20000.0, 1.0, 8000.0),
        slider("rc", "Red Blood Cells (rc)", 2.0, 7.0, 1.0, 4.0),
        yes_no("rbc", "Red Blood Cells (rbc)"),
        yes_no("pc", "Pus Cell (pc)"),
        yes_no("pcc", "Pus Cell Clumps (pcc)"),
        yes_no("ba", "Bacteria (ba)"),
        yes_no("htn", "Hypertension (htn)"),
        yes_no("dm", "Diabetes Mellitus (dm)"),
        yes_no("cad", "Coronary Artery Disease (cad)"),
        FieldSpec {
            name: "appet",
            label: "Appetite (appet)",
            group: CATEGORICAL,
            widget: Widget::Choice {
                options: &["good", "poor"],
                default: "good",
            },
        },
        yes_no("pe", "Pedal Edema (pe)"),
        yes_no("ane", "Anemia (ane)"),
    ]
}
