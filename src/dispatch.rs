//! Prediction dispatcher.
//!
//! One explicit request, one prediction: score the row, take the positive
//! class probability when the model exposes it, map the raw label to the
//! disease's diagnosis string and band the probability. Stateless; nothing
//! is cached or retried.

use anyhow::Result;

use crate::inference::Model;
use crate::models::{Disease, Prediction};

pub fn dispatch(disease: Disease, model: &dyn Model, row: &[f32]) -> Result<Prediction> {
    let label = model.predict(row)?;
    let probability = model.predict_proba(row)?;
    Ok(Prediction::new(disease, label, probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::stub::StubModel;
    use crate::models::{ParkinsonRequest, RiskBand};

    #[test]
    fn positive_label_with_probability_yields_banded_diagnosis() {
        let model = StubModel::new(1, Some(0.82));
        let row = ParkinsonRequest::default().to_row();
        let prediction = dispatch(Disease::Parkinson, &model, &row).unwrap();

        assert_eq!(prediction.diagnosis, "Parkinson Disease");
        assert_eq!(prediction.probability, Some(0.82));
        assert_eq!(prediction.risk, Some(RiskBand::High));
    }

    #[test]
    fn negative_label_maps_to_healthy() {
        let model = StubModel::new(0, Some(0.12));
        let prediction = dispatch(Disease::Kidney, &model, &[0.0; 24]).unwrap();

        assert_eq!(prediction.diagnosis, "Healthy");
        assert_eq!(prediction.risk, Some(RiskBand::Low));
    }

    #[test]
    fn probability_less_model_degrades_to_label_only() {
        let model = StubModel::new(1, None);
        let prediction = dispatch(Disease::Liver, &model, &[0.0; 10]).unwrap();

        assert_eq!(prediction.diagnosis, "Liver Disease");
        assert!(prediction.probability.is_none());
        assert!(prediction.risk.is_none());
        assert!(prediction.risk_message.is_none());
    }

    #[test]
    fn dispatch_is_idempotent_for_identical_inputs() {
        let model = StubModel::new(1, Some(0.61));
        let row = ParkinsonRequest::default().to_row();

        let first = dispatch(Disease::Parkinson, &model, &row).unwrap();
        let second = dispatch(Disease::Parkinson, &model, &row).unwrap();
        assert_eq!(first, second);
    }

    // All-zero end-to-end row: assertions target the mapping tables, not a
    // fixed clinical outcome, since the artifact's output is opaque.
    #[test]
    fn all_zero_parkinson_row_respects_mapping_tables() {
        let model = StubModel::new(0, Some(0.5));
        let row = ParkinsonRequest::default().to_row();
        assert!(row.iter().all(|v| *v == 0.0));

        let prediction = dispatch(Disease::Parkinson, &model, &row).unwrap();
        assert_eq!(
            prediction.diagnosis,
            Disease::Parkinson.diagnosis(prediction.label)
        );
        let p = prediction.probability.unwrap();
        assert_eq!(prediction.risk, Some(RiskBand::from_probability(p)));
        assert_eq!(prediction.risk, Some(RiskBand::Medium));
    }
}
