//! Model loading and inference.
//!
//! Artifacts are ONNX exports of the trained classifiers. Each artifact takes
//! a single `f32` input of shape `[1, n_features]` and produces a class label
//! tensor (`i64`, class 1 is the disease-positive class) and, when the export
//! kept the probability head, a second `f32` output of shape `[1, 2]` with
//! the per-class probabilities.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::info;
use serde::Serialize;
use tract_onnx::prelude::*;

use crate::models::{Disease, FieldSpec};

type RunnablePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Capability surface of a loaded classifier. The probability capability is
/// resolved once at load time, not per call.
pub trait Model: Send + Sync {
    /// Score one row and return the raw class label.
    fn predict(&self, row: &[f32]) -> Result<i64>;

    /// Probability of the disease-positive class, `None` when the artifact
    /// has no probability output.
    fn predict_proba(&self, row: &[f32]) -> Result<Option<f32>>;

    fn has_probability(&self) -> bool;
}

/// ONNX-backed classifier handle. Read-only after load.
pub struct OnnxModel {
    plan: RunnablePlan,
    n_features: usize,
    has_probability: bool,
}

impl OnnxModel {
    pub fn load<P: AsRef<Path>>(path: P, n_features: usize) -> Result<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(&path)?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, n_features)))?
            .into_optimized()?
            .into_runnable()?;

        let has_probability = plan.model().outputs.len() > 1;

        Ok(Self {
            plan,
            n_features,
            has_probability,
        })
    }

    fn run(&self, row: &[f32]) -> Result<TVec<TValue>> {
        if row.len() != self.n_features {
            return Err(anyhow!(
                "row has {} features, model expects {}",
                row.len(),
                self.n_features
            ));
        }
        let input = Tensor::from_shape(&[1, self.n_features], row)?;
        self.plan.run(tvec!(input.into()))
    }
}

impl Model for OnnxModel {
    fn predict(&self, row: &[f32]) -> Result<i64> {
        let outputs = self.run(row)?;
        let labels = outputs[0].to_array_view::<i64>()?;
        labels
            .iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow!("model produced an empty label tensor"))
    }

    fn predict_proba(&self, row: &[f32]) -> Result<Option<f32>> {
        if !self.has_probability {
            return Ok(None);
        }
        let outputs = self.run(row)?;
        let probabilities = outputs[1].to_array_view::<f32>()?;
        let positive = probabilities
            .get([0, 1])
            .copied()
            .ok_or_else(|| anyhow!("probability output has no positive-class column"))?;
        Ok(Some(positive))
    }

    fn has_probability(&self) -> bool {
        self.has_probability
    }
}

/// Metadata for one loaded classifier, served by `/api/model-info`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub disease: Disease,
    pub input_shape: Vec<usize>,
    pub columns: Vec<&'static str>,
    pub fields: Vec<FieldSpec>,
    pub has_probability: bool,
}

/// The three classifier handles, loaded once at startup and shared read-only
/// across workers.
pub struct ModelRegistry {
    parkinson: Box<dyn Model>,
    kidney: Box<dyn Model>,
    liver: Box<dyn Model>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry").finish_non_exhaustive()
    }
}

impl ModelRegistry {
    /// Load every artifact under `dir`. Any failure aborts the whole load;
    /// the service never runs with a partial registry.
    pub fn load(dir: &Path) -> Result<Self> {
        let load_one = |disease: Disease| -> Result<Box<dyn Model>> {
            let path = dir.join(disease.artifact_file());
            let model = OnnxModel::load(&path, disease.columns().len())
                .with_context(|| format!("loading {} model from {}", disease, path.display()))?;
            info!(
                "loaded {} model: {} features, probability output: {}",
                disease,
                disease.columns().len(),
                model.has_probability
            );
            Ok(Box::new(model))
        };

        Ok(Self {
            parkinson: load_one(Disease::Parkinson)?,
            kidney: load_one(Disease::Kidney)?,
            liver: load_one(Disease::Liver)?,
        })
    }

    /// Assemble a registry from already-built handles. Used by tests to
    /// substitute stub models.
    pub fn from_parts(
        parkinson: Box<dyn Model>,
        kidney: Box<dyn Model>,
        liver: Box<dyn Model>,
    ) -> Self {
        Self {
            parkinson,
            kidney,
            liver,
        }
    }

    pub fn model(&self, disease: Disease) -> &dyn Model {
        match disease {
            Disease::Parkinson => self.parkinson.as_ref(),
            Disease::Kidney => self.kidney.as_ref(),
            Disease::Liver => self.liver.as_ref(),
        }
    }

    pub fn info(&self) -> Vec<ModelInfo> {
        Disease::ALL
            .iter()
            .map(|&disease| ModelInfo {
                disease,
                input_shape: vec![1, disease.columns().len()],
                columns: disease.columns().to_vec(),
                fields: disease.field_specs(),
                has_probability: self.model(disease).has_probability(),
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::stub::StubModel;
    use super::*;

    fn stub_registry() -> ModelRegistry {
        ModelRegistry::from_parts(
            Box::new(StubModel::new(1, Some(0.9))),
            Box::new(StubModel::new(0, Some(0.2))),
            Box::new(StubModel::new(1, None)),
        )
    }

    #[test]
    fn registry_routes_each_disease_to_its_own_handle() {
        let registry = stub_registry();
        assert_eq!(registry.model(Disease::Parkinson).predict(&[]).unwrap(), 1);
        assert_eq!(registry.model(Disease::Kidney).predict(&[]).unwrap(), 0);
        assert_eq!(registry.model(Disease::Liver).predict(&[]).unwrap(), 1);
    }

    #[test]
    fn info_reports_schema_and_capability_per_disease() {
        let infos = stub_registry().info();
        assert_eq!(infos.len(), 3);

        let parkinson = &infos[0];
        assert_eq!(parkinson.disease, Disease::Parkinson);
        assert_eq!(parkinson.input_shape, vec![1, 22]);
        assert_eq!(parkinson.columns.len(), parkinson.fields.len());
        assert!(parkinson.has_probability);

        let liver = &infos[2];
        assert_eq!(liver.disease, Disease::Liver);
        assert!(!liver.has_probability);
    }

    #[test]
    fn missing_artifact_fails_the_whole_load() {
        let err = ModelRegistry::load(Path::new("/nonexistent/models")).unwrap_err();
        assert!(err.to_string().contains("Parkinson"));
    }
}
