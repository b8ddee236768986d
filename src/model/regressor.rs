use anyhow::{anyhow, Context, Result};
use ndarray::Array2;
use polars::frame::DataFrame;
use serde::Deserialize;
use tracing::debug;

use super::LinearPipeline;
use crate::HousingSample;

/// A fitted model that maps feature rows to predictions, one output row per
/// input row.
pub trait Regressor: Send + Sync {
    fn predict(&self, frame: &DataFrame) -> Result<Array2<f64>>;
}

/// Serialized model artifacts, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearPipeline(LinearPipeline),
}

impl ModelArtifact {
    pub fn into_regressor(self) -> Result<Box<dyn Regressor>> {
        match self {
            ModelArtifact::LinearPipeline(pipeline) => {
                pipeline.validate()?;
                Ok(Box::new(pipeline))
            }
        }
    }
}

/// Deserialize a model artifact from JSON bytes.
pub fn load_model(bytes: &[u8]) -> Result<Box<dyn Regressor>> {
    let artifact: ModelArtifact = serde_json::from_slice(bytes)
        .context("[model] Failed to parse model artifact")?;
    artifact.into_regressor()
}

/// Run the model once on a single sample and return the scalar price.
pub fn predict_price(model: &dyn Regressor, sample: &HousingSample) -> Result<f64> {
    let frame = sample.to_frame()?;
    let output = model.predict(&frame)
        .context("[model] Prediction failed")?;

    let price = output.get((0, 0)).copied()
        .ok_or_else(|| anyhow!("[model] Model returned an empty prediction ({:?})", output.shape()))?;

    debug!("[model] predicted {price:.2}");
    Ok(price)
}
