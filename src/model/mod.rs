mod encode;
mod pipeline;
mod regressor;

pub use pipeline::{Encoder, FeatureSpec, LinearPipeline, TargetTransform};
pub use regressor::{load_model, predict_price, ModelArtifact, Regressor};
