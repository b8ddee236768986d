use std::collections::HashSet;

use anyhow::{bail, ensure, Result};
use ndarray::{Array1, Array2, Axis};
use polars::frame::DataFrame;
use serde::{Deserialize, Serialize};

use super::{encode, Regressor};

/// How one input column is turned into design-matrix columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Encoder {
    #[default]
    Passthrough,
    /// `(x - mean) / scale`
    Standard { mean: f64, scale: f64 },
    /// One indicator column per category, in listed order.
    OneHot {
        categories: Vec<String>,
        #[serde(default)]
        ignore_unknown: bool,
    },
}

impl Encoder {
    /// Number of design-matrix columns this encoder produces.
    pub fn width(&self) -> usize {
        match self {
            Encoder::Passthrough | Encoder::Standard { .. } => 1,
            Encoder::OneHot { categories, .. } => categories.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub column: String,
    #[serde(default)]
    pub encoder: Encoder,
}

/// Inverse transform applied to the raw linear output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetTransform {
    #[default]
    Identity,
    /// Model was fitted on `ln(y)`.
    Log,
    /// Model was fitted on `ln(1 + y)`.
    Log1p,
    Standard { mean: f64, scale: f64 },
}

impl TargetTransform {
    fn inverse(&self, z: f64) -> f64 {
        match *self {
            TargetTransform::Identity => z,
            TargetTransform::Log => z.exp(),
            TargetTransform::Log1p => z.exp_m1(),
            TargetTransform::Standard { mean, scale } => z * scale + mean,
        }
    }
}

/// Column encoders followed by a linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPipeline {
    pub features: Vec<FeatureSpec>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub target: TargetTransform,
}

impl LinearPipeline {
    /// Total width of the design matrix.
    pub fn width(&self) -> usize {
        self.features.iter().map(|f| f.encoder.width()).sum()
    }

    /// Check the artifact is internally consistent.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.features.is_empty(), "[model::pipeline] pipeline has no features");

        let mut seen = HashSet::new();
        for feature in &self.features {
            if !seen.insert(feature.column.as_str()) {
                bail!("[model::pipeline] column {:?} is listed twice", feature.column);
            }
            match &feature.encoder {
                Encoder::Standard { scale, .. } if *scale == 0.0 || !scale.is_finite() => {
                    bail!("[model::pipeline] column {:?} has an unusable scale {scale}", feature.column);
                }
                Encoder::OneHot { categories, .. } if categories.is_empty() => {
                    bail!("[model::pipeline] column {:?} has no categories", feature.column);
                }
                _ => {}
            }
        }

        ensure!(self.coefficients.len() == self.width(),
            "[model::pipeline] {} coefficients for {} encoded columns",
            self.coefficients.len(), self.width());
        ensure!(self.coefficients.iter().all(|c| c.is_finite()) && self.intercept.is_finite(),
            "[model::pipeline] coefficients must be finite");

        if let TargetTransform::Standard { scale, .. } = self.target {
            ensure!(scale != 0.0, "[model::pipeline] target scale must be non-zero");
        }
        Ok(())
    }

    /// Build the design matrix for every row of `frame`.
    fn design(&self, frame: &DataFrame) -> Result<Array2<f64>> {
        let rows = frame.height();
        let mut x = Array2::<f64>::zeros((rows, self.width()));

        let mut offset = 0;
        for feature in &self.features {
            let name = feature.column.as_str();
            match &feature.encoder {
                Encoder::Passthrough => {
                    for (i, v) in encode::numeric(frame, name)?.into_iter().enumerate() {
                        x[[i, offset]] = v;
                    }
                }
                Encoder::Standard { mean, scale } => {
                    for (i, v) in encode::numeric(frame, name)?.into_iter().enumerate() {
                        x[[i, offset]] = (v - mean) / scale;
                    }
                }
                Encoder::OneHot { categories, ignore_unknown } => {
                    for (i, value) in encode::categorical(frame, name)?.into_iter().enumerate() {
                        match categories.iter().position(|c| c == value) {
                            Some(j) => x[[i, offset + j]] = 1.0,
                            // all-zero row
                            None if *ignore_unknown => {}
                            None => bail!("[model::pipeline] unknown category {value:?} in column {name:?}"),
                        }
                    }
                }
            }
            offset += feature.encoder.width();
        }

        Ok(x)
    }
}

impl Regressor for LinearPipeline {
    fn predict(&self, frame: &DataFrame) -> Result<Array2<f64>> {
        let x = self.design(frame)?;
        let coefficients = Array1::from(self.coefficients.clone());

        let y = x.dot(&coefficients).mapv(|z| self.target.inverse(z + self.intercept));
        Ok(y.insert_axis(Axis(1)))
    }
}
