use anyhow::{bail, Result};
use polars::frame::DataFrame;
use tracing::info;

use super::columns::f64_values;
use crate::io::parquet::read_parquet_bytes;

const HOUSING_MEDIAN_AGE: &str = "housing_median_age";

/// Summary of the cleaned housing dataset: the bounds the age input is held to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousingData {
    rows: usize,
    age_min: f64,
    age_max: f64,
}

impl HousingData {
    /// Read the cleaned dataset from Parquet bytes.
    pub fn from_parquet_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_frame(&read_parquet_bytes(bytes)?)
    }

    pub(crate) fn from_frame(df: &DataFrame) -> Result<Self> {
        let ages = f64_values(df, HOUSING_MEDIAN_AGE)?;
        if ages.is_empty() {
            bail!("[data::housing] cleaned dataset has no rows");
        }

        let age_min = ages.iter().copied().fold(f64::INFINITY, f64::min);
        let age_max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        info!("[data::housing] loaded {} rows, housing_median_age in [{age_min}, {age_max}]", ages.len());
        Ok(Self { rows: ages.len(), age_min, age_max })
    }

    #[inline] pub fn rows(&self) -> usize { self.rows }

    /// Smallest and largest `housing_median_age` in the dataset.
    #[inline] pub fn age_range(&self) -> (f64, f64) { (self.age_min, self.age_max) }
}
