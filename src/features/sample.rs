use anyhow::{Context, Result};
use polars::{df, frame::DataFrame};
use serde::Serialize;

use crate::OceanProximity;

/// Model feature columns, in training order. The `househoulds` spelling is the
/// column name the model was fitted with.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "longitude",
    "latitude",
    "housing_median_age",
    "total_rooms",
    "total_bedrooms",
    "population",
    "households",
    "median_income",
    "ocean_proximity",
    "median_income_cat",
    "rooms_per_households",
    "bedrooms_per_room",
    "population_per_househoulds",
];

/// One model input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingSample {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: f64,
    pub total_rooms: f64,
    pub total_bedrooms: f64,
    pub population: f64,
    pub households: f64,
    pub median_income: f64,
    pub ocean_proximity: OceanProximity,
    pub median_income_cat: i64,
    pub rooms_per_households: f64,
    pub bedrooms_per_room: f64,
    #[serde(rename = "population_per_househoulds")]
    pub population_per_household: f64,
}

impl HousingSample {
    /// Single-row frame with the columns in `FEATURE_COLUMNS`.
    pub fn to_frame(&self) -> Result<DataFrame> {
        df!(
            "longitude" => [self.longitude],
            "latitude" => [self.latitude],
            "housing_median_age" => [self.housing_median_age],
            "total_rooms" => [self.total_rooms],
            "total_bedrooms" => [self.total_bedrooms],
            "population" => [self.population],
            "households" => [self.households],
            "median_income" => [self.median_income],
            "ocean_proximity" => [self.ocean_proximity.as_str()],
            "median_income_cat" => [self.median_income_cat],
            "rooms_per_households" => [self.rooms_per_households],
            "bedrooms_per_room" => [self.bedrooms_per_room],
            "population_per_househoulds" => [self.population_per_household],
        )
        .context("[features::sample] Failed to build model input frame")
    }

    /// Compact JSON record keyed by feature column.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("[features::sample] Failed to serialize sample")
    }
}
