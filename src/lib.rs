#![doc = "countyprice public API"]
mod artifacts;
mod common;
mod config;
mod dashboard;
mod data;
mod error;
mod features;
mod geom;
mod io;
mod map;
mod model;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use artifacts::{ArtifactSource, Artifacts, DiskArtifacts, MemArtifacts, ModelArtifacts};

#[doc(inline)]
pub use config::{ArtifactPaths, Config, InputSettings, MapSettings, CONFIG_ENV, DEFAULT_CONFIG_FILE};

#[doc(inline)]
pub use dashboard::Dashboard;

#[doc(inline)]
pub use data::{CountyRecord, CountyStats, CountyTable, HousingData, OceanProximity};

#[doc(inline)]
pub use error::InputError;

#[doc(inline)]
pub use features::{assemble, digitize, income_category, HousingSample, UserInput, FEATURE_COLUMNS, INCOME_BINS};

#[doc(inline)]
pub use geom::{is_valid, normalize, signed_area, Ring};

#[doc(inline)]
pub use map::{prepare_layers, render_svg, render_svg_string, write_layers_json, write_svg, MapView, PreparedLayer};

#[doc(inline)]
pub use model::{load_model, predict_price, Encoder, FeatureSpec, LinearPipeline, ModelArtifact, Regressor, TargetTransform};
