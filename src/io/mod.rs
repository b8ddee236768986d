//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `parquet` - Parquet tables and the GeoParquet `geo` footer entry
//! - `wkb` - Well-Known Binary polygon geometry
//! - `svg` - SVG output for the county map

pub(crate) mod parquet;
pub(crate) mod svg;
pub(crate) mod wkb;
