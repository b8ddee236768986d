//! GeoParquet footer metadata (the `geo` key-value entry).

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context, Result};
use bytes::Bytes;
use parquet::file::reader::{FileReader, SerializedFileReader};
use serde::Deserialize;

/// Column holding geometries when a file carries no `geo` metadata.
pub(crate) const DEFAULT_GEOMETRY_COLUMN: &str = "geometry";

/// Subset of the GeoParquet `geo` metadata this crate relies on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GeoMetadata {
    pub(crate) primary_column: String,
    #[serde(default)]
    pub(crate) columns: BTreeMap<String, GeoColumnMetadata>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GeoColumnMetadata {
    pub(crate) encoding: String,
    #[serde(default)]
    pub(crate) geometry_types: Vec<String>,
}

impl GeoMetadata {
    /// Name of the primary geometry column, checked to be WKB-encoded.
    pub(crate) fn wkb_column(&self) -> Result<&str> {
        let column = self.columns.get(&self.primary_column)
            .ok_or_else(|| anyhow!("[io::parquet::geo] primary column {:?} has no column metadata", self.primary_column))?;
        if !column.encoding.eq_ignore_ascii_case("WKB") {
            bail!("[io::parquet::geo] column {:?} uses {} encoding, only WKB is supported",
                self.primary_column, column.encoding);
        }
        Ok(&self.primary_column)
    }
}

/// Parse the JSON value stored under the `geo` key.
pub(crate) fn parse_geo_metadata(json: &str) -> Result<GeoMetadata> {
    serde_json::from_str(json).context("[io::parquet::geo] Malformed 'geo' metadata")
}

/// Read the `geo` footer entry, if any, without decoding row groups.
pub(crate) fn read_geo_metadata(bytes: &[u8]) -> Result<Option<GeoMetadata>> {
    let reader = SerializedFileReader::new(Bytes::copy_from_slice(bytes))
        .context("[io::parquet::geo] Failed to read Parquet footer")?;

    let entry = reader.metadata()
        .file_metadata()
        .key_value_metadata()
        .and_then(|kvs| kvs.iter().find(|kv| kv.key == "geo"))
        .and_then(|kv| kv.value.clone());

    entry.as_deref().map(parse_geo_metadata).transpose()
}

/// The geometry column to decode: from metadata when present, else `geometry`.
pub(crate) fn geometry_column_name(bytes: &[u8]) -> Result<String> {
    match read_geo_metadata(bytes)? {
        Some(meta) => Ok(meta.wkb_column()?.to_string()),
        None => Ok(DEFAULT_GEOMETRY_COLUMN.to_string()),
    }
}
