//! Parquet format reading operations.

mod geo_meta;
mod read;
#[cfg(test)]
mod write;

pub(crate) use geo_meta::*;
pub(crate) use read::*;
#[cfg(test)]
pub(crate) use write::*;
