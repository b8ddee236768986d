//! Typed column extraction from polars frames.

use anyhow::{anyhow, Context, Result};
use polars::prelude::{DataFrame, DataType};

/// Read a numeric column as `f64`, rejecting nulls.
pub(super) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)
        .with_context(|| format!("[data] missing column {name:?}"))?;

    let column = if column.dtype() != &DataType::Float64 {
        column.cast(&DataType::Float64)
            .with_context(|| format!("[data] column {name:?} is not numeric"))?
    } else {
        column.clone()
    };

    let values = column.f64()
        .with_context(|| format!("[data] column {name:?} is not numeric"))?;

    values.into_iter().enumerate()
        .map(|(i, v)| v.ok_or_else(|| anyhow!("[data] null value in column {name:?} at row {i}")))
        .collect()
}

/// Read a string column, rejecting nulls.
pub(super) fn str_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)
        .with_context(|| format!("[data] missing column {name:?}"))?;
    let values = column.str()
        .with_context(|| format!("[data] column {name:?} is not a string column"))?;

    values.into_iter().enumerate()
        .map(|(i, v)| v.map(str::to_string).ok_or_else(|| anyhow!("[data] null value in column {name:?} at row {i}")))
        .collect()
}

/// Read a binary column; nulls are kept as `None`.
pub(super) fn binary_values<'a>(df: &'a DataFrame, name: &str) -> Result<Vec<Option<&'a [u8]>>> {
    let column = df.column(name)
        .with_context(|| format!("[data] missing column {name:?}"))?;
    let values = column.as_materialized_series().binary()
        .with_context(|| format!("[data] column {name:?} is not a binary column"))?;
    Ok(values.into_iter().collect())
}
