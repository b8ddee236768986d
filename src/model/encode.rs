//! Strict column access for model inputs. Unlike the dataset loaders, nothing
//! is coerced: a string where a number is expected is a failed prediction.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::{DataFrame, DataType};

fn is_numeric(dtype: &DataType) -> bool {
    matches!(dtype,
        DataType::Float64 | DataType::Float32 |
        DataType::Int64 | DataType::Int32 | DataType::Int16 | DataType::Int8 |
        DataType::UInt64 | DataType::UInt32 | DataType::UInt16 | DataType::UInt8)
}

pub(super) fn numeric(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)
        .with_context(|| format!("[model] input is missing column {name:?}"))?;
    if !is_numeric(column.dtype()) {
        bail!("[model] column {name:?} has dtype {}, expected a number", column.dtype());
    }

    let column = column.cast(&DataType::Float64)
        .with_context(|| format!("[model] failed to widen column {name:?}"))?;
    column.f64()?.into_iter().enumerate()
        .map(|(i, v)| v.ok_or_else(|| anyhow!("[model] null in column {name:?} at row {i}")))
        .collect()
}

pub(super) fn categorical<'a>(df: &'a DataFrame, name: &str) -> Result<Vec<&'a str>> {
    let column = df.column(name)
        .with_context(|| format!("[model] input is missing column {name:?}"))?;
    if column.dtype() != &DataType::String {
        bail!("[model] column {name:?} has dtype {}, expected a string", column.dtype());
    }

    column.str()?.into_iter().enumerate()
        .map(|(i, v)| v.ok_or_else(|| anyhow!("[model] null in column {name:?} at row {i}")))
        .collect()
}
