/// Income-category bin edges over median income in tens of thousands of dollars.
///
/// Must stay in step with the edges the model was trained with.
pub const INCOME_BINS: [f64; 6] = [0.0, 1.5, 3.0, 4.5, 6.0, f64::INFINITY];

/// Index of the right-open bin holding `x`: the `i` with `bins[i-1] <= x < bins[i]`.
///
/// Values below the first edge give 0, values at or past the last edge give
/// `bins.len()`, and so does NaN. `bins` must be sorted ascending.
pub fn digitize(x: f64, bins: &[f64]) -> usize {
    if x.is_nan() { return bins.len() }
    bins.partition_point(|&edge| edge <= x)
}

/// Income category of a median income given in tens of thousands of dollars.
pub fn income_category(median_income: f64) -> i64 {
    digitize(median_income, &INCOME_BINS) as i64
}
