mod assemble;
mod income;
mod input;
mod sample;

pub use assemble::assemble;
pub use income::{digitize, income_category, INCOME_BINS};
pub use input::UserInput;
pub use sample::{HousingSample, FEATURE_COLUMNS};
pub(crate) use input::{check_age, check_income};
