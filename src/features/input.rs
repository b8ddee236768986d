use crate::{config::InputSettings, InputError, OceanProximity};

/// Values the user controls directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserInput {
    /// Property age in years.
    pub housing_median_age: f64,
    /// Slider value, thousands of US$.
    pub income: f64,
    /// Overrides the county's own category when set.
    pub ocean_proximity: Option<OceanProximity>,
}

impl UserInput {
    /// Defaults from the input settings, no override.
    pub fn from_settings(settings: &InputSettings) -> Self {
        Self {
            housing_median_age: settings.default_age,
            income: settings.income_default,
            ocean_proximity: None,
        }
    }

    /// Median income in tens of thousands, the unit the model was trained on.
    #[inline] pub fn median_income(&self) -> f64 { self.income / 10.0 }

    /// Check age against the dataset's observed range and income against the
    /// slider grid.
    pub fn checked(self, settings: &InputSettings, age_range: (f64, f64)) -> Result<Self, InputError> {
        check_age(self.housing_median_age, age_range)?;
        check_income(self.income, settings)?;
        Ok(self)
    }
}

/// Hold the age input to the range seen in the cleaned dataset.
pub(crate) fn check_age(value: f64, (min, max): (f64, f64)) -> Result<f64, InputError> {
    if !(value >= min && value <= max) {
        return Err(InputError::OutOfRange { field: "housing_median_age", value, min, max });
    }
    Ok(value)
}

/// Hold the income input to the slider's range and step grid.
pub(crate) fn check_income(value: f64, settings: &InputSettings) -> Result<f64, InputError> {
    let (min, max, step) = (settings.income_min, settings.income_max, settings.income_step);
    if !(value >= min && value <= max) {
        return Err(InputError::OutOfRange { field: "income", value, min, max });
    }

    let steps = (value - min) / step;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(InputError::OffStep { field: "income", value, min, step });
    }
    Ok(value)
}
