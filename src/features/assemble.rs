use tracing::debug;

use super::{income_category, HousingSample, UserInput};
use crate::CountyRecord;

/// Merge a county's reference statistics with the user's inputs into one model row.
///
/// The ocean proximity comes from the county unless the user overrides it.
pub fn assemble(county: &CountyRecord, input: &UserInput) -> HousingSample {
    let stats = &county.stats;
    let median_income = input.median_income();

    let sample = HousingSample {
        longitude: county.longitude(),
        latitude: county.latitude(),
        housing_median_age: input.housing_median_age,
        total_rooms: stats.total_rooms,
        total_bedrooms: stats.total_bedrooms,
        population: stats.population,
        households: stats.households,
        median_income,
        ocean_proximity: input.ocean_proximity.unwrap_or(stats.ocean_proximity),
        median_income_cat: income_category(median_income),
        rooms_per_households: stats.rooms_per_households,
        bedrooms_per_room: stats.bedrooms_per_room,
        population_per_household: stats.population_per_household,
    };

    debug!("[features::assemble] {:?}: {sample:?}", county.name);
    sample
}
