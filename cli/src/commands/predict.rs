use std::sync::Arc;

use anyhow::Result;
use countyprice::{
    assemble, predict_price, Artifacts, Config, CountyRecord, CountyStats, Dashboard,
    HousingSample, InputError, ModelArtifacts, OceanProximity, UserInput,
};

use crate::cli::{ManualValues, PredictArgs};

pub fn run(config: &Config, args: &PredictArgs) -> Result<()> {
    let ocean_proximity = args.ocean_proximity.as_deref()
        .map(str::parse::<OceanProximity>)
        .transpose()?;

    // manual entry never touches the geo dataset
    let (sample, price) = if args.manual {
        predict_manual(&ModelArtifacts::from_disk(&config.artifacts)?, config, args, ocean_proximity)?
    } else {
        predict_county(Artifacts::cached(config)?, config, args, ocean_proximity)?
    };

    if args.json {
        println!("{}", sample.to_json()?);
    }
    println!("Predicted price: ${price:.2}");
    Ok(())
}

fn predict_county(
    artifacts: Arc<Artifacts>,
    config: &Config,
    args: &PredictArgs,
    ocean_proximity: Option<OceanProximity>,
) -> Result<(HousingSample, f64)> {
    let mut dashboard = Dashboard::new(artifacts, config);

    // clap guarantees a county outside manual mode
    let county = args.county.as_deref().ok_or(InputError::Missing("county"))?;
    dashboard.select(county)?;
    if let Some(age) = args.age {
        dashboard.set_age(age)?;
    }
    if let Some(income) = args.income {
        dashboard.set_income(income)?;
    }
    dashboard.set_ocean_proximity(ocean_proximity);

    let price = dashboard.submit()?;
    if let Some(path) = &args.map {
        dashboard.write_map(path)?;
        println!("[predict] wrote map to {}", path.display());
    }
    Ok((dashboard.sample(), price))
}

fn predict_manual(
    artifacts: &ModelArtifacts,
    config: &Config,
    args: &PredictArgs,
    ocean_proximity: Option<OceanProximity>,
) -> Result<(HousingSample, f64)> {
    let record = manual_record(&args.values, ocean_proximity.ok_or(InputError::Missing("ocean_proximity"))?)?;

    let input = UserInput {
        housing_median_age: args.age.unwrap_or(config.inputs.default_age),
        income: args.income.unwrap_or(config.inputs.income_default),
        ocean_proximity: None,
    }
    .checked(&config.inputs, artifacts.housing().age_range())?;

    let sample = assemble(&record, &input);
    let price = predict_price(artifacts.model(), &sample)?;
    Ok((sample, price))
}

fn manual_record(values: &ManualValues, ocean_proximity: OceanProximity) -> Result<CountyRecord, InputError> {
    let stats = CountyStats::from_totals(
        values.total_rooms.ok_or(InputError::Missing("total_rooms"))?,
        values.total_bedrooms.ok_or(InputError::Missing("total_bedrooms"))?,
        values.population.ok_or(InputError::Missing("population"))?,
        values.households.ok_or(InputError::Missing("households"))?,
        ocean_proximity,
    )?;

    CountyRecord::new(
        "manual entry",
        values.longitude.ok_or(InputError::Missing("longitude"))?,
        values.latitude.ok_or(InputError::Missing("latitude"))?,
        stats,
    )
}
