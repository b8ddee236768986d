//! Interactive session state: one selected county, the user's inputs and the
//! map view that follows the selection.

use std::{path::Path, sync::Arc};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    features::{check_age, check_income},
    map, model, Artifacts, Config, CountyRecord, HousingSample, InputError, InputSettings,
    MapSettings, MapView, OceanProximity, UserInput,
};

pub struct Dashboard {
    artifacts: Arc<Artifacts>,
    inputs: InputSettings,
    map: MapSettings,
    selected: usize,
    input: UserInput,
}

impl Dashboard {
    /// Start a session on the first county in name order with default inputs.
    pub fn new(artifacts: Arc<Artifacts>, config: &Config) -> Self {
        let mut input = UserInput::from_settings(&config.inputs);

        let (min, max) = artifacts.housing().age_range();
        if check_age(input.housing_median_age, (min, max)).is_err() {
            let clamped = input.housing_median_age.clamp(min, max);
            warn!("[dashboard] default age {} outside [{min}, {max}], using {clamped}", input.housing_median_age);
            input.housing_median_age = clamped;
        }

        Self {
            artifacts,
            inputs: config.inputs.clone(),
            map: config.map.clone(),
            selected: 0,
            input,
        }
    }

    /// Selector choices.
    pub fn counties(&self) -> impl Iterator<Item = &str> {
        self.artifacts.counties().names()
    }

    pub fn selected(&self) -> &CountyRecord {
        &self.artifacts.counties().records()[self.selected]
    }

    #[inline] pub fn input(&self) -> &UserInput { &self.input }

    #[inline] pub fn artifacts(&self) -> &Artifacts { &self.artifacts }

    /// Change the selected county. The map view re-centres on it.
    pub fn select(&mut self, name: &str) -> Result<MapView, InputError> {
        self.selected = self.artifacts.counties().position(name)?;
        info!("[dashboard] selected {name:?}");
        Ok(self.view())
    }

    pub fn set_age(&mut self, age: f64) -> Result<(), InputError> {
        self.input.housing_median_age = check_age(age, self.artifacts.housing().age_range())?;
        Ok(())
    }

    pub fn set_income(&mut self, income: f64) -> Result<(), InputError> {
        self.input.income = check_income(income, &self.inputs)?;
        Ok(())
    }

    /// Override the county's ocean proximity, or `None` to use the county's own.
    pub fn set_ocean_proximity(&mut self, ocean_proximity: Option<OceanProximity>) {
        self.input.ocean_proximity = ocean_proximity;
    }

    /// The model row the next submit would send.
    pub fn sample(&self) -> HousingSample {
        crate::assemble(self.selected(), &self.input)
    }

    /// Predict the price for the current state. Calls the model once.
    pub fn submit(&self) -> Result<f64> {
        let sample = self.sample();
        debug!("[dashboard] submit {}", sample.to_json()?);
        model::predict_price(self.artifacts.model(), &sample)
    }

    /// Map camera centred on the selected county.
    pub fn view(&self) -> MapView {
        MapView::centered_on(self.selected(), self.map.zoom)
    }

    pub fn render_map(&self) -> Result<String> {
        map::render_svg_string(self.artifacts.counties(), &self.selected().name, &self.view(), &self.map)
    }

    pub fn write_map(&self, path: &Path) -> Result<()> {
        map::write_svg(path, self.artifacts.counties(), &self.selected().name, &self.view(), &self.map)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::Context;
    use ndarray::Array2;
    use polars::frame::DataFrame;

    use super::*;
    use crate::{digitize, fixtures, ArtifactPaths, CountyTable, HousingData, Regressor, FEATURE_COLUMNS, INCOME_BINS};

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl Regressor for Counting {
        fn predict(&self, frame: &DataFrame) -> Result<Array2<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let age = frame.column("housing_median_age").context("age")?.f64()?.get(0).unwrap_or(0.0);
            Ok(Array2::from_elem((1, 1), 1000.0 * age))
        }
    }

    fn dashboard(model: Arc<dyn Regressor>) -> Dashboard {
        let counties = CountyTable::from_geoparquet_bytes(&fixtures::geo_parquet_bytes()).unwrap();
        let housing = HousingData::from_parquet_bytes(&fixtures::housing_parquet_bytes()).unwrap();
        let artifacts = Artifacts::new(housing, counties, model).unwrap();
        Dashboard::new(Arc::new(artifacts), &Config::default())
    }

    #[test]
    fn starts_on_first_county_with_defaults() {
        let dash = dashboard(Arc::new(Counting::default()));
        assert_eq!(dash.selected().name, "Alameda");
        assert_eq!(dash.input().housing_median_age, 10.0);
        assert_eq!(dash.input().income, 45.0);
        assert_eq!(dash.counties().count(), 3);
    }

    #[test]
    fn los_angeles_end_to_end() {
        let counting = Arc::new(Counting::default());
        let mut dash = dashboard(counting.clone());

        dash.select("Los Angeles").unwrap();
        dash.set_age(15.0).unwrap();
        dash.set_income(45.0).unwrap();

        let sample = dash.sample();
        assert_eq!(sample.median_income_cat, 4);
        assert_eq!(digitize(sample.median_income, &INCOME_BINS), 4);

        let json: serde_json::Value = serde_json::from_str(&sample.to_json().unwrap()).unwrap();
        assert_eq!(json.as_object().unwrap().len(), FEATURE_COLUMNS.len());

        assert_eq!(dash.submit().unwrap(), 15_000.0);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
        dash.submit().unwrap();
        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn real_model_prices_los_angeles() {
        let artifacts = Artifacts::load(&fixtures::mem_artifacts(), &ArtifactPaths::default()).unwrap();
        let mut dash = Dashboard::new(Arc::new(artifacts), &Config::default());

        dash.select("Los Angeles").unwrap();
        dash.set_age(15.0).unwrap();
        assert!((dash.submit().unwrap() - fixtures::LA_PRICE).abs() < 1e-6);
    }

    #[test]
    fn selection_recentres_view_and_moves_highlight() {
        let mut dash = dashboard(Arc::new(Counting::default()));

        let view = dash.select("Los Angeles").unwrap();
        assert_eq!((view.longitude, view.latitude), (-118.24, 34.05));
        let la_map = dash.render_map().unwrap();

        let view = dash.select("San Diego").unwrap();
        assert_eq!((view.longitude, view.latitude), (-117.1, 32.8));
        assert_eq!(dash.view(), view);
        let sd_map = dash.render_map().unwrap();

        assert_ne!(la_map, sd_map);
        assert!(sd_map.contains(r#"class="selected" data-name="San Diego""#));
    }

    #[test]
    fn bad_inputs_leave_state_untouched() {
        let mut dash = dashboard(Arc::new(Counting::default()));

        assert_eq!(dash.select("Atlantis").unwrap_err(), InputError::UnknownCounty("Atlantis".into()));
        assert_eq!(dash.selected().name, "Alameda");

        assert!(dash.set_age(60.0).is_err());
        assert!(dash.set_income(42.0).is_err());
        assert_eq!(dash.input().housing_median_age, 10.0);
        assert_eq!(dash.input().income, 45.0);
    }

    #[test]
    fn ocean_override_and_auto_fill() {
        let mut dash = dashboard(Arc::new(Counting::default()));
        dash.select("Los Angeles").unwrap();
        assert_eq!(dash.sample().ocean_proximity, OceanProximity::LessThanOneHour);

        dash.set_ocean_proximity(Some(OceanProximity::Inland));
        assert_eq!(dash.sample().ocean_proximity, OceanProximity::Inland);

        dash.set_ocean_proximity(None);
        assert_eq!(dash.sample().ocean_proximity, OceanProximity::LessThanOneHour);
    }
}
