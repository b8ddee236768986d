use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use geo::Point;
use polars::frame::DataFrame;
use tracing::{debug, info, warn};

use super::{columns::{binary_values, f64_values, str_values}, OceanProximity};
use crate::{geom::{normalize, Ring}, io::{parquet::{geometry_column_name, read_parquet_bytes}, wkb::read_wkb_geometry}, InputError};

/// Aggregate housing statistics attached to a county.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyStats {
    pub total_rooms: f64,
    pub total_bedrooms: f64,
    pub population: f64,
    pub households: f64,
    pub ocean_proximity: OceanProximity,
    pub rooms_per_households: f64,
    pub bedrooms_per_room: f64,
    pub population_per_household: f64,
}

impl CountyStats {
    /// Build stats from raw totals, deriving the three ratios.
    pub fn from_totals(
        total_rooms: f64,
        total_bedrooms: f64,
        population: f64,
        households: f64,
        ocean_proximity: OceanProximity,
    ) -> Result<Self, InputError> {
        let positive = |field: &'static str, value: f64| -> Result<f64, InputError> {
            if value.is_finite() && value > 0.0 { Ok(value) }
            else { Err(InputError::OutOfRange { field, value, min: f64::MIN_POSITIVE, max: f64::MAX }) }
        };
        let non_negative = |field: &'static str, value: f64| -> Result<f64, InputError> {
            if value.is_finite() && value >= 0.0 { Ok(value) }
            else { Err(InputError::OutOfRange { field, value, min: 0.0, max: f64::MAX }) }
        };

        let total_rooms = positive("total_rooms", total_rooms)?;
        let households = positive("households", households)?;
        let total_bedrooms = non_negative("total_bedrooms", total_bedrooms)?;
        let population = non_negative("population", population)?;

        Ok(Self {
            total_rooms,
            total_bedrooms,
            population,
            households,
            ocean_proximity,
            rooms_per_households: total_rooms / households,
            bedrooms_per_room: total_bedrooms / total_rooms,
            population_per_household: population / households,
        })
    }
}

/// A county of the geo dataset: name, centroid and housing statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyRecord {
    pub name: String,
    pub centroid: Point<f64>, // (lon, lat)
    pub stats: CountyStats,
}

impl CountyRecord {
    /// A record with a checked centroid, used for manual entry.
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64, stats: CountyStats) -> Result<Self, InputError> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::OutOfRange { field: "longitude", value: longitude, min: -180.0, max: 180.0 });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InputError::OutOfRange { field: "latitude", value: latitude, min: -90.0, max: 90.0 });
        }
        Ok(Self { name: name.into(), centroid: Point::new(longitude, latitude), stats })
    }

    #[inline] pub fn longitude(&self) -> f64 { self.centroid.x() }

    #[inline] pub fn latitude(&self) -> f64 { self.centroid.y() }
}

/// Column names of the geo dataset.
pub(crate) mod cols {
    pub(crate) const NAME: &str = "name";
    pub(crate) const LONGITUDE: &str = "longitude";
    pub(crate) const LATITUDE: &str = "latitude";
    pub(crate) const TOTAL_ROOMS: &str = "total_rooms";
    pub(crate) const TOTAL_BEDROOMS: &str = "total_bedrooms";
    pub(crate) const POPULATION: &str = "population";
    pub(crate) const HOUSEHOLDS: &str = "households";
    pub(crate) const OCEAN_PROXIMITY: &str = "ocean_proximity";
    pub(crate) const ROOMS_PER_HOUSEHOLDS: &str = "rooms_per_households";
    pub(crate) const BEDROOMS_PER_ROOM: &str = "bedrooms_per_room";
    pub(crate) const POPULATION_PER_HOUSEHOLDS: &str = "population_per_househoulds";
}

/// All counties, sorted by name, with their render-ready rings when the dataset
/// carries geometry.
#[derive(Debug, Clone)]
pub struct CountyTable {
    records: Vec<CountyRecord>,
    index: AHashMap<String, usize>,
    shapes: Option<Vec<Vec<Ring>>>,
}

impl CountyTable {
    /// Build a table from records and optional per-record rings (same order).
    pub fn new(records: Vec<CountyRecord>, shapes: Option<Vec<Vec<Ring>>>) -> Result<Self> {
        if let Some(shapes) = &shapes {
            if shapes.len() != records.len() {
                bail!("[data::county] {} shapes for {} counties", shapes.len(), records.len());
            }
        }

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&a, &b| records[a].name.cmp(&records[b].name));

        let shapes = shapes.map(|mut shapes| {
            order.iter().map(|&i| std::mem::take(&mut shapes[i])).collect::<Vec<_>>()
        });
        let mut slots: Vec<Option<CountyRecord>> = records.into_iter().map(Some).collect();
        let records: Vec<CountyRecord> = order.iter().filter_map(|&i| slots[i].take()).collect();

        let mut index = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                bail!("[data::county] duplicate county name {:?}", record.name);
            }
        }

        Ok(Self { records, index, shapes })
    }

    /// Read the geo dataset from GeoParquet (or plain Parquet) bytes.
    ///
    /// The geometry column is optional; without it the map is unavailable.
    pub fn from_geoparquet_bytes(bytes: &[u8]) -> Result<Self> {
        let df = read_parquet_bytes(bytes)?;
        let geometry_column = geometry_column_name(bytes)?;
        Self::from_frame(&df, &geometry_column)
    }

    /// Build a table from a frame holding the geo dataset columns.
    pub(crate) fn from_frame(df: &DataFrame, geometry_column: &str) -> Result<Self> {
        let records = records_from_frame(df)?;

        let shapes = if df.column(geometry_column).is_ok() {
            let shapes = binary_values(df, geometry_column)?.into_iter().enumerate()
                .map(|(i, wkb)| match wkb {
                    Some(wkb) => read_wkb_geometry(wkb)
                        .and_then(|g| normalize(&g))
                        .with_context(|| format!("[data::county] bad geometry for {:?}", records[i].name)),
                    None => {
                        warn!("[data::county] {:?} has no geometry", records[i].name);
                        Ok(Vec::new())
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            Some(shapes)
        } else {
            warn!("[data::county] no {geometry_column:?} column; map rendering disabled");
            None
        };

        let table = Self::new(records, shapes)?;
        info!("[data::county] loaded {} counties (geometry: {})", table.len(), table.has_geometry());
        Ok(table)
    }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Whether the dataset carried polygons.
    #[inline] pub fn has_geometry(&self) -> bool { self.shapes.is_some() }

    /// Records in name order.
    #[inline] pub fn records(&self) -> &[CountyRecord] { &self.records }

    /// County names in sorted order (the selector's choices).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Position of a county in name order.
    pub fn position(&self, name: &str) -> Result<usize, InputError> {
        self.index.get(name).copied()
            .ok_or_else(|| InputError::UnknownCounty(name.to_string()))
    }

    /// Look up a county by exact name.
    pub fn get(&self, name: &str) -> Result<&CountyRecord, InputError> {
        let i = self.position(name)?;
        debug!("[data::county] lookup {name:?} -> #{i}");
        Ok(&self.records[i])
    }

    /// Render-ready rings of the county at `idx`, if geometry was loaded.
    pub fn shape(&self, idx: usize) -> Option<&[Ring]> {
        self.shapes.as_ref().and_then(|s| s.get(idx)).map(Vec::as_slice)
    }
}

fn records_from_frame(df: &DataFrame) -> Result<Vec<CountyRecord>> {
    let names = str_values(df, cols::NAME)?;
    let lon = f64_values(df, cols::LONGITUDE)?;
    let lat = f64_values(df, cols::LATITUDE)?;
    let total_rooms = f64_values(df, cols::TOTAL_ROOMS)?;
    let total_bedrooms = f64_values(df, cols::TOTAL_BEDROOMS)?;
    let population = f64_values(df, cols::POPULATION)?;
    let households = f64_values(df, cols::HOUSEHOLDS)?;
    let ocean = str_values(df, cols::OCEAN_PROXIMITY)?;
    let rooms_per_households = f64_values(df, cols::ROOMS_PER_HOUSEHOLDS)?;
    let bedrooms_per_room = f64_values(df, cols::BEDROOMS_PER_ROOM)?;
    let population_per_household = f64_values(df, cols::POPULATION_PER_HOUSEHOLDS)?;

    (0..names.len())
        .map(|i| {
            let ocean_proximity = ocean[i].parse::<OceanProximity>()
                .with_context(|| format!("[data::county] row {i} ({:?})", names[i]))?;
            Ok(CountyRecord {
                name: names[i].clone(),
                centroid: Point::new(lon[i], lat[i]),
                stats: CountyStats {
                    total_rooms: total_rooms[i],
                    total_bedrooms: total_bedrooms[i],
                    population: population[i],
                    households: households[i],
                    ocean_proximity,
                    rooms_per_households: rooms_per_households[i],
                    bedrooms_per_room: bedrooms_per_room[i],
                    population_per_household: population_per_household[i],
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn manual_record_checks_coordinates() {
        let stats = fixtures::stats(OceanProximity::Inland);
        let record = CountyRecord::new("manual", -118.24, 34.05, stats.clone()).unwrap();
        assert_eq!((record.longitude(), record.latitude()), (-118.24, 34.05));

        assert!(matches!(CountyRecord::new("manual", -200.0, 34.0, stats.clone()),
            Err(InputError::OutOfRange { field: "longitude", .. })));
        assert!(CountyRecord::new("manual", 0.0, f64::NAN, stats).is_err());
    }

    #[test]
    fn loads_sorted_records_with_shapes() {
        let table = CountyTable::from_geoparquet_bytes(&fixtures::geo_parquet_bytes()).unwrap();

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["Alameda", "Los Angeles", "San Diego"]);
        assert!(table.has_geometry());

        let la = table.get("Los Angeles").unwrap();
        assert_eq!(la.longitude(), -118.24);
        assert_eq!(la.latitude(), 34.05);
        assert_eq!(la.stats.ocean_proximity, OceanProximity::LessThanOneHour);

        // rows were shuffled in the fixture; shapes must follow their records
        let idx = table.position("San Diego").unwrap();
        let ring = &table.shape(idx).unwrap()[0];
        assert!(ring.iter().all(|&[x, _]| x > -118.0));
    }

    #[test]
    fn missing_geometry_column_disables_shapes() {
        let df = fixtures::geo_frame(false);
        let table = CountyTable::from_frame(&df, "geometry").unwrap();
        assert!(!table.has_geometry());
        assert_eq!(table.shape(0), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unknown_county_is_an_input_error() {
        let table = CountyTable::from_frame(&fixtures::geo_frame(false), "geometry").unwrap();
        assert_eq!(table.get("Atlantis"), Err(InputError::UnknownCounty("Atlantis".into())));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let record = fixtures::county("Alameda", -122.0, 37.6);
        assert!(CountyTable::new(vec![record.clone(), record], None).is_err());
    }

    #[test]
    fn shape_count_must_match() {
        let record = fixtures::county("Alameda", -122.0, 37.6);
        assert!(CountyTable::new(vec![record], Some(vec![])).is_err());
    }

    #[test]
    fn stats_from_totals_derives_ratios() {
        let stats = CountyStats::from_totals(2000.0, 400.0, 3000.0, 1000.0, OceanProximity::Inland).unwrap();
        assert_eq!(stats.rooms_per_households, 2.0);
        assert_eq!(stats.bedrooms_per_room, 0.2);
        assert_eq!(stats.population_per_household, 3.0);
    }

    #[test]
    fn stats_from_totals_rejects_zero_households() {
        let err = CountyStats::from_totals(2000.0, 400.0, 3000.0, 0.0, OceanProximity::Inland).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "households", .. }));
    }
}
