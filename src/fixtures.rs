//! Shared in-memory test data: three counties, a cleaned dataset and a model.

use geo::{Geometry, MultiPolygon, Polygon, polygon};
use polars::{df, frame::DataFrame};

use crate::{
    config::ArtifactPaths,
    io::{parquet::write_parquet_bytes, wkb::write_wkb_geometry},
    CountyRecord, CountyStats, HousingSample, MemArtifacts, OceanProximity,
};

/// Price the fixture model gives Los Angeles at age 15, income 45.
pub(crate) const LA_PRICE: f64 = 335_000.0;

pub(crate) fn stats(ocean_proximity: OceanProximity) -> CountyStats {
    CountyStats {
        total_rooms: 2000.0,
        total_bedrooms: 400.0,
        population: 3000.0,
        households: 1000.0,
        ocean_proximity,
        rooms_per_households: 2.0,
        bedrooms_per_room: 0.2,
        population_per_household: 3.0,
    }
}

pub(crate) fn county(name: &str, lon: f64, lat: f64) -> CountyRecord {
    CountyRecord {
        name: name.to_string(),
        centroid: geo::Point::new(lon, lat),
        stats: stats(OceanProximity::LessThanOneHour),
    }
}

/// Los Angeles at age 15 and income slider 45.
pub(crate) fn la_sample() -> HousingSample {
    HousingSample {
        longitude: -118.24,
        latitude: 34.05,
        housing_median_age: 15.0,
        total_rooms: 2000.0,
        total_bedrooms: 400.0,
        population: 3000.0,
        households: 1000.0,
        median_income: 4.5,
        ocean_proximity: OceanProximity::LessThanOneHour,
        median_income_cat: 4,
        rooms_per_households: 2.0,
        bedrooms_per_room: 0.2,
        population_per_household: 3.0,
    }
}

/// Axis-aligned square of half-width `r` around a point, counter-clockwise.
pub(crate) fn square(lon: f64, lat: f64, r: f64) -> Polygon<f64> {
    polygon![
        (x: lon - r, y: lat - r), (x: lon + r, y: lat - r),
        (x: lon + r, y: lat + r), (x: lon - r, y: lat + r),
    ]
}

/// Same square wound clockwise.
fn cw_square(lon: f64, lat: f64, r: f64) -> Polygon<f64> {
    polygon![
        (x: lon - r, y: lat - r), (x: lon - r, y: lat + r),
        (x: lon + r, y: lat + r), (x: lon + r, y: lat - r),
    ]
}

/// Geo dataset rows, deliberately not in name order.
pub(crate) fn geo_frame(with_geometry: bool) -> DataFrame {
    let mut df = df!(
        "name" => ["San Diego", "Alameda", "Los Angeles"],
        "longitude" => [-117.1, -122.0, -118.24],
        "latitude" => [32.8, 37.6, 34.05],
        "total_rooms" => [2500.0, 1800.0, 2000.0],
        "total_bedrooms" => [500.0, 350.0, 400.0],
        "population" => [2800.0, 2600.0, 3000.0],
        "households" => [900.0, 950.0, 1000.0],
        "ocean_proximity" => ["NEAR OCEAN", "NEAR BAY", "<1H OCEAN"],
        "rooms_per_households" => [2500.0 / 900.0, 1800.0 / 950.0, 2.0],
        "bedrooms_per_room" => [0.2, 350.0 / 1800.0, 0.2],
        "population_per_househoulds" => [2800.0 / 900.0, 2600.0 / 950.0, 3.0],
    ).unwrap();

    if with_geometry {
        let san_diego = write_wkb_geometry(&Geometry::Polygon(cw_square(-117.1, 32.8, 0.5)));
        let alameda = write_wkb_geometry(&Geometry::MultiPolygon(MultiPolygon::new(vec![
            square(-122.0, 37.6, 0.3),
            square(-122.6, 37.9, 0.1),
        ])));
        let los_angeles = write_wkb_geometry(&Geometry::Polygon(square(-118.24, 34.05, 0.5)));

        let geometry = df!(
            "geometry" => [san_diego.as_slice(), alameda.as_slice(), los_angeles.as_slice()],
        ).unwrap();
        df = df.hstack(geometry.get_columns()).unwrap();
    }

    df
}

pub(crate) fn geo_parquet_bytes() -> Vec<u8> {
    write_parquet_bytes(&geo_frame(true)).unwrap()
}

/// Cleaned dataset with housing_median_age spanning [1, 52].
pub(crate) fn housing_parquet_bytes() -> Vec<u8> {
    let df = df!(
        "housing_median_age" => [41.0, 21.0, 52.0, 1.0, 15.0],
        "median_income" => [8.3252, 8.3014, 7.2574, 5.6431, 3.8462],
        "median_house_value" => [452600.0, 358500.0, 352100.0, 341300.0, 342200.0],
    ).unwrap();
    write_parquet_bytes(&df).unwrap()
}

/// Linear model: 100000 + 1000 * age + 40000 * median_income + 5000 * income_cat
/// plus a per-category ocean offset (<1H OCEAN: 20000).
pub(crate) fn model_json() -> String {
    r#"{
        "kind": "linear_pipeline",
        "features": [
            { "column": "longitude" },
            { "column": "latitude" },
            { "column": "housing_median_age" },
            { "column": "total_rooms", "encoder": { "type": "standard", "mean": 2000.0, "scale": 500.0 } },
            { "column": "total_bedrooms" },
            { "column": "population" },
            { "column": "households" },
            { "column": "median_income" },
            { "column": "ocean_proximity", "encoder": {
                "type": "one_hot",
                "categories": ["<1H OCEAN", "INLAND", "ISLAND", "NEAR BAY", "NEAR OCEAN"]
            } },
            { "column": "median_income_cat" },
            { "column": "rooms_per_households" },
            { "column": "bedrooms_per_room" },
            { "column": "population_per_househoulds" }
        ],
        "coefficients": [
            0.0, 0.0, 1000.0, 7.0, 0.0, 0.0, 0.0, 40000.0,
            20000.0, -30000.0, 100000.0, 15000.0, 25000.0,
            5000.0, 0.0, 0.0, 0.0
        ],
        "intercept": 100000.0
    }"#.to_string()
}

/// All three artifacts at their default paths.
pub(crate) fn mem_artifacts() -> MemArtifacts {
    let paths = ArtifactPaths::default();
    let mut artifacts = MemArtifacts::default();
    artifacts.insert(&paths.cleaned, housing_parquet_bytes());
    artifacts.insert(&paths.geo, geo_parquet_bytes());
    artifacts.insert(&paths.model, model_json().into_bytes());
    artifacts
}
