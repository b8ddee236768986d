use geo::{polygon, Geometry, MultiPolygon};

use countyprice::{digitize, income_category, is_valid, normalize, signed_area, INCOME_BINS};

#[test]
fn income_boundaries_are_right_open() {
    let expected = [(0.0, 1), (1.5, 2), (3.0, 3), (4.5, 4), (6.0, 5)];
    for (x, bucket) in expected {
        assert_eq!(digitize(x, &INCOME_BINS), bucket, "x = {x}");
    }
    assert_eq!(digitize(-0.5, &INCOME_BINS), 0);
    assert_eq!(digitize(f64::NAN, &INCOME_BINS), INCOME_BINS.len());
    assert_eq!(income_category(4.5), 4);
}

#[test]
fn income_bucketing_is_monotonic() {
    let mut last = 0;
    for i in 0..=200 {
        let bucket = digitize(i as f64 * 0.05, &INCOME_BINS);
        assert!(bucket >= last);
        last = bucket;
    }
    assert_eq!(last, 5);
}

#[test]
fn normalization_is_idempotent_on_valid_input() {
    let shape = MultiPolygon::new(vec![
        polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)],
        polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 5.5, y: 6.0)],
    ]);
    assert!(is_valid(&shape));

    let once = normalize(&Geometry::MultiPolygon(shape)).unwrap();
    let rebuilt = MultiPolygon::new(once.iter()
        .map(|ring| geo::Polygon::new(ring.iter().map(|&[x, y]| geo::coord! { x: x, y: y }).collect(), vec![]))
        .collect());
    let twice = normalize(&Geometry::MultiPolygon(rebuilt)).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn output_rings_are_closed_and_counter_clockwise() {
    let clockwise = polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0), (x: 1.0, y: 1.0), (x: 1.0, y: 0.0)];
    let bowtie = polygon![(x: 10.0, y: 0.0), (x: 12.0, y: 2.0), (x: 12.0, y: 0.0), (x: 10.0, y: 2.0)];

    for geometry in [Geometry::Polygon(clockwise), Geometry::Polygon(bowtie)] {
        let rings = normalize(&geometry).unwrap();
        assert!(!rings.is_empty());
        for ring in rings {
            assert!(ring.len() >= 4);
            assert_eq!(ring.first(), ring.last());
            assert!(signed_area(&ring) > 0.0);
        }
    }
}

#[test]
fn points_are_not_polygons() {
    assert!(normalize(&Geometry::Point(geo::point!(x: 1.0, y: 2.0))).is_err());
}
