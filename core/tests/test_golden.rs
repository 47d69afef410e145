use serde::Deserialize;
use workout_core::read_package;

#[derive(Debug, Deserialize)]
struct GoldenRow {
    code: String,
    data: String,
    distance: f64,
    speed: f64,
    calories: f64,
}

#[test]
fn golden_table_matches() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/golden.csv");
    let mut rdr = csv::Reader::from_path(path).expect("open golden.csv");

    let mut rows = 0;
    for rec in rdr.deserialize() {
        let row: GoldenRow = rec.expect("golden row");
        let data: Vec<f64> = row
            .data
            .split_whitespace()
            .map(|x| x.parse().expect("number"))
            .collect();

        let s = read_package(&row.code, &data).unwrap().show_training_info();
        assert!((s.distance - row.distance).abs() < 1e-6, "{}: distance {}", row.code, s.distance);
        assert!((s.speed - row.speed).abs() < 1e-6, "{}: speed {}", row.code, s.speed);
        assert!((s.calories - row.calories).abs() < 1e-6, "{}: calories {}", row.code, s.calories);
        rows += 1;
    }
    assert_eq!(rows, 5);
}
