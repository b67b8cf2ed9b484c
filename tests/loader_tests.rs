use attitude_viewer::core::OrientationSample;
use attitude_viewer::loaders::{load_samples, parse_samples, SampleSet, Series};
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("attitude_viewer_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[cfg(test)]
mod sample_loader_tests {
    use super::*;

    const FILE: &str = r#"{
        "original": [
            {"time": 1700000000000, "pitch": 0.1, "roll": -0.2, "yaw": 1.5},
            {"time": 1700000000020, "pitch": 0.11, "roll": -0.21, "yaw": 1.52}
        ],
        "calculated": [
            {"time": 1700000000000, "pitch": 0.0, "roll": 0.0, "yaw": 0.0}
        ]
    }"#;

    #[test]
    fn test_parse_both_series() {
        let set = parse_samples(FILE).unwrap();

        assert_eq!(set.series(Series::Original).len(), 2);
        assert_eq!(set.series(Series::Calculated).len(), 1);
        assert_eq!(
            set.original[1],
            OrientationSample::new(1_700_000_000_020.0, 0.11, -0.21, 1.52)
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let json = r#"[
            {"time": 3, "pitch": 0, "roll": 0, "yaw": 0},
            {"time": 1, "pitch": 0, "roll": 0, "yaw": 0}
        ]"#;
        let set = parse_samples(json).unwrap();

        let times: Vec<f64> = set.original.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![3.0, 1.0], "Loader must not reorder samples");
    }

    #[test]
    fn test_empty_original_is_valid() {
        let set = parse_samples(r#"{"original": []}"#).unwrap();
        assert_eq!(set, SampleSet::default());
    }

    #[test]
    fn test_load_from_disk_and_pick_series() {
        let path = temp_file("ok.json", FILE);
        let samples = load_samples(&path).unwrap().into_series(Series::Calculated);
        std::fs::remove_file(&path).ok();

        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let path = std::env::temp_dir().join("attitude_viewer_does_not_exist.json");
        let err = load_samples(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("attitude_viewer_does_not_exist.json"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_file("bad.json", r#"{"original": [{"time": "soon"}]}"#);
        let result = load_samples(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
