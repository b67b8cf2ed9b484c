use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::orientation::OrientationSample;

/// Which sequence of a sample file to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Series {
    #[default]
    Original,
    Calculated,
}

/// Contents of one imported simulation file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub original: Vec<OrientationSample>,
    #[serde(default)]
    pub calculated: Vec<OrientationSample>,
}

impl SampleSet {
    pub fn series(&self, series: Series) -> &[OrientationSample] {
        match series {
            Series::Original => &self.original,
            Series::Calculated => &self.calculated,
        }
    }

    /// Take one series, dropping the other
    pub fn into_series(self, series: Series) -> Vec<OrientationSample> {
        match series {
            Series::Original => self.original,
            Series::Calculated => self.calculated,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SampleFile {
    Set(SampleSet),
    Bare(Vec<OrientationSample>),
}

/// Parse a sample file body. A bare array is read as the original series.
pub fn parse_samples(json: &str) -> Result<SampleSet> {
    let file: SampleFile = serde_json::from_str(json)
        .context("Sample data must be {\"original\": [...]} or an array of samples")?;

    Ok(match file {
        SampleFile::Set(set) => set,
        SampleFile::Bare(original) => SampleSet {
            original,
            calculated: Vec::new(),
        },
    })
}

/// Read and parse a sample file from disk
pub fn load_samples(path: impl AsRef<Path>) -> Result<SampleSet> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file: {:?}", path))?;
    let set = parse_samples(&json)
        .with_context(|| format!("Failed to parse sample file: {:?}", path))?;

    info!(
        "sample file {:?}: {} original, {} calculated",
        path,
        set.original.len(),
        set.calculated.len()
    );
    if set.original.is_empty() && set.calculated.is_empty() {
        warn!("sample file {:?} contains no samples", path);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculated_is_optional() {
        let set = parse_samples(r#"{"original":[{"time":1,"pitch":0.1,"roll":0.2,"yaw":0.3}]}"#)
            .unwrap();
        assert_eq!(set.original, vec![OrientationSample::new(1.0, 0.1, 0.2, 0.3)]);
        assert!(set.calculated.is_empty());
    }

    #[test]
    fn bare_array_becomes_original() {
        let set = parse_samples(r#"[{"time":5,"pitch":0,"roll":0,"yaw":1}]"#).unwrap();
        assert_eq!(set.series(Series::Original).len(), 1);
        assert!(set.series(Series::Calculated).is_empty());
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(parse_samples(r#"{"original":[{"time":1,"pitch":0.1}]}"#).is_err());
        assert!(parse_samples("not json").is_err());
    }
}
