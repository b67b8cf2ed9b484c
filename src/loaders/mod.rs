pub mod samples;

pub use samples::{load_samples, parse_samples, SampleSet, Series};
