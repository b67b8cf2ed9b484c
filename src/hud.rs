use chrono::{DateTime, Local};

use crate::core::orientation::{HudReadout, OrientationSample};

pub const NO_DATA_MESSAGE: &str = "No simulation data available.";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Receives the readout for every sample the session displays
pub trait HudSink {
    fn show_sample(&mut self, index: usize, sample: &OrientationSample, readout: &HudReadout);

    /// The loaded sequence is empty
    fn show_no_data(&mut self);
}

/// Formatted HUD strings, rebuilt on every update and read by the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HudText {
    pub pitch: String,
    pub roll: String,
    pub yaw: String,
    pub timestamp: String,
    pub index: Option<usize>,
    pub message: Option<String>,
    changed: bool,
}

impl HudText {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once per update; used to log the HUD when no panel shows it
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn summary(&self) -> String {
        match (&self.message, self.index) {
            (Some(message), _) => message.clone(),
            (None, Some(index)) => format!(
                "#{} {} pitch {} roll {} yaw {}",
                index, self.timestamp, self.pitch, self.roll, self.yaw
            ),
            (None, None) => String::new(),
        }
    }
}

impl HudSink for HudText {
    fn show_sample(&mut self, index: usize, sample: &OrientationSample, readout: &HudReadout) {
        self.pitch = format_degrees(readout.pitch_deg);
        self.roll = format_degrees(readout.roll_deg);
        self.yaw = format_degrees(readout.yaw_deg);
        self.timestamp = format_timestamp(sample.time);
        self.index = Some(index);
        self.message = None;
        self.changed = true;
    }

    fn show_no_data(&mut self) {
        *self = HudText {
            message: Some(NO_DATA_MESSAGE.to_string()),
            changed: true,
            ..HudText::default()
        };
    }
}

pub fn format_degrees(degrees: f64) -> String {
    format!("{:.2}°", degrees)
}

/// Local date-time for a millisecond epoch timestamp, raw milliseconds if out of range
pub fn format_timestamp(millis: f64) -> String {
    let local = millis
        .is_finite()
        .then(|| DateTime::from_timestamp_millis(millis as i64))
        .flatten()
        .map(|utc| utc.with_timezone(&Local));

    match local {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => format!("{} ms", millis),
    }
}
