use crate::data::record::EarthquakeRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format of the origin time, e.g. `Tue Nov 14 2023 22:13:20 UTC`.
pub const TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Text shown for events without any "felt" reports.
pub const NO_FELT_REPORTS: &str = "none";

/// Popup attached to an earthquake marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupContent {
    pub place: String,
    pub time: Option<DateTime<Utc>>,
    pub magnitude: f64,
    pub felt_reports: Option<u32>,
}

impl PopupContent {
    pub fn from_record(record: &EarthquakeRecord) -> Self {
        Self {
            place: record.place.clone(),
            time: record.origin_time(),
            magnitude: record.magnitude,
            felt_reports: record.felt_reports,
        }
    }

    pub fn formatted_time(&self) -> String {
        match self.time {
            Some(time) => time.format(TIME_FORMAT).to_string(),
            None => "unknown".to_string(),
        }
    }

    pub fn formatted_felt_reports(&self) -> String {
        match self.felt_reports {
            Some(count) => count.to_string(),
            None => NO_FELT_REPORTS.to_string(),
        }
    }

    /// HTML body of the popup. The place name is escaped, the rest is generated.
    pub fn to_html(&self) -> String {
        format!(
            "<h3>Where: {}</h3><hr><p>Time: {}</p><hr><p>Magnitude: {}</p><hr><p>Number of \"Felt\" Reports: {}</p>",
            html_escape::encode_safe(&self.place),
            self.formatted_time(),
            self.magnitude,
            self.formatted_felt_reports()
        )
    }
}
