use crate::{
    core::geo::LatLng,
    data::geojson::FeedFeature,
    Error, Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for events the feed publishes without a place name.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// A usable earthquake event, converted from a [`FeedFeature`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    pub place: String,
    /// Origin time, epoch milliseconds
    pub time: i64,
    pub magnitude: f64,
    pub felt_reports: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
}

impl EarthquakeRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Origin time in UTC, `None` when the epoch value is out of chrono's range.
    pub fn origin_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.time)
    }

    /// Converts every usable feature, skipping the rest with a warning.
    pub fn from_features(features: &[FeedFeature]) -> Vec<EarthquakeRecord> {
        features
            .iter()
            .filter_map(|feature| match EarthquakeRecord::try_from(feature) {
                Ok(record) => Some(record),
                Err(_e) => {
                    #[cfg(feature = "debug")]
                    log::warn!(
                        "Skipping feed feature {}: {}",
                        feature.id.as_deref().unwrap_or("<no id>"),
                        _e
                    );
                    None
                }
            })
            .collect()
    }
}

impl TryFrom<&FeedFeature> for EarthquakeRecord {
    type Error = Error;

    fn try_from(feature: &FeedFeature) -> Result<Self> {
        let props = &feature.properties;

        let magnitude = props
            .mag
            .ok_or_else(|| Error::InvalidRecord("missing magnitude".to_string()))?;
        let time = props
            .time
            .ok_or_else(|| Error::InvalidRecord("missing origin time".to_string()))?;
        if DateTime::<Utc>::from_timestamp_millis(time).is_none() {
            return Err(Error::InvalidRecord(format!("origin time {} out of range", time)));
        }
        let position = feature
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.position())
            .ok_or_else(|| Error::InvalidRecord("missing point coordinates".to_string()))?;

        Ok(Self {
            place: props
                .place
                .clone()
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            time,
            magnitude,
            felt_reports: props.felt.and_then(|felt| u32::try_from(felt).ok()),
            latitude: position.lat,
            longitude: position.lng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::{FeedGeometry, FeedProperties};

    fn feature(mag: Option<f64>, felt: Option<i64>) -> FeedFeature {
        FeedFeature {
            id: Some("us7000test".to_string()),
            properties: FeedProperties {
                place: Some("10km N of Testville".to_string()),
                time: Some(1_700_000_000_000),
                mag,
                felt,
            },
            geometry: Some(FeedGeometry::Point {
                coordinates: vec![-100.0, 40.0, 12.0],
            }),
        }
    }

    #[test]
    fn test_conversion() {
        let record = EarthquakeRecord::try_from(&feature(Some(4.2), Some(3))).unwrap();
        assert_eq!(record.place, "10km N of Testville");
        assert_eq!(record.magnitude, 4.2);
        assert_eq!(record.felt_reports, Some(3));
        assert_eq!(record.position(), LatLng::new(40.0, -100.0));
        assert_eq!(
            record.origin_time().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn test_missing_magnitude_is_rejected() {
        let err = EarthquakeRecord::try_from(&feature(None, None)).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_geometry_is_rejected() {
        let mut f = feature(Some(2.0), None);
        f.geometry = None;
        assert!(EarthquakeRecord::try_from(&f).is_err());

        f.geometry = Some(FeedGeometry::Point { coordinates: vec![1.0] });
        assert!(EarthquakeRecord::try_from(&f).is_err());
    }

    #[test]
    fn test_optional_properties() {
        let mut f = feature(Some(1.1), Some(-1));
        f.properties.place = None;
        let record = EarthquakeRecord::try_from(&f).unwrap();
        assert_eq!(record.place, UNKNOWN_PLACE);
        assert_eq!(record.felt_reports, None);
    }

    #[test]
    fn test_unusable_time_is_rejected() {
        let mut f = feature(Some(3.0), None);
        f.properties.time = None;
        assert!(matches!(
            EarthquakeRecord::try_from(&f),
            Err(Error::InvalidRecord(_))
        ));

        f.properties.time = Some(i64::MAX);
        assert!(matches!(
            EarthquakeRecord::try_from(&f),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_from_features_skips_unusable() {
        let mut no_time = feature(Some(2.0), None);
        no_time.properties.time = None;
        let mut far_future = feature(Some(6.1), None);
        far_future.properties.time = Some(i64::MAX);

        let features = vec![
            feature(Some(4.2), Some(3)),
            feature(None, None),
            no_time,
            far_future,
            feature(Some(0.5), None),
        ];
        let records = EarthquakeRecord::from_features(&features);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].magnitude, 4.2);
        assert_eq!(records[1].magnitude, 0.5);
    }
}
