//! Wire types for the USGS earthquake GeoJSON feed.
//!
//! Only the members the map uses are modelled; everything else in the
//! payload (`metadata`, `bbox`, the many other event properties) is ignored.
//! Property values are optional because the feed publishes `null` freely.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Geometry of a feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedGeometry {
    /// `[lng, lat]` or `[lng, lat, depth_km]`
    Point { coordinates: Vec<f64> },
    /// Any other geometry type; carries no usable position.
    #[serde(other)]
    Unsupported,
}

impl FeedGeometry {
    pub fn position(&self) -> Option<LatLng> {
        match self {
            FeedGeometry::Point { coordinates } => LatLng::from_geojson_position(coordinates),
            FeedGeometry::Unsupported => None,
        }
    }

    /// Hypocenter depth in kilometres, when the feed publishes one.
    pub fn depth(&self) -> Option<f64> {
        match self {
            FeedGeometry::Point { coordinates } => coordinates.get(2).copied(),
            FeedGeometry::Unsupported => None,
        }
    }
}

/// Event properties used by the map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedProperties {
    #[serde(default)]
    pub place: Option<String>,
    /// Origin time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub mag: Option<f64>,
    /// Number of "Did You Feel It?" reports.
    #[serde(default)]
    pub felt: Option<i64>,
}

/// One raw entry of the feed's `features` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFeature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: FeedProperties,
    #[serde(default)]
    pub geometry: Option<FeedGeometry>,
}

/// Root object of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedDocument {
    FeatureCollection { features: Vec<FeedFeature> },
}

impl FeedDocument {
    pub fn into_features(self) -> Vec<FeedFeature> {
        match self {
            FeedDocument::FeatureCollection { features } => features,
        }
    }
}
