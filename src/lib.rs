//! # quakemap
//!
//! Plots recent earthquakes from the USGS GeoJSON feed on a web map.
//!
//! The crate fetches the feed, classifies every event by magnitude into a
//! marker color and radius, and assembles a declarative [`MapView`] with two
//! base tile layers, an earthquake overlay, a layer control and a legend.
//! Rendering is handed to Leaflet through [`LeafletDocument`].

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod tiles;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::{assemble_map, earthquake_layer, earthquake_marker, load_map, MapBuilder},
    config::{FeedConfig, MapConfig, TileConfig},
    geo::{LatLng, LatLngBounds},
    magnitude::{color_for, marker_style, radius_for, ColorBand},
    map::MapView,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::core::builder::load_map_blocking;

pub use data::{
    feed::{fetch_features, parse_feed, FeedClient},
    geojson::{FeedFeature, FeedProperties},
    record::EarthquakeRecord,
};

pub use layers::{
    base::LayerTrait, group::LayerGroup, marker::CircleMarker, tile::TileLayer,
};

pub use tiles::source::{MapboxStyleSource, TileSource};

pub use ui::{
    controls::{ControlPosition, LayerControl},
    legend::{legend_entries, Legend, LegendEntry},
    popup::PopupContent,
    style::{Color, MarkerStyle},
};

pub use rendering::leaflet::LeafletDocument;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum QuakeMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl QuakeMapError {
    /// True for the failures of the single feed fetch (transport, status, payload).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            QuakeMapError::Network(_) | QuakeMapError::Status { .. } | QuakeMapError::Serialization(_)
        )
    }
}

/// Error type alias for convenience
pub type Error = QuakeMapError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
///
/// Calling it more than once is harmless.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
