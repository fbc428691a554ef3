//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::{assemble_map, earthquake_layer, earthquake_marker, load_map, MapBuilder},
    config::{BaseLayerConfig, FeedConfig, MapConfig, TileConfig},
    geo::{LatLng, LatLngBounds},
    magnitude::{band_for, color_for, marker_style, radius_for, ColorBand, COLOR_BANDS},
    map::MapView,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::core::builder::load_map_blocking;

pub use crate::data::{
    feed::{fetch_features, parse_feed, FeedClient},
    geojson::{FeedFeature, FeedGeometry, FeedProperties},
    record::EarthquakeRecord,
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    group::LayerGroup,
    marker::CircleMarker,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::tiles::source::{MapboxStyleSource, TileSource};

pub use crate::ui::{
    controls::{ControlPosition, LayerControl, MapControl},
    legend::{legend_entries, Legend, LegendEntry},
    popup::PopupContent,
    style::{Color, MarkerStyle},
};

pub use crate::rendering::leaflet::LeafletDocument;

pub use crate::{QuakeMapError, Result};
