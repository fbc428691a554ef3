//! Configuration for the feed fetch, the base tile layers and the initial view.
//!
//! Every field has a default taken from [`crate::core::constants`], so a
//! `MapConfig::default()` reproduces the stock earthquake map. Configs
//! deserialize with `#[serde(default)]`, so partial documents are accepted.

use crate::core::{
    constants::{
        DEFAULT_CENTER, DEFAULT_CONTAINER_ID, DEFAULT_FEED_URL, DEFAULT_ZOOM,
        GRAYSCALE_LAYER_NAME, GRAYSCALE_STYLE_ID, MAPBOX_TILE_TEMPLATE, OUTDOORS_LAYER_NAME,
        OUTDOORS_STYLE_ID, TILE_ATTRIBUTION, TILE_MAX_ZOOM,
    },
    geo::LatLng,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how the earthquake feed is fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    /// Request timeout in milliseconds; `None` waits for the response indefinitely.
    pub timeout_ms: Option<u64>,
}

impl FeedConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// One selectable base layer: display name plus Mapbox style id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLayerConfig {
    pub name: String,
    pub style_id: String,
}

impl BaseLayerConfig {
    pub fn new(name: impl Into<String>, style_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style_id: style_id.into(),
        }
    }
}

/// Tile service settings shared by all base layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub url_template: String,
    /// Mapbox access token. Not validated; a missing token yields broken tiles.
    pub access_token: Option<String>,
    pub max_zoom: u8,
    pub attribution: String,
    /// Base layers in control order; the first one is active on load.
    pub base_layers: Vec<BaseLayerConfig>,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: MAPBOX_TILE_TEMPLATE.to_string(),
            access_token: None,
            max_zoom: TILE_MAX_ZOOM,
            attribution: TILE_ATTRIBUTION.to_string(),
            base_layers: vec![
                BaseLayerConfig::new(OUTDOORS_LAYER_NAME, OUTDOORS_STYLE_ID),
                BaseLayerConfig::new(GRAYSCALE_LAYER_NAME, GRAYSCALE_STYLE_ID),
            ],
        }
    }
}

/// Top-level map configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub feed: FeedConfig,
    pub tiles: TileConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: LatLng::from(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
            feed: FeedConfig::default(),
            tiles: TileConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.tiles.access_token = Some(token.into());
        self
    }

    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed.url = url.into();
        self
    }

    /// Sub-millisecond precision is dropped.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.feed.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.container_id, "map");
        assert_eq!(config.center, LatLng::new(39.8282, -98.5795));
        assert_eq!(config.zoom, 4.0);
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert!(config.feed.timeout().is_none());
        assert!(config.tiles.access_token.is_none());

        let names: Vec<_> = config.tiles.base_layers.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Outdoors", "Grayscale"]);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: MapConfig = serde_json::from_str(
            r#"{ "zoom": 6.0, "tiles": { "access_token": "pk.test" } }"#,
        )
        .unwrap();

        assert_eq!(config.zoom, 6.0);
        assert_eq!(config.tiles.access_token.as_deref(), Some("pk.test"));
        assert_eq!(config.tiles.max_zoom, 20);
        assert_eq!(config.tiles.base_layers.len(), 2);
        assert_eq!(config.container_id, "map");
    }

    #[test]
    fn test_builder_methods() {
        let config = MapConfig::default()
            .with_access_token("pk.abc")
            .with_feed_url("http://localhost/feed.geojson")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.tiles.access_token.as_deref(), Some("pk.abc"));
        assert_eq!(config.feed.url, "http://localhost/feed.geojson");
        assert_eq!(config.feed.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let config = MapConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(config.feed.timeout_ms, Some(500));
        assert_eq!(config.feed.timeout(), Some(Duration::from_millis(500)));

        let config = MapConfig::default().with_timeout(Duration::from_millis(2_750));
        assert_eq!(config.feed.timeout(), Some(Duration::from_millis(2_750)));
    }
}
