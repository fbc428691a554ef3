use crate::{
    core::{
        config::{BaseLayerConfig, TileConfig},
        constants::TILE_SIZE,
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{MapboxStyleSource, TileSource},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub attribution: Option<String>,
    pub opacity: f32,
    pub z_index: i32,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            min_zoom: 0,
            max_zoom: 18,
            attribution: None,
            opacity: 1.0,
            z_index: 1,
        }
    }
}

/// Raster base layer served by a [`TileSource`]
#[derive(Debug)]
pub struct TileLayer {
    properties: LayerProperties,
    source: Box<dyn TileSource>,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(
        id: String,
        name: String,
        source: Box<dyn TileSource>,
        options: TileLayerOptions,
    ) -> Self {
        let mut properties = LayerProperties::new(id, name, LayerType::Tile);
        properties.opacity = options.opacity;
        properties.z_index = options.z_index;

        Self {
            properties,
            source,
            options,
        }
    }

    /// Base layer drawing a Mapbox style with the shared tile settings.
    pub fn mapbox(base: &BaseLayerConfig, tiles: &TileConfig) -> Self {
        #[cfg(feature = "debug")]
        if tiles.access_token.is_none() {
            log::warn!(
                "No Mapbox access token set; '{}' tiles will not load",
                base.name
            );
        }

        let source = MapboxStyleSource::with_template(
            tiles.url_template.clone(),
            base.style_id.clone(),
            tiles.access_token.as_deref(),
        );
        let options = TileLayerOptions {
            max_zoom: tiles.max_zoom,
            attribution: Some(tiles.attribution.clone()),
            ..Default::default()
        };

        Self::new(
            base.style_id.clone(),
            base.name.clone(),
            Box::new(source),
            options,
        )
    }

    /// Template handed to the mapping library, token already substituted.
    pub fn url_template(&self) -> String {
        self.source.url_template()
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "tileSize": self.options.tile_size,
            "minZoom": self.options.min_zoom,
            "maxZoom": self.options.max_zoom,
            "attribution": self.options.attribution,
            "opacity": self.properties.opacity,
            "zIndex": self.properties.z_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TileConfig;

    #[test]
    fn test_mapbox_layer() {
        let tiles = TileConfig {
            access_token: Some("pk.test".to_string()),
            ..TileConfig::default()
        };
        let layer = TileLayer::mapbox(&tiles.base_layers[1], &tiles);

        assert_eq!(layer.name(), "Grayscale");
        assert_eq!(layer.id(), "light-v10");
        assert_eq!(layer.layer_type(), LayerType::Tile);
        assert!(layer
            .url_template()
            .ends_with("/light-v10/tiles/{z}/{x}/{y}?access_token=pk.test"));

        let options = layer.options();
        assert_eq!(options["maxZoom"], 20);
        assert!(options["attribution"].as_str().unwrap().contains("OpenStreetMap"));
        assert!(layer.bounds().is_none());
    }

    #[test]
    fn test_opacity_is_clamped() {
        let tiles = TileConfig::default();
        let mut layer = TileLayer::mapbox(&tiles.base_layers[0], &tiles);
        layer.set_opacity(1.7);
        assert_eq!(layer.opacity(), 1.0);
    }
}
