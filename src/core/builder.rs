//! Map assembly
//!
//! Turns earthquake records into circle markers and composes them with the
//! base layers, the layer control and the legend into a [`MapView`].

use crate::{
    core::{
        config::MapConfig,
        constants::{DEFAULT_CENTER, DEFAULT_CONTAINER_ID, DEFAULT_ZOOM, EARTHQUAKE_LAYER_NAME},
        geo::LatLng,
        magnitude::marker_style,
        map::MapView,
    },
    data::{feed::FeedClient, record::EarthquakeRecord},
    layers::{base::LayerTrait, group::LayerGroup, marker::CircleMarker, tile::TileLayer},
    ui::{
        controls::{LayerControl, MapControl},
        legend::Legend,
        popup::PopupContent,
    },
    Error, Result,
};

/// Builder for creating and configuring [`MapView`] instances
pub struct MapBuilder {
    container_id: String,
    center: LatLng,
    zoom: f64,
    base_layers: Vec<TileLayer>,
    /// Name of the base layer shown on load; the first one when unset
    active_base: Option<String>,
    overlays: Vec<LayerGroup>,
    /// `Some(collapsed)` attaches a layer control
    layer_control: Option<bool>,
    legend: Option<Legend>,
}

impl MapBuilder {
    /// Create a new MapBuilder with default view settings and no layers
    pub fn new() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: LatLng::from(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
            base_layers: Vec::new(),
            active_base: None,
            overlays: Vec::new(),
            layer_control: None,
            legend: None,
        }
    }

    /// Start from a config: container, view and the configured base layers
    pub fn from_config(config: &MapConfig) -> Self {
        let base_layers = config
            .tiles
            .base_layers
            .iter()
            .map(|base| TileLayer::mapbox(base, &config.tiles))
            .collect();

        Self {
            container_id: config.container_id.clone(),
            center: config.center,
            zoom: config.zoom,
            base_layers,
            ..Self::new()
        }
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    pub fn with_base_layer(mut self, layer: TileLayer) -> Self {
        self.base_layers.push(layer);
        self
    }

    /// Choose the base layer shown on load by name
    pub fn with_active_base(mut self, name: impl Into<String>) -> Self {
        self.active_base = Some(name.into());
        self
    }

    pub fn with_overlay(mut self, overlay: LayerGroup) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Attach a layer control listing every base layer and overlay
    pub fn with_layer_control(mut self, collapsed: bool) -> Self {
        self.layer_control = Some(collapsed);
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Build the view
    pub fn build(self) -> Result<MapView> {
        let mut base_layers = self.base_layers;

        let active_base = match &self.active_base {
            Some(name) => base_layers
                .iter()
                .position(|layer| layer.name() == name)
                .ok_or_else(|| Error::Config(format!("unknown base layer '{}'", name)))?,
            None => 0,
        };
        for (i, layer) in base_layers.iter_mut().enumerate() {
            layer.set_visible(i == active_base);
        }

        let mut controls = Vec::new();
        if let Some(collapsed) = self.layer_control {
            let control = LayerControl::new(
                base_layers.iter().map(|l| l.name().to_string()).collect(),
                self.overlays.iter().map(|l| l.name().to_string()).collect(),
            )
            .with_collapsed(collapsed);
            controls.push(MapControl::Layers(control));
        }
        if let Some(legend) = self.legend {
            controls.push(MapControl::Legend(legend));
        }

        Ok(MapView {
            container_id: self.container_id,
            center: self.center,
            zoom: self.zoom,
            base_layers,
            active_base,
            overlays: self.overlays,
            controls,
        })
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Circle marker for one record, `None` when its radius is degenerate
/// (zero, negative or not finite); such events are not drawn.
pub fn earthquake_marker(record: &EarthquakeRecord) -> Option<CircleMarker> {
    let style = marker_style(record.magnitude);
    if style.is_degenerate() {
        #[cfg(feature = "debug")]
        log::debug!(
            "Not drawing M{} at {} (radius {})",
            record.magnitude,
            record.place,
            style.radius
        );
        return None;
    }

    let id = format!(
        "quake-{}@{:.4},{:.4}",
        record.time, record.latitude, record.longitude
    );
    Some(
        CircleMarker::new(id, record.position(), style)
            .with_popup(PopupContent::from_record(record)),
    )
}

/// The "Earthquakes" overlay
pub fn earthquake_layer(records: &[EarthquakeRecord]) -> LayerGroup {
    LayerGroup::new("earthquakes".to_string(), EARTHQUAKE_LAYER_NAME.to_string())
        .with_markers(records.iter().filter_map(earthquake_marker))
}

/// Assemble the earthquake map: configured base layers (first one active),
/// the earthquake overlay shown on load, an expanded layer control and the
/// magnitude legend.
pub fn assemble_map(records: &[EarthquakeRecord], config: &MapConfig) -> Result<MapView> {
    let overlay = earthquake_layer(records);

    #[cfg(feature = "debug")]
    log::info!(
        "Assembling map with {} of {} earthquakes drawn",
        overlay.len(),
        records.len()
    );

    MapBuilder::from_config(config)
        .with_overlay(overlay)
        .with_layer_control(false)
        .with_legend(Legend::magnitude())
        .build()
}

/// Fetch the feed named in `config` and assemble the map from it.
pub async fn load_map(config: &MapConfig) -> Result<MapView> {
    let client = FeedClient::new(config.feed.clone())?;
    let records = client.fetch_records().await?;
    assemble_map(&records, config)
}

/// [`load_map`] on a private current-thread runtime, for synchronous callers.
#[cfg(feature = "tokio-runtime")]
pub fn load_map_blocking(config: &MapConfig) -> Result<MapView> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(load_map(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::config::TileConfig, ui::controls::ControlPosition};

    fn record(place: &str, magnitude: f64, felt: Option<u32>, lat: f64, lng: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            place: place.to_string(),
            time: 1_700_000_000_000,
            magnitude,
            felt_reports: felt,
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn test_earthquake_marker() {
        let marker = earthquake_marker(&record("10km N of Testville", 4.2, Some(3), 40.0, -100.0))
            .unwrap();

        assert_eq!(marker.position(), LatLng::new(40.0, -100.0));
        assert!((marker.style().radius - 21.0).abs() < 1e-9);
        assert_eq!(marker.style().fill_color.to_string(), "#FFFF00");
        assert_eq!(marker.style().stroke_color.to_string(), "#FFFF00");

        let popup = marker.popup_html().unwrap();
        assert!(popup.contains("Testville"));
        assert!(popup.contains("Tue Nov 14 2023 22:13:20 UTC"));
        assert!(popup.contains("4.2"));
        assert!(popup.contains("Reports: 3"));
    }

    #[test]
    fn test_degenerate_markers_are_dropped() {
        assert!(earthquake_marker(&record("a", 0.0, None, 0.0, 0.0)).is_none());
        assert!(earthquake_marker(&record("b", -0.8, None, 0.0, 0.0)).is_none());
        // Below every band: drawn in the default color
        let small = earthquake_marker(&record("c", 0.4, None, 0.0, 0.0)).unwrap();
        assert_eq!(small.style().fill_color.to_string(), "#E2FFAE");
    }

    #[test]
    fn test_assemble_map_defaults() {
        let records = vec![
            record("A", 4.2, Some(3), 40.0, -100.0),
            record("B", 1.1, None, 61.0, -150.0),
            record("C", -0.5, None, 35.0, -117.0),
        ];
        let view = assemble_map(&records, &MapConfig::default()).unwrap();

        assert_eq!(view.container_id(), "map");
        assert_eq!(view.center(), LatLng::new(39.8282, -98.5795));
        assert_eq!(view.zoom(), 4.0);
        assert_eq!(view.active_layer_names(), ["Outdoors", "Earthquakes"]);
        assert_eq!(view.marker_count(), 2);

        let grayscale = view.base_layer("Grayscale").unwrap();
        assert!(!grayscale.is_visible());

        let control = view.layer_control().unwrap();
        assert!(!control.collapsed);
        assert_eq!(control.base_layers, ["Outdoors", "Grayscale"]);
        assert_eq!(control.overlays, ["Earthquakes"]);

        let legend = view.legend().unwrap();
        assert_eq!(legend.position, ControlPosition::BottomRight);
        assert_eq!(legend.entries.len(), 5);
    }

    #[test]
    fn test_assemble_empty_feed() {
        let view = assemble_map(&[], &MapConfig::default()).unwrap();
        assert_eq!(view.marker_count(), 0);
        assert!(view.data_bounds().is_none());
        assert!(view.overlay("Earthquakes").is_some());
    }

    #[test]
    fn test_builder_active_base() {
        let tiles = TileConfig::default();
        let config = MapConfig {
            tiles,
            ..MapConfig::default()
        };
        let view = MapBuilder::from_config(&config)
            .with_active_base("Grayscale")
            .build()
            .unwrap();
        assert_eq!(view.active_base_layer().unwrap().name(), "Grayscale");
        assert!(view.controls().is_empty());

        let err = MapBuilder::from_config(&config)
            .with_active_base("Satellite")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
