use crate::{
    core::geo::LatLngBounds,
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::CircleMarker,
    },
};

/// Named collection of markers that is toggled as one overlay
#[derive(Debug, Clone)]
pub struct LayerGroup {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl LayerGroup {
    pub fn new(id: String, name: String) -> Self {
        let mut properties = LayerProperties::new(id, name, LayerType::Group);
        // Overlays draw above the base tiles
        properties.z_index = 10;
        Self {
            properties,
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = CircleMarker>) -> Self {
        self.markers.extend(markers);
        self
    }

    pub fn add_marker(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl LayerTrait for LayerGroup {
    crate::impl_layer_trait!(LayerGroup, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.properties.name,
            "markers": self.markers.len(),
        })
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(CircleMarker::position))
    }
}
