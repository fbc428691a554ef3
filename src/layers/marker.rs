use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    ui::{popup::PopupContent, style::MarkerStyle},
};

/// A fixed-pixel-radius circle at a geographic position
#[derive(Debug, Clone)]
pub struct CircleMarker {
    properties: LayerProperties,
    position: LatLng,
    style: MarkerStyle,
    popup: Option<PopupContent>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, style: MarkerStyle) -> Self {
        let properties = LayerProperties::new(id, "Circle Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: PopupContent) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn popup(&self) -> Option<&PopupContent> {
        self.popup.as_ref()
    }

    pub fn popup_html(&self) -> Option<String> {
        self.popup.as_ref().map(PopupContent::to_html)
    }
}

impl LayerTrait for CircleMarker {
    crate::impl_layer_trait!(CircleMarker, properties);

    fn options(&self) -> serde_json::Value {
        self.style.to_leaflet_options()
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}
