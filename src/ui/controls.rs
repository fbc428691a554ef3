use crate::ui::legend::Legend;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    /// Leaflet's name for the corner.
    pub fn as_leaflet(&self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "topleft",
            ControlPosition::TopRight => "topright",
            ControlPosition::BottomLeft => "bottomleft",
            ControlPosition::BottomRight => "bottomright",
        }
    }
}

impl fmt::Display for ControlPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_leaflet())
    }
}

/// Layer switcher: radio buttons for base layers, checkboxes for overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
    pub collapsed: bool,
    pub position: ControlPosition,
}

impl LayerControl {
    /// Always-expanded control in the top-right corner.
    pub fn new(base_layers: Vec<String>, overlays: Vec<String>) -> Self {
        Self {
            base_layers,
            overlays,
            collapsed: false,
            position: ControlPosition::TopRight,
        }
    }

    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// A control attached to the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapControl {
    Layers(LayerControl),
    Legend(Legend),
}

impl MapControl {
    pub fn position(&self) -> ControlPosition {
        match self {
            MapControl::Layers(control) => control.position,
            MapControl::Legend(legend) => legend.position,
        }
    }
}
