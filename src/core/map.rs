use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::{base::LayerTrait, group::LayerGroup, tile::TileLayer},
    ui::{
        controls::{LayerControl, MapControl},
        legend::Legend,
    },
};

/// Fully assembled map, ready to hand to the mapping library.
///
/// Base layers are mutually exclusive and exactly one of them is active.
/// Overlays are independent; each one's visibility says whether it is shown
/// on load. Everything here is built once and read afterwards.
#[derive(Debug)]
pub struct MapView {
    pub(crate) container_id: String,
    pub(crate) center: LatLng,
    pub(crate) zoom: f64,
    pub(crate) base_layers: Vec<TileLayer>,
    pub(crate) active_base: usize,
    pub(crate) overlays: Vec<LayerGroup>,
    pub(crate) controls: Vec<MapControl>,
}

impl MapView {
    /// Element id the map mounts into
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers.get(self.active_base)
    }

    pub fn base_layer(&self, name: &str) -> Option<&TileLayer> {
        self.base_layers.iter().find(|layer| layer.name() == name)
    }

    pub fn overlays(&self) -> &[LayerGroup] {
        &self.overlays
    }

    pub fn overlay(&self, name: &str) -> Option<&LayerGroup> {
        self.overlays.iter().find(|layer| layer.name() == name)
    }

    /// Names of the layers shown on load, base layer first.
    pub fn active_layer_names(&self) -> Vec<&str> {
        self.active_base_layer()
            .map(|layer| layer.name())
            .into_iter()
            .chain(
                self.overlays
                    .iter()
                    .filter(|overlay| overlay.is_visible())
                    .map(|overlay| overlay.name()),
            )
            .collect()
    }

    pub fn controls(&self) -> &[MapControl] {
        &self.controls
    }

    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.controls.iter().find_map(|control| match control {
            MapControl::Layers(layers) => Some(layers),
            _ => None,
        })
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.controls.iter().find_map(|control| match control {
            MapControl::Legend(legend) => Some(legend),
            _ => None,
        })
    }

    /// Total number of markers over all overlays
    pub fn marker_count(&self) -> usize {
        self.overlays.iter().map(LayerGroup::len).sum()
    }

    /// Bounds of every overlay marker, `None` when there are none
    pub fn data_bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for overlay_bounds in self.overlays.iter().filter_map(|o| o.bounds()) {
            bounds = Some(match bounds {
                Some(mut b) => {
                    b.extend(&overlay_bounds.south_west);
                    b.extend(&overlay_bounds.north_east);
                    b
                }
                None => overlay_bounds,
            });
        }
        bounds
    }
}
