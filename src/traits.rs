//! Shared trait abstractions for map layers.

use crate::{core::geo::LatLngBounds, layers::base::LayerType};

/// Common surface of every layer placed on a [`crate::MapView`].
///
/// Layers only describe what to draw. Drawing, hit-testing and toggling at
/// runtime belong to the mapping library the view is handed to.
pub trait LayerOperations: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name, as shown in the layer control
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is shown when the map first loads
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Options passed to the mapping library when the layer is created
    fn options(&self) -> serde_json::Value;

    /// Get layer bounds if applicable
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }
}
