pub mod controls;
pub mod legend;
pub mod popup;
pub mod style;

pub use controls::{ControlPosition, LayerControl, MapControl};

pub use legend::{legend_entries, Legend, LegendEntry};

pub use popup::PopupContent;

pub use style::{Color, MarkerStyle};
