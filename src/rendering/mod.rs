pub mod leaflet;

pub use leaflet::LeafletDocument;
