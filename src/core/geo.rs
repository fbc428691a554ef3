use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position, which is `[lng, lat, ...]`.
    pub fn from_geojson_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// `[lat, lng]` pair, the order Leaflet expects.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.extend(&point);
        }
        Some(bounds)
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_position_order() {
        let coord = LatLng::from_geojson_position(&[-100.0, 40.0, 10.5]).unwrap();
        assert_eq!(coord.lat, 40.0);
        assert_eq!(coord.lng, -100.0);
        assert!(LatLng::from_geojson_position(&[-100.0]).is_none());
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points([
            LatLng::new(40.0, -100.0),
            LatLng::new(35.0, -120.0),
            LatLng::new(61.2, -150.1),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(35.0, -150.1));
        assert_eq!(bounds.north_east, LatLng::new(61.2, -100.0));
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }
}
