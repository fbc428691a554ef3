//! Core constants for the earthquake map: feed endpoint, initial view,
//! tile service and marker styling defaults.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// USGS summary feed of every event in the past seven days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Element id of the container the map is mounted into.
pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Geographic center of the contiguous United States.
pub const DEFAULT_CENTER: (f64, f64) = (39.8282, -98.5795);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Mapbox static tiles endpoint; `{id}` is the style, `{accessToken}` the credential.
pub const MAPBOX_TILE_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

pub const OUTDOORS_STYLE_ID: &str = "outdoors-v11";
pub const GRAYSCALE_STYLE_ID: &str = "light-v10";

pub const OUTDOORS_LAYER_NAME: &str = "Outdoors";
pub const GRAYSCALE_LAYER_NAME: &str = "Grayscale";
pub const EARTHQUAKE_LAYER_NAME: &str = "Earthquakes";

/// Highest zoom served by the base layers.
pub const TILE_MAX_ZOOM: u8 = 20;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

pub const TILE_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 5.0;

pub const MARKER_STROKE_WEIGHT: f64 = 1.0;
pub const MARKER_STROKE_OPACITY: f64 = 0.8;
pub const MARKER_FILL_OPACITY: f64 = 0.35;

pub const LEGEND_TITLE: &str = "Magnitude";

/// Leaflet release loaded by the generated document.
pub const LEAFLET_VERSION: &str = "1.9.4";
