pub mod feed;
pub mod geojson;
pub mod record;

pub use feed::{fetch_features, parse_feed, FeedClient};
pub use geojson::{FeedDocument, FeedFeature, FeedGeometry, FeedProperties};
pub use record::EarthquakeRecord;
