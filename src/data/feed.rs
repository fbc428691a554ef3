//! Fetcher for the earthquake feed.
//!
//! One GET of a fixed URL per call. There is no pagination and no retry;
//! any failure is handed back to the caller unchanged.

use crate::{
    core::config::FeedConfig,
    data::{
        geojson::{FeedDocument, FeedFeature},
        record::EarthquakeRecord,
    },
    Error, Result,
};

/// HTTP client bound to one feed endpoint
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            if timeout.is_zero() {
                return Err(Error::Config(
                    "feed timeout must be greater than zero".to_string(),
                ));
            }
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetches the feed and returns its `features` array.
    pub async fn fetch(&self) -> Result<Vec<FeedFeature>> {
        #[cfg(feature = "debug")]
        log::info!("Fetching earthquake feed from {}", self.config.url);

        let response = self.client.get(&self.config.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: self.config.url.clone(),
            });
        }

        let body = response.text().await?;
        let features = parse_feed(&body)?;

        #[cfg(feature = "debug")]
        log::info!("Feed returned {} features", features.len());

        Ok(features)
    }

    /// Fetches the feed and converts it, dropping features that cannot be plotted.
    pub async fn fetch_records(&self) -> Result<Vec<EarthquakeRecord>> {
        let features = self.fetch().await?;
        let records = EarthquakeRecord::from_features(&features);

        #[cfg(feature = "debug")]
        if records.len() < features.len() {
            log::warn!(
                "Dropped {} of {} features without magnitude, time or position",
                features.len() - records.len(),
                features.len()
            );
        }

        Ok(records)
    }
}

/// Fetches `url` with default client settings and returns its `features` array.
pub async fn fetch_features(url: &str) -> Result<Vec<FeedFeature>> {
    let config = FeedConfig {
        url: url.to_string(),
        ..FeedConfig::default()
    };
    FeedClient::new(config)?.fetch().await
}

/// Parses a feed payload; anything but a FeatureCollection is an error.
pub fn parse_feed(payload: &str) -> Result<Vec<FeedFeature>> {
    let document: FeedDocument = serde_json::from_str(payload)?;
    Ok(document.into_features())
}
