use anyhow::Context;
use clap::Parser;
use quakemap::{
    constants::DEFAULT_FEED_URL, FeedClient, LeafletDocument, MapConfig,
};
use std::{path::PathBuf, time::Duration};

/// Plot the past week of earthquakes on a Leaflet map
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Mapbox access token for the base layers
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// GeoJSON feed to plot
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Where to write the map page
    #[arg(short, long, default_value = "quakemap.html")]
    output: PathBuf,

    /// Give up on the feed after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn map_config(&self) -> MapConfig {
        let mut config = MapConfig::default().with_feed_url(self.feed_url.clone());
        if let Some(token) = &self.access_token {
            config = config.with_access_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quakemap::init_logging();
    let args = Args::parse();
    let config = args.map_config();

    if config.tiles.access_token.is_none() {
        log::warn!("MAPBOX_ACCESS_TOKEN is not set; base layer tiles will fail to load");
    }

    let client = FeedClient::new(config.feed.clone())?;
    let records = client
        .fetch_records()
        .await
        .with_context(|| format!("failed to load earthquake feed from {}", client.url()))?;

    let view = quakemap::assemble_map(&records, &config)?;
    if let Some(bounds) = view.data_bounds() {
        log::info!(
            "Plotted {} earthquakes between ({:.2}, {:.2}) and ({:.2}, {:.2})",
            view.marker_count(),
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        );
    } else {
        log::info!("Feed contained no earthquakes to plot");
    }

    LeafletDocument::new(&view)
        .write_to(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Map written to {}", args.output.display());
    Ok(())
}
