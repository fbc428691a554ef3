use crate::core::constants::MAPBOX_TILE_TEMPLATE;
use std::fmt;

/// Anything that can describe its tiles as a slippy-map URL template.
pub trait TileSource: fmt::Debug + Send + Sync {
    /// URL template with only the `{z}`, `{x}` and `{y}` placeholders left.
    /// The mapping library fills those in per tile.
    fn url_template(&self) -> String;
}

/// Mapbox style tiles, keyed by style id and access token.
#[derive(Clone)]
pub struct MapboxStyleSource {
    template: String,
    style_id: String,
    access_token: String,
}

impl MapboxStyleSource {
    /// A missing token is passed through as an empty value; the tile server
    /// will reject those requests.
    pub fn new(style_id: impl Into<String>, access_token: Option<&str>) -> Self {
        Self::with_template(MAPBOX_TILE_TEMPLATE, style_id, access_token)
    }

    pub fn with_template(
        template: impl Into<String>,
        style_id: impl Into<String>,
        access_token: Option<&str>,
    ) -> Self {
        Self {
            template: template.into(),
            style_id: style_id.into(),
            access_token: access_token.unwrap_or_default().to_string(),
        }
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

// Keeps the token out of logs
impl fmt::Debug for MapboxStyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxStyleSource")
            .field("template", &self.template)
            .field("style_id", &self.style_id)
            .field("has_access_token", &self.has_access_token())
            .finish()
    }
}

impl TileSource for MapboxStyleSource {
    fn url_template(&self) -> String {
        self.template
            .replace("{id}", &self.style_id)
            .replace("{accessToken}", &self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_url() {
        let source = MapboxStyleSource::new("outdoors-v11", Some("pk.test"));
        assert_eq!(
            source.url_template(),
            "https://api.mapbox.com/styles/v1/mapbox/outdoors-v11/tiles/{z}/{x}/{y}?access_token=pk.test"
        );
    }

    #[test]
    fn test_missing_token_is_not_validated() {
        let source = MapboxStyleSource::new("light-v10", None);
        assert!(!source.has_access_token());
        assert!(source.url_template().ends_with("?access_token="));
    }

    #[test]
    fn test_debug_hides_token() {
        let source = MapboxStyleSource::new("light-v10", Some("pk.secret"));
        assert!(!format!("{:?}", source).contains("pk.secret"));
    }
}
