//! Leaflet hand-off
//!
//! Drawing, tiling and interaction are Leaflet's job. This module serializes
//! a [`MapView`] into a standalone HTML page: the view travels as a JSON
//! scene and a small bootstrap script turns it into Leaflet layers and
//! controls inside the container element.

use crate::{
    core::{constants::LEAFLET_VERSION, map::MapView},
    layers::base::LayerTrait,
    Error, Result,
};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scene<'a> {
    container: String,
    center: [f64; 2],
    zoom: f64,
    base_layers: Vec<SceneTileLayer<'a>>,
    overlays: Vec<SceneOverlay<'a>>,
    layer_control: Option<SceneLayerControl>,
    legend: Option<SceneLegend>,
}

#[derive(Serialize)]
struct SceneTileLayer<'a> {
    name: &'a str,
    url: String,
    options: serde_json::Value,
    active: bool,
}

#[derive(Serialize)]
struct SceneOverlay<'a> {
    name: &'a str,
    active: bool,
    markers: Vec<SceneMarker>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneMarker {
    lat_lng: [f64; 2],
    options: serde_json::Value,
    popup: Option<String>,
}

#[derive(Serialize)]
struct SceneLayerControl {
    collapsed: bool,
    position: &'static str,
}

#[derive(Serialize)]
struct SceneLegend {
    position: &'static str,
    html: String,
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Earthquakes</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{{LEAFLET_VERSION}}/dist/leaflet.css">
<style>
html, body { height: 100%; margin: 0; }
#{{CONTAINER}} { height: 100%; }
.legend { background: rgba(255, 255, 255, 0.9); padding: 6px 10px; border-radius: 5px; line-height: 18px; color: #333; }
.legend h4 { margin: 0 0 6px; }
.legend ul { list-style: none; margin: 0; padding: 0; }
.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.8; }
</style>
</head>
<body>
<div id="{{CONTAINER}}"></div>
<script src="https://unpkg.com/leaflet@{{LEAFLET_VERSION}}/dist/leaflet.js"></script>
<script type="application/json" id="quakemap-scene">{{SCENE}}</script>
<script>
(function () {
  var scene = JSON.parse(document.getElementById("quakemap-scene").textContent);
  var baseMaps = {}, overlayMaps = {}, initial = [];

  scene.baseLayers.forEach(function (base) {
    var layer = L.tileLayer(base.url, base.options);
    baseMaps[base.name] = layer;
    if (base.active) { initial.push(layer); }
  });

  scene.overlays.forEach(function (overlay) {
    var group = L.layerGroup(overlay.markers.map(function (m) {
      var marker = L.circleMarker(m.latLng, m.options);
      if (m.popup) { marker.bindPopup(m.popup); }
      return marker;
    }));
    overlayMaps[overlay.name] = group;
    if (overlay.active) { initial.push(group); }
  });

  var map = L.map(scene.container, { center: scene.center, zoom: scene.zoom, layers: initial });

  if (scene.layerControl) {
    L.control.layers(baseMaps, overlayMaps, scene.layerControl).addTo(map);
  }

  if (scene.legend) {
    var legend = L.control({ position: scene.legend.position });
    legend.onAdd = function () {
      var div = L.DomUtil.create("div", "info legend");
      div.innerHTML = scene.legend.html;
      return div;
    };
    legend.addTo(map);
  }
})();
</script>
</body>
</html>
"#;

/// Standalone Leaflet page for a [`MapView`]
pub struct LeafletDocument<'a> {
    view: &'a MapView,
}

impl<'a> LeafletDocument<'a> {
    pub fn new(view: &'a MapView) -> Self {
        Self { view }
    }

    fn scene(&self) -> Result<Scene<'a>> {
        let view = self.view;

        let base_layers = view
            .base_layers()
            .iter()
            .map(|layer| SceneTileLayer {
                name: layer.name(),
                url: layer.url_template(),
                options: layer.options(),
                active: layer.is_visible(),
            })
            .collect();

        let overlays = view
            .overlays()
            .iter()
            .map(|overlay| SceneOverlay {
                name: overlay.name(),
                active: overlay.is_visible(),
                markers: overlay
                    .markers()
                    .iter()
                    .map(|marker| SceneMarker {
                        lat_lng: marker.position().to_array(),
                        options: marker.options(),
                        popup: marker.popup_html(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Scene {
            container: css_ident(view.container_id())?,
            center: view.center().to_array(),
            zoom: view.zoom(),
            base_layers,
            overlays,
            layer_control: view.layer_control().map(|control| SceneLayerControl {
                collapsed: control.collapsed,
                position: control.position.as_leaflet(),
            }),
            legend: view.legend().map(|legend| SceneLegend {
                position: legend.position.as_leaflet(),
                html: legend.to_html(),
            }),
        })
    }

    /// Scene JSON as embedded in the page. Every `<` is written as `\u003c`
    /// so no string value can close the surrounding script element.
    pub fn scene_json(&self) -> Result<String> {
        let json = serde_json::to_string(&self.scene()?)?;
        Ok(json.replace('<', "\\u003c"))
    }

    pub fn render(&self) -> Result<String> {
        let scene = self.scene_json()?;
        Ok(PAGE_TEMPLATE
            .replace("{{LEAFLET_VERSION}}", LEAFLET_VERSION)
            .replace("{{CONTAINER}}", &css_ident(self.view.container_id())?)
            .replace("{{SCENE}}", &scene))
    }

    /// Render the page and write it to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let html = self.render()?;
        std::fs::write(path.as_ref(), html)?;

        #[cfg(feature = "debug")]
        log::info!("Wrote map document to {}", path.as_ref().display());

        Ok(())
    }
}

/// Keeps a container id usable as both an HTML id and a CSS selector.
fn css_ident(id: &str) -> Result<String> {
    let ident: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if ident.is_empty() {
        return Err(Error::Render(format!(
            "container id '{}' has no usable characters",
            id
        )));
    }
    Ok(ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            builder::{assemble_map, MapBuilder},
            config::MapConfig,
        },
        data::record::EarthquakeRecord,
    };

    fn view() -> MapView {
        let records = vec![EarthquakeRecord {
            place: "10km N of Testville </script>".to_string(),
            time: 1_700_000_000_000,
            magnitude: 4.2,
            felt_reports: Some(3),
            latitude: 40.0,
            longitude: -100.0,
        }];
        assemble_map(&records, &MapConfig::default().with_access_token("pk.test")).unwrap()
    }

    #[test]
    fn test_scene_json() {
        let view = view();
        let json = LeafletDocument::new(&view).scene_json().unwrap();
        assert!(!json.contains('<'));

        let scene: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(scene["container"], "map");
        assert_eq!(scene["center"][0], 39.8282);
        assert_eq!(scene["zoom"], 4.0);
        assert_eq!(scene["baseLayers"][0]["name"], "Outdoors");
        assert_eq!(scene["baseLayers"][0]["active"], true);
        assert_eq!(scene["baseLayers"][1]["active"], false);
        assert!(scene["baseLayers"][1]["url"]
            .as_str()
            .unwrap()
            .contains("light-v10/tiles/{z}/{x}/{y}?access_token=pk.test"));

        let marker = &scene["overlays"][0]["markers"][0];
        assert_eq!(scene["overlays"][0]["name"], "Earthquakes");
        assert_eq!(marker["latLng"][0], 40.0);
        assert_eq!(marker["latLng"][1], -100.0);
        assert_eq!(marker["options"]["fillColor"], "#FFFF00");
        assert_eq!(marker["options"]["weight"], 1.0);
        assert!(marker["popup"].as_str().unwrap().contains("Felt"));

        assert_eq!(scene["layerControl"]["collapsed"], false);
        assert_eq!(scene["legend"]["position"], "bottomright");
    }

    #[test]
    fn test_render_page() {
        let view = view();
        let html = LeafletDocument::new(&view).render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div id=\"map\"></div>"));
        assert!(html.contains("leaflet@1.9.4/dist/leaflet.js"));
        assert!(!html.contains("{{"));
        // The escaped place name must not terminate the scene script early
        assert_eq!(html.matches("</script>").count(), 3);
    }

    #[test]
    fn test_css_ident() {
        assert_eq!(css_ident("map").unwrap(), "map");
        assert_eq!(css_ident("quake map\"><").unwrap(), "quakemap");
        assert!(matches!(css_ident("#"), Err(Error::Render(_))));
        assert!(css_ident("").is_err());
    }

    #[test]
    fn test_unusable_container_is_a_render_error() {
        let view = MapBuilder::from_config(&MapConfig::default())
            .with_container("#")
            .build()
            .unwrap();
        let document = LeafletDocument::new(&view);

        assert!(matches!(document.render(), Err(Error::Render(_))));
        assert!(matches!(document.scene_json(), Err(Error::Render(_))));
    }
}
