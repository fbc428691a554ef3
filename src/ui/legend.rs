//! Magnitude legend derived from the color bands.

use crate::{
    core::{
        constants::LEGEND_TITLE,
        magnitude::{color_for, COLOR_BANDS},
    },
    ui::{controls::ControlPosition, style::Color},
};
use serde::{Deserialize, Serialize};

/// One swatch of the legend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Legend entries, one per band lower boundary in ascending order.
///
/// Each swatch is sampled one magnitude unit above its boundary. Labels read
/// `"<lower>–<next lower>"`, and the last one `"<lower>+"`.
pub fn legend_entries() -> Vec<LegendEntry> {
    let grades: Vec<f64> = COLOR_BANDS.iter().map(|band| band.lower).collect();

    grades
        .iter()
        .enumerate()
        .map(|(i, &grade)| {
            let label = match grades.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", grade, next),
                None => format!("{}+", grade),
            };
            LegendEntry {
                color: color_for(grade + 1.0),
                label,
            }
        })
        .collect()
}

/// Legend control anchored to a map corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub position: ControlPosition,
}

impl Legend {
    /// The magnitude legend, bottom-right.
    pub fn magnitude() -> Self {
        Self {
            title: LEGEND_TITLE.to_string(),
            entries: legend_entries(),
            position: ControlPosition::BottomRight,
        }
    }

    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    /// Inner HTML of the legend box.
    pub fn to_html(&self) -> String {
        let items: String = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "<li><i style=\"background-color:{}\"></i><span>{}</span></li>",
                    entry.color,
                    html_escape::encode_safe(&entry.label)
                )
            })
            .collect();
        format!(
            "<h4>{}</h4><ul>{}</ul>",
            html_escape::encode_safe(&self.title),
            items
        )
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::magnitude()
    }
}
