use quakemap::prelude::*;

/// Every band, probed at both endpoints and the midpoint.
#[test]
fn test_band_colors_match_published_palette() {
    let palette = ["#7CFC00", "#AAFF00", "#FFFF00", "#FFA500", "#FF0000"];
    for (band, expected) in COLOR_BANDS.iter().zip(palette) {
        assert_eq!(band.color.to_string(), expected);

        let mid = (band.lower + band.upper) / 2.0;
        assert_eq!(color_for(mid).to_string(), expected, "midpoint {}", mid);
        assert_eq!(color_for(band.upper).to_string(), expected, "upper {}", band.upper);
    }

    // Only the lowest band owns its lower endpoint; the rest lose it to the band below
    assert_eq!(color_for(1.0).to_string(), "#7CFC00");
    for pair in COLOR_BANDS.windows(2) {
        assert_eq!(color_for(pair[1].lower), pair[0].color);
    }
}

#[test]
fn test_default_color_outside_bands() {
    assert_eq!(color_for(-1.0).to_string(), "#E2FFAE");
    assert_eq!(color_for(25.0).to_string(), "#E2FFAE");
    assert_eq!(color_for(-1.0), color_for(25.0));
}

#[test]
fn test_radius_scaling() {
    assert_eq!(radius_for(3.0), 15.0);
    assert_eq!(radius_for(0.0), 0.0);
    assert_eq!(marker_style(2.0).radius, 10.0);
}

#[test]
fn test_legend_matches_bands() {
    let entries = legend_entries();
    assert_eq!(entries.len(), COLOR_BANDS.len());

    for (entry, band) in entries.iter().zip(COLOR_BANDS.iter()) {
        assert!(entry.label.starts_with(&band.lower.to_string()));
        assert_eq!(entry.color, color_for(band.lower + 1.0));
    }
    assert_eq!(entries[4].label, "8+");
}

#[test]
fn test_classifier_is_idempotent() {
    for tenth in -20..=250 {
        let magnitude = tenth as f64 / 10.0;
        assert_eq!(color_for(magnitude), color_for(magnitude));
        assert_eq!(radius_for(magnitude), radius_for(magnitude));
    }
}
