//! Map configuration served to the navigation client.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing::warn;

use super::LatLng;

const DEFAULT_CENTER: LatLng = [16.493, 80.513];
const DEFAULT_ZOOM: u64 = 17;
const DEFAULT_CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Academic", "#2563eb"),
    ("Admin", "#f59e0b"),
    ("Hostel", "#10b981"),
    ("Facility", "#8b5cf6"),
    ("Sports", "#ef4444"),
    ("General", "#3b82f6"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Initial map center as `[lat, lng]`
    pub center: LatLng,
    pub default_zoom: Number,
    /// Category name -> hex color
    pub category_colors: BTreeMap<String, String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            default_zoom: Number::from(DEFAULT_ZOOM),
            category_colors: DEFAULT_CATEGORY_COLORS
                .iter()
                .map(|(category, color)| (category.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl NavigationConfig {
    /// Defaults overridden by whichever keys the raw config carries.
    ///
    /// Anything other than a JSON object yields the defaults untouched.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let mut config = Self::default();
        if let Some(Value::Object(overrides)) = raw {
            config.apply(overrides);
        }
        config
    }

    /// Replace each present key wholesale; `categoryColors` is not merged.
    fn apply(&mut self, overrides: &Map<String, Value>) {
        if let Some(value) = overrides.get("center") {
            match parse_center(value) {
                Some(center) => self.center = center,
                None => warn!("Ignoring invalid navigation center {}", value),
            }
        }

        if let Some(value) = overrides.get("defaultZoom") {
            match value {
                Value::Number(zoom) => self.default_zoom = zoom.clone(),
                other => warn!("Ignoring non-numeric defaultZoom {}", other),
            }
        }

        if let Some(value) = overrides.get("categoryColors") {
            match value {
                Value::Object(colors) => self.category_colors = parse_colors(colors),
                other => warn!("Ignoring non-object categoryColors {}", other),
            }
        }
    }
}

/// First two numbers of an array; trailing values such as altitude are ignored
fn parse_center(value: &Value) -> Option<LatLng> {
    match value.as_array()?.as_slice() {
        [lat, lng, ..] => Some([lat.as_f64()?, lng.as_f64()?]),
        _ => None,
    }
}

/// String-valued entries only; anything else is logged and skipped
fn parse_colors(colors: &Map<String, Value>) -> BTreeMap<String, String> {
    colors
        .iter()
        .filter_map(|(category, color)| match color.as_str() {
            Some(color) => Some((category.clone(), color.to_string())),
            None => {
                warn!("Ignoring non-string color {} for category {}", color, category);
                None
            }
        })
        .collect()
}
