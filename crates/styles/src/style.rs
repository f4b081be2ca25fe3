use serde::{Deserialize, Serialize};

/// Access key embedded in every hosted style endpoint.
const MAPTILER_KEY: &str = "p47xAmvxV6awt2xre9CN";

/// Closed set of map appearances the viewer can switch between.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Topographic,
    Satellite,
    Buildings,
    Terrain,
}

pub const ALL_STYLES: [MapStyle; 4] = [
    MapStyle::Topographic,
    MapStyle::Satellite,
    MapStyle::Buildings,
    MapStyle::Terrain,
];

impl MapStyle {
    /// Selection value as it appears in the style picker.
    pub fn value(self) -> &'static str {
        match self {
            MapStyle::Topographic => "topographic",
            MapStyle::Satellite => "satellite",
            MapStyle::Buildings => "buildings",
            MapStyle::Terrain => "terrain",
        }
    }

    /// Human-readable label shown in the style picker.
    pub fn label(self) -> &'static str {
        match self {
            MapStyle::Topographic => "Topographic Map",
            MapStyle::Satellite => "Satellite Map",
            MapStyle::Buildings => "3D Building Map",
            MapStyle::Terrain => "Terrain Map",
        }
    }

    /// Hosted style configuration endpoint for this style.
    pub fn style_url(self) -> String {
        let map = match self {
            MapStyle::Topographic => "basic-v2",
            MapStyle::Satellite => "satellite",
            MapStyle::Buildings => "e3502d9d-91d8-41e3-ab8d-de7965bc0fde",
            MapStyle::Terrain => "winter-v2",
        };
        format!("https://api.maptiler.com/maps/{map}/style.json?key={MAPTILER_KEY}")
    }

    /// Resolves a selection value. Unrecognized values fall open to the
    /// default style rather than failing.
    pub fn from_value(value: &str) -> Self {
        match value {
            "topographic" => MapStyle::Topographic,
            "satellite" => MapStyle::Satellite,
            "buildings" => MapStyle::Buildings,
            "terrain" => MapStyle::Terrain,
            _ => MapStyle::default(),
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        MapStyle::Topographic
    }
}
