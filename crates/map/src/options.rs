use foundation::geo::LngLat;
use serde::{Deserialize, Serialize};

/// Construction options for a map surface.
///
/// The viewport defaults are the viewer's fixed initial view; only the
/// style endpoint varies between construction cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Hosted style configuration endpoint the map loads on construction.
    pub style_url: String,
    #[serde(default = "default_lon")]
    pub lon: f64,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_pitch_deg")]
    pub pitch_deg: f64,
    #[serde(default = "default_width_px")]
    pub width_px: u32,
    #[serde(default = "default_height_px")]
    pub height_px: u32,
}

fn default_lon() -> f64 {
    148.9819
}

fn default_lat() -> f64 {
    -35.3981
}

fn default_zoom() -> f64 {
    18.0
}

fn default_pitch_deg() -> f64 {
    60.0
}

fn default_width_px() -> u32 {
    1280
}

fn default_height_px() -> u32 {
    720
}

impl MapOptions {
    pub fn new(style_url: impl Into<String>) -> Self {
        Self {
            style_url: style_url.into(),
            lon: default_lon(),
            lat: default_lat(),
            zoom: default_zoom(),
            pitch_deg: default_pitch_deg(),
            width_px: default_width_px(),
            height_px: default_height_px(),
        }
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(self.lon, self.lat)
    }
}
