/// Geographic position in degrees (WGS84 longitude/latitude).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Latitude bound of the square Web Mercator world (degrees).
pub const MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_59;

/// Normalized Web Mercator X in [0, 1], west to east.
pub fn mercator_x(lon_deg: f64) -> f64 {
    (lon_deg + 180.0) / 360.0
}

/// Normalized Web Mercator Y in [0, 1], north to south.
pub fn mercator_y(lat_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    0.5 - (std::f64::consts::FRAC_PI_4 + 0.5 * lat).tan().ln() / (2.0 * std::f64::consts::PI)
}
