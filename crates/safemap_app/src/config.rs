use std::time::Duration;

use safemap_core::domain::GeoPoint;

pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 47.6584,
    lng: -122.3088,
};
pub const DEFAULT_ZOOM: u8 = 15;
pub const MAX_ZOOM: u8 = 19;
pub const TILE_LAYER_URL: &str =
    "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png";
pub const TILE_LAYER_ATTRIBUTION: &str = "© OpenStreetMap contributors, © CartoDB";
pub const TILE_LAYER_SUBDOMAINS: &str = "abcd";

/// Reports submitted without a map click land near this point.
pub const FALLBACK_BASE: GeoPoint = DEFAULT_CENTER;
/// Upper bound of the random offset applied to each axis of a fallback location.
pub const FALLBACK_RANDOM_OFFSET: f64 = 0.01;

/// How long the "clear temporary marker" signal stays raised after the form closes.
pub const TEMP_MARKER_CLEAR_DELAY: Duration = Duration::from_millis(100);
pub const TEMP_MARKER_PULSE: Duration = Duration::from_millis(1500);

/// View configuration handed to the map widget. Center and zoom can be
/// overridden through environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url_template: String,
    pub subdomains: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_zoom: MAX_ZOOM,
            tile_url_template: TILE_LAYER_URL.to_string(),
            subdomains: TILE_LAYER_SUBDOMAINS.to_string(),
            attribution: TILE_LAYER_ATTRIBUTION.to_string(),
        }
    }
}

impl MapConfig {
    /// Reads `SAFEMAP_CENTER_LAT`, `SAFEMAP_CENTER_LNG` and `SAFEMAP_ZOOM`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let lat = lookup("SAFEMAP_CENTER_LAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.center.lat);
        let lng = lookup("SAFEMAP_CENTER_LNG")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.center.lng);
        let zoom = lookup("SAFEMAP_ZOOM")
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(defaults.zoom)
            .min(defaults.max_zoom);

        let center = GeoPoint::new(lat, lng);
        Self {
            center: if center.is_valid() { center } else { defaults.center },
            zoom,
            ..defaults
        }
    }

    /// Expand the tile template. Subdomains rotate by `(x + y) mod n`; zoom is clamped.
    pub fn tile_url(&self, z: u8, x: u32, y: u32, retina: bool) -> String {
        let subdomains: Vec<char> = self.subdomains.chars().collect();
        let s = if subdomains.is_empty() {
            String::new()
        } else {
            let idx = (u64::from(x) + u64::from(y)) % subdomains.len() as u64;
            subdomains[idx as usize].to_string()
        };

        self.tile_url_template
            .replace("{s}", &s)
            .replace("{z}", &z.min(self.max_zoom).to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", if retina { "@2x" } else { "" })
    }
}
