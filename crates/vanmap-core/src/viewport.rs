//! Map viewport state and its URL query-string round trip.
//!
//! The viewer keeps its current view in the page URL (`?lat=..&lng=..&zoom=..`)
//! so any map position can be shared as a link and restored on load.

use url::form_urlencoded;

/// Fallback view: centred on Vancouver at city-wide zoom.
const DEFAULT_LNG: f64 = -123.116226;
const DEFAULT_LAT: f64 = 49.246292;
const DEFAULT_ZOOM: f64 = 12.0;

/// Map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub lng: f64,
    pub lat: f64,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            lng: DEFAULT_LNG,
            lat: DEFAULT_LAT,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapViewport {
    /// Parses `lng`, `lat`, and `zoom` from a URL query string (leading `?`
    /// optional, `application/x-www-form-urlencoded` escaping).
    ///
    /// The override is all-or-nothing: unless all three parameters are
    /// present and finite, the whole `fallback` view is used. A repeated
    /// parameter keeps its last occurrence, valid or not.
    pub fn from_query_or(query: &str, fallback: MapViewport) -> MapViewport {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut lng = None;
        let mut lat = None;
        let mut zoom = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let parsed = value.parse::<f64>().ok().filter(|v| v.is_finite());
            match key.as_ref() {
                "lng" => lng = parsed,
                "lat" => lat = parsed,
                "zoom" => zoom = parsed,
                _ => {}
            }
        }

        match (lng, lat, zoom) {
            (Some(lng), Some(lat), Some(zoom)) => MapViewport { lng, lat, zoom },
            _ => fallback,
        }
    }

    /// Same as [`MapViewport::from_query_or`] with the built-in city default.
    pub fn from_query(query: &str) -> MapViewport {
        Self::from_query_or(query, MapViewport::default())
    }

    /// Serializes the view back into a shareable query string.
    pub fn to_query(&self) -> String {
        format!("?lat={}&lng={}&zoom={}", self.lat, self.lng, self.zoom)
    }
}
