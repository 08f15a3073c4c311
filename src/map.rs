//! Map Surface
//!
//! Web-Mercator tile math for the basemap and the placeholder region picker.
//! There is no region geometry: every click selects [`PLACEHOLDER_REGION`].

use std::f64::consts::PI;
use std::fmt;

use crate::config::MapConfig;
use crate::timeline::Year;

/// Edge length of a raster tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Web-Mercator latitude limit
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Identifier of a local government area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The region every click reports until a choropleth layer exists
pub const PLACEHOLDER_REGION: RegionId = RegionId(1);

/// Slippy-map tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// A tile to draw, positioned relative to the map center
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub coord: TileCoord,
    pub url: String,
    /// Offset of the tile's top-left corner from the center point, in pixels
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Global pixel position of a lat/lon at `zoom`
pub fn project(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (lon + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// Tile containing a lat/lon at `zoom`
pub fn tile_for(lat: f64, lon: f64, zoom: u8) -> TileCoord {
    let (px, py) = project(lat, lon, zoom);
    let max_index = (1u32 << zoom) - 1;
    TileCoord {
        x: ((px / TILE_SIZE).floor().max(0.0) as u32).min(max_index),
        y: ((py / TILE_SIZE).floor().max(0.0) as u32).min(max_index),
        z: zoom,
    }
}

/// Expand a `{s}/{z}/{x}/{y}` URL template for one tile
pub fn tile_url(template: &str, subdomains: &[String], coord: TileCoord) -> String {
    let subdomain = if subdomains.is_empty() {
        ""
    } else {
        subdomains[((coord.x + coord.y) as usize) % subdomains.len()].as_str()
    };

    template
        .replace("{s}", subdomain)
        .replace("{z}", &coord.z.to_string())
        .replace("{x}", &coord.x.to_string())
        .replace("{y}", &coord.y.to_string())
}

/// Overlay text naming the active layer
pub fn layer_label(metric: &str, year: Year) -> String {
    format!("Layer: {} ({})", metric, year)
}

/// Fixed-center, fixed-zoom basemap
#[derive(Debug, Clone)]
pub struct MapView {
    config: MapConfig,
}

impl MapView {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn center_tile(&self) -> TileCoord {
        tile_for(self.config.center_lat, self.config.center_lon, self.config.zoom)
    }

    /// Tiles covering the configured window around the center.
    ///
    /// Columns wrap across the antimeridian; rows past the poles are skipped.
    pub fn tiles(&self) -> Vec<PlacedTile> {
        let zoom = self.config.zoom;
        let world = i64::from(1u32 << zoom);
        let (cx, cy) = project(self.config.center_lat, self.config.center_lon, zoom);
        let center = self.center_tile();
        let rx = i64::from(self.config.tile_radius_x);
        let ry = i64::from(self.config.tile_radius_y);

        let mut tiles = Vec::new();
        for dy in -ry..=ry {
            let ty = i64::from(center.y) + dy;
            if ty < 0 || ty >= world {
                continue;
            }
            for dx in -rx..=rx {
                let tx = i64::from(center.x) + dx;
                let coord = TileCoord {
                    x: tx.rem_euclid(world) as u32,
                    y: ty as u32,
                    z: zoom,
                };
                tiles.push(PlacedTile {
                    coord,
                    url: tile_url(&self.config.tile_url, &self.config.subdomains, coord),
                    offset_x: tx as f64 * TILE_SIZE - cx,
                    offset_y: ty as f64 * TILE_SIZE - cy,
                });
            }
        }
        tiles
    }

    pub fn layer_label(&self, year: Year) -> String {
        layer_label(&self.config.highlight_metric, year)
    }

    /// Region under a click. Coordinates are ignored.
    pub fn select_at(&self, _x: f64, _y: f64) -> RegionId {
        PLACEHOLDER_REGION
    }
}
