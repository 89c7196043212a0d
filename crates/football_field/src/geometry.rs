//! Field-diagram points and vertex derivation.
//!
//! Coordinates are integer inches. `x` runs along the length of the field
//! (end line to end line), `y` runs across it (sideline to sideline).
//! Values are widened to `i64` so every `i32` override set stays
//! representable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfiguration;

/// Number of vertices on the field diagram.
pub const VERTEX_COUNT: usize = 32;

/// Integer point on the field diagram (inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FieldPoint {
    pub x: i64,
    pub y: i64,
}

impl FieldPoint {
    /// Origin (back left corner of the left end zone)
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl From<(i64, i64)> for FieldPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<FieldPoint> for (i64, i64) {
    fn from(p: FieldPoint) -> Self {
        (p.x, p.y)
    }
}

/// Derive the 32 diagram vertices from the configured dimensions.
///
/// Order is fixed; edges, labels and colors refer to it by 1-based index.
pub fn derive_vertices(cfg: &FieldConfiguration) -> [FieldPoint; VERTEX_COUNT] {
    let width = i64::from(cfg.width());
    let length = i64::from(cfg.length());
    let gl1 = i64::from(cfg.goal_line_1());
    let gl2 = i64::from(cfg.goal_line_2());
    let fifty = i64::from(cfg.fifty_yard_line());
    let hash = i64::from(cfg.hash_distance_from_sideline());
    let interval = i64::from(cfg.yard_line_interval());
    let number = i64::from(cfg.number_distance_from_sideline());

    let hash_far = width - hash;
    let number_far = width - number;

    let twenty = gl1 + interval * 2;
    let thirty = gl1 + interval * 4;
    let forty = gl1 + interval * 6;
    let sixty = gl2 - interval * 6;
    let seventy = gl2 - interval * 4;
    let eighty = gl2 - interval * 2;

    let p = FieldPoint::new;
    [
        // Corners
        p(0, 0),
        p(0, width),
        p(length, 0),
        p(length, width),
        // Goal lines at the sidelines
        p(gl1, 0),
        p(gl1, width),
        p(gl2, 0),
        p(gl2, width),
        // Midfield
        p(fifty, 0),
        p(fifty, width),
        p(fifty, width / 2),
        // Hash marks on the goal lines and midfield
        p(gl1, hash),
        p(gl1, hash_far),
        p(gl2, hash),
        p(gl2, hash_far),
        p(fifty, hash),
        p(fifty, hash_far),
        // 20, 30, 40 yard hash marks
        p(twenty, hash),
        p(twenty, hash_far),
        p(thirty, hash),
        p(thirty, hash_far),
        p(forty, hash),
        p(forty, hash_far),
        // 60, 70, 80 yard hash marks
        p(sixty, hash),
        p(sixty, hash_far),
        p(seventy, hash),
        p(seventy, hash_far),
        p(eighty, hash),
        p(eighty, hash_far),
        // Number positions
        p(twenty, number),
        p(twenty, number_far),
        p(fifty, number),
    ]
}
