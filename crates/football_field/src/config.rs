//! # Field Configuration
//!
//! Ten integer dimensions (inches) describing a football field, and the
//! diagram derived from them.
//!
//! ## Usage
//! ```rust
//! use football_field::{FieldConfiguration, FieldOverrides};
//!
//! let ncaa = FieldConfiguration::default();
//! assert_eq!(ncaa.vertices()[10].as_tuple(), (2160, 960));
//!
//! let narrow = FieldConfiguration::new(FieldOverrides {
//!     width: Some(1800),
//!     ..Default::default()
//! });
//! assert_eq!(narrow.vertices()[1].as_tuple(), (0, 1800));
//! ```
//!
//! Construction never validates. Out-of-range values produce degenerate
//! geometry; call [`FieldConfiguration::validate`] to check consistency.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FieldError, Result};
use crate::geometry::{derive_vertices, FieldPoint, VERTEX_COUNT};
use crate::markings::{self, VertexCategory, COLORS, EDGES, LABELS};

/// Field dimensions in inches. Defaults follow NCAA rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfiguration {
    /// 53 1/3 yards
    width: i32,
    /// 120 yards including both end zones
    length: i32,
    /// 10 yards
    end_zone_depth: i32,
    goal_line_1: i32,
    goal_line_2: i32,
    /// 60 feet
    hash_distance_from_sideline: i32,
    hash_length: i32,
    /// 5 yards
    yard_line_interval: i32,
    fifty_yard_line: i32,
    /// 9 yards
    number_distance_from_sideline: i32,
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        Self {
            width: 1920,
            length: 4320,
            end_zone_depth: 360,
            goal_line_1: 360,
            goal_line_2: 3960,
            hash_distance_from_sideline: 720,
            hash_length: 24,
            yard_line_interval: 180,
            fifty_yard_line: 2160,
            number_distance_from_sideline: 324,
        }
    }
}

/// Optional replacement for any subset of the ten dimensions.
///
/// Every field may be omitted from a JSON/YAML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_zone_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_line_1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_line_2: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_distance_from_sideline: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yard_line_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_yard_line: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_distance_from_sideline: Option<i32>,
}

impl FieldOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: FieldOverrides) -> Self {
        Self {
            width: other.width.or(self.width),
            length: other.length.or(self.length),
            end_zone_depth: other.end_zone_depth.or(self.end_zone_depth),
            goal_line_1: other.goal_line_1.or(self.goal_line_1),
            goal_line_2: other.goal_line_2.or(self.goal_line_2),
            hash_distance_from_sideline: other
                .hash_distance_from_sideline
                .or(self.hash_distance_from_sideline),
            hash_length: other.hash_length.or(self.hash_length),
            yard_line_interval: other.yard_line_interval.or(self.yard_line_interval),
            fifty_yard_line: other.fifty_yard_line.or(self.fifty_yard_line),
            number_distance_from_sideline: other
                .number_distance_from_sideline
                .or(self.number_distance_from_sideline),
        }
    }
}

impl FieldConfiguration {
    /// NCAA field (same as `default()`)
    pub fn ncaa() -> Self {
        Self::default()
    }

    /// NCAA defaults with `overrides` applied. Values are taken as given.
    pub fn new(overrides: FieldOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    /// Copy of this configuration with the given subset replaced.
    pub fn with_overrides(&self, overrides: FieldOverrides) -> Self {
        if !overrides.is_empty() {
            debug!(?overrides, "applying field dimension overrides");
        }
        Self {
            width: overrides.width.unwrap_or(self.width),
            length: overrides.length.unwrap_or(self.length),
            end_zone_depth: overrides.end_zone_depth.unwrap_or(self.end_zone_depth),
            goal_line_1: overrides.goal_line_1.unwrap_or(self.goal_line_1),
            goal_line_2: overrides.goal_line_2.unwrap_or(self.goal_line_2),
            hash_distance_from_sideline: overrides
                .hash_distance_from_sideline
                .unwrap_or(self.hash_distance_from_sideline),
            hash_length: overrides.hash_length.unwrap_or(self.hash_length),
            yard_line_interval: overrides.yard_line_interval.unwrap_or(self.yard_line_interval),
            fifty_yard_line: overrides.fifty_yard_line.unwrap_or(self.fifty_yard_line),
            number_distance_from_sideline: overrides
                .number_distance_from_sideline
                .unwrap_or(self.number_distance_from_sideline),
        }
    }

    /// Load overrides from a `.json`, `.yaml` or `.yml` file and apply them to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let overrides = load_overrides(path)?;
        info!(path = %path.display(), "loaded field dimensions");
        Ok(Self::new(overrides))
    }

    // ========== Dimensions ==========

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn end_zone_depth(&self) -> i32 {
        self.end_zone_depth
    }

    pub fn goal_line_1(&self) -> i32 {
        self.goal_line_1
    }

    pub fn goal_line_2(&self) -> i32 {
        self.goal_line_2
    }

    pub fn hash_distance_from_sideline(&self) -> i32 {
        self.hash_distance_from_sideline
    }

    pub fn hash_length(&self) -> i32 {
        self.hash_length
    }

    pub fn yard_line_interval(&self) -> i32 {
        self.yard_line_interval
    }

    pub fn fifty_yard_line(&self) -> i32 {
        self.fifty_yard_line
    }

    pub fn number_distance_from_sideline(&self) -> i32 {
        self.number_distance_from_sideline
    }

    /// Dimensions as a fully populated override set.
    pub fn to_overrides(&self) -> FieldOverrides {
        FieldOverrides {
            width: Some(self.width),
            length: Some(self.length),
            end_zone_depth: Some(self.end_zone_depth),
            goal_line_1: Some(self.goal_line_1),
            goal_line_2: Some(self.goal_line_2),
            hash_distance_from_sideline: Some(self.hash_distance_from_sideline),
            hash_length: Some(self.hash_length),
            yard_line_interval: Some(self.yard_line_interval),
            fifty_yard_line: Some(self.fifty_yard_line),
            number_distance_from_sideline: Some(self.number_distance_from_sideline),
        }
    }

    // ========== Diagram ==========

    /// The 32 diagram vertices, recomputed from the current dimensions.
    pub fn vertices(&self) -> [FieldPoint; VERTEX_COUNT] {
        derive_vertices(self)
    }

    /// Vertex at a 1-based index.
    pub fn vertex(&self, index: usize) -> Option<FieldPoint> {
        index.checked_sub(1).and_then(|i| self.vertices().get(i).copied())
    }

    pub fn edges(&self) -> &'static [(usize, usize)] {
        &EDGES
    }

    pub fn labels(&self) -> &'static [&'static str] {
        &LABELS
    }

    pub fn colors(&self) -> &'static [&'static str] {
        &COLORS
    }

    /// Every edge resolved to its pair of end points.
    pub fn segments(&self) -> Vec<(FieldPoint, FieldPoint)> {
        let vertices = self.vertices();
        EDGES.iter().map(|&(a, b)| (vertices[a - 1], vertices[b - 1])).collect()
    }

    pub fn vertex_category(&self, index: usize) -> Option<VertexCategory> {
        VertexCategory::of(index)
    }

    pub fn vertex_name(&self, index: usize) -> Option<&'static str> {
        markings::vertex_name(index)
    }
}

/// Read an override set from disk, choosing the format by extension.
pub fn load_overrides(path: &Path) -> Result<FieldOverrides> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => FieldOverrides::from_json_str(&fs::read_to_string(path)?),
        Some("yaml") | Some("yml") => FieldOverrides::from_yaml_str(&fs::read_to_string(path)?),
        _ => Err(FieldError::UnsupportedFormat(path.display().to_string())),
    }
}

// ========== Tests ==========
