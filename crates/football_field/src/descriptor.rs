//! Serializable snapshot of a field configuration.
//!
//! The descriptor is what an external consumer reads: dimensions plus every
//! derived and literal sequence, all index-aligned by vertex.
//!
//! Parsing accepts only a descriptor identical to the one its `dimensions`
//! produce, so every sequence holds 32 entries and every edge stays in range.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::FieldConfiguration;
use crate::geometry::{FieldPoint, VERTEX_COUNT};
use crate::markings::VertexCategory;
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FieldDescriptor {
    pub schema_version: u8,
    pub dimensions: FieldConfiguration,
    pub vertices: Vec<FieldPoint>,
    /// 1-based vertex index pairs
    pub edges: Vec<(usize, usize)>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub categories: Vec<VertexCategory>,
}

impl FieldDescriptor {
    pub fn from_config(cfg: &FieldConfiguration) -> Self {
        let vertices = cfg.vertices().to_vec();
        let categories = (1..=vertices.len()).filter_map(VertexCategory::of).collect();
        Self {
            schema_version: SCHEMA_VERSION,
            dimensions: *cfg,
            vertices,
            edges: cfg.edges().to_vec(),
            labels: cfg.labels().iter().map(|s| s.to_string()).collect(),
            colors: cfg.colors().iter().map(|s| s.to_string()).collect(),
            categories,
        }
    }

    /// Generate JSON schema for the descriptor
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(FieldDescriptor)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Wire shape before consistency checks
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFieldDescriptor {
    schema_version: u8,
    dimensions: FieldConfiguration,
    vertices: Vec<FieldPoint>,
    edges: Vec<(usize, usize)>,
    labels: Vec<String>,
    colors: Vec<String>,
    categories: Vec<VertexCategory>,
}

impl TryFrom<RawFieldDescriptor> for FieldDescriptor {
    type Error = String;

    fn try_from(raw: RawFieldDescriptor) -> Result<Self, Self::Error> {
        if raw.schema_version != SCHEMA_VERSION {
            return Err(format!(
                "schema version {} (expected {})",
                raw.schema_version, SCHEMA_VERSION
            ));
        }
        let lengths = [
            ("vertices", raw.vertices.len()),
            ("labels", raw.labels.len()),
            ("colors", raw.colors.len()),
            ("categories", raw.categories.len()),
        ];
        if let Some((name, len)) = lengths.iter().find(|(_, len)| *len != VERTEX_COUNT) {
            return Err(format!("{} has {} entries (expected {})", name, len, VERTEX_COUNT));
        }
        let in_range = |i: usize| (1..=VERTEX_COUNT).contains(&i);
        if let Some(&(a, b)) = raw.edges.iter().find(|&&(a, b)| !in_range(a) || !in_range(b)) {
            return Err(format!("edge ({}, {}) outside 1..={}", a, b, VERTEX_COUNT));
        }

        let expected = FieldDescriptor::from_config(&raw.dimensions);
        let parsed = FieldDescriptor {
            schema_version: raw.schema_version,
            dimensions: raw.dimensions,
            vertices: raw.vertices,
            edges: raw.edges,
            labels: raw.labels,
            colors: raw.colors,
            categories: raw.categories,
        };
        if parsed != expected {
            return Err("descriptor does not match the geometry of its dimensions".to_string());
        }
        Ok(parsed)
    }
}

impl<'de> Deserialize<'de> for FieldDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFieldDescriptor::deserialize(deserializer)?;
        FieldDescriptor::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl From<&FieldConfiguration> for FieldDescriptor {
    fn from(cfg: &FieldConfiguration) -> Self {
        Self::from_config(cfg)
    }
}
