//! # football_field - Football Field Geometry
//!
//! Static geometric description of a regulation (NCAA) football field for
//! visualization and analysis tools: 32 vertices derived from ten integer
//! dimensions, the edges between them, and per-vertex labels and colors.
//!
//! ## Features
//! - Immutable, `Copy` configuration with NCAA defaults
//! - Partial overrides from code, JSON or YAML
//! - Opt-in validation of field geometry
//! - Serializable descriptor with JSON schema

pub mod config;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod markings;
pub mod validation;

pub use config::{load_overrides, FieldConfiguration, FieldOverrides};
pub use descriptor::FieldDescriptor;
pub use error::{FieldError, Result};
pub use geometry::{FieldPoint, VERTEX_COUNT};
pub use markings::{VertexCategory, COLORS, EDGES, LABELS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
