//! Literal diagram data: edges, labels, colors and per-vertex descriptions.
//!
//! None of this depends on the configured dimensions. Indices are 1-based
//! positions in the vertex sequence produced by
//! [`derive_vertices`](crate::geometry::derive_vertices).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::VERTEX_COUNT;

/// Corner and goal-line vertices
pub const PINK: &str = "#FF1493";
/// Midfield and number-position vertices
pub const BLUE: &str = "#00BFFF";
/// Hash-mark vertices
pub const TOMATO: &str = "#FF6347";

/// Line segments between 1-based vertex indices.
pub const EDGES: [(usize, usize); 24] = [
    // Sidelines
    (1, 3),
    (2, 4),
    // End lines
    (1, 2),
    (3, 4),
    // Goal lines
    (5, 6),
    (7, 8),
    // Midfield
    (9, 10),
    // End zone sidelines
    (1, 5),
    (2, 6),
    (3, 7),
    (4, 8),
    // Hash marks: goal lines and midfield
    (12, 13),
    (14, 15),
    (16, 17),
    // Hash marks: 20/30/40
    (18, 19),
    (20, 21),
    (22, 23),
    // Hash marks: 60/70/80
    (24, 25),
    (26, 27),
    (28, 29),
    // Sidelines between goal lines and midfield
    (5, 9),
    (6, 10),
    (9, 7),
    (10, 8),
];

/// Display label per vertex.
pub const LABELS: [&str; VERTEX_COUNT] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
];

/// Display color (hex RGB) per vertex.
pub const COLORS: [&str; VERTEX_COUNT] = [
    PINK, PINK, PINK, PINK, // corners
    PINK, PINK, PINK, PINK, // goal lines
    BLUE, BLUE, BLUE, // midfield
    TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, // goal line / midfield hashes
    TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, // 20/30/40 hashes
    TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, TOMATO, // 60/70/80 hashes
    BLUE, BLUE, BLUE, // number positions
];

const VERTEX_NAMES: [&str; VERTEX_COUNT] = [
    "Back left corner of left end zone",
    "Back right corner of left end zone",
    "Back left corner of right end zone",
    "Back right corner of right end zone",
    "Left goal line, left sideline",
    "Left goal line, right sideline",
    "Right goal line, left sideline",
    "Right goal line, right sideline",
    "50-yard line, left sideline",
    "50-yard line, right sideline",
    "50-yard line center",
    "Left goal line, top hash",
    "Left goal line, bottom hash",
    "Right goal line, top hash",
    "Right goal line, bottom hash",
    "50-yard line, top hash",
    "50-yard line, bottom hash",
    "20 yard, top hash",
    "20 yard, bottom hash",
    "30 yard, top hash",
    "30 yard, bottom hash",
    "40 yard, top hash",
    "40 yard, bottom hash",
    "60 yard, top hash",
    "60 yard, bottom hash",
    "70 yard, top hash",
    "70 yard, bottom hash",
    "80 yard, top hash",
    "80 yard, bottom hash",
    "20 yard, number position top",
    "20 yard, number position bottom",
    "50 yard, number position top",
];

/// Semantic group a vertex belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VertexCategory {
    Corner,
    GoalLine,
    Midfield,
    HashMark,
    NumberPosition,
}

impl VertexCategory {
    /// Category of a 1-based vertex index, `None` outside `1..=32`.
    pub fn of(index: usize) -> Option<Self> {
        match index {
            1..=4 => Some(Self::Corner),
            5..=8 => Some(Self::GoalLine),
            9..=11 => Some(Self::Midfield),
            12..=29 => Some(Self::HashMark),
            30..=32 => Some(Self::NumberPosition),
            _ => None,
        }
    }

    /// Display color shared by every vertex in this category
    pub fn color(self) -> &'static str {
        match self {
            Self::Corner | Self::GoalLine => PINK,
            Self::Midfield | Self::NumberPosition => BLUE,
            Self::HashMark => TOMATO,
        }
    }
}

/// Human-readable description of a 1-based vertex index.
pub fn vertex_name(index: usize) -> Option<&'static str> {
    index.checked_sub(1).and_then(|i| VERTEX_NAMES.get(i)).copied()
}
