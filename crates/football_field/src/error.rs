use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Negative dimension: {name} = {value}")]
    NegativeDimension { name: &'static str, value: i32 },

    #[error(
        "Goal lines out of order: goal_line_1 = {goal_line_1}, fifty_yard_line = {fifty_yard_line}, goal_line_2 = {goal_line_2}"
    )]
    GoalLineOrder { goal_line_1: i32, fifty_yard_line: i32, goal_line_2: i32 },

    #[error("Goal line {goal_line_2} lies beyond field length {length}")]
    GoalLineBeyondLength { goal_line_2: i32, length: i32 },

    #[error("Hash marks {hash_distance_from_sideline} from the sideline do not fit a field {width} wide")]
    HashOutsideField { hash_distance_from_sideline: i32, width: i32 },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FieldError>;
