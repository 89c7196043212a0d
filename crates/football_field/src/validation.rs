//! Opt-in consistency check for field dimensions.
//!
//! Construction accepts any integers; this is the place that rejects
//! geometry that cannot describe a real field.

use tracing::warn;

use crate::config::FieldConfiguration;
use crate::error::{FieldError, Result};

impl FieldConfiguration {
    /// Check the dimensions, returning the first violation found.
    ///
    /// Order: negative dimensions, goal-line ordering, goal line past the
    /// end line, hash marks past the center of the field.
    pub fn validate(&self) -> Result<()> {
        let result = check(self);
        if let Err(err) = &result {
            warn!(error = %err, "field configuration failed validation");
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        check(self).is_ok()
    }
}

fn check(cfg: &FieldConfiguration) -> Result<()> {
    let dimensions = [
        ("width", cfg.width()),
        ("length", cfg.length()),
        ("end_zone_depth", cfg.end_zone_depth()),
        ("goal_line_1", cfg.goal_line_1()),
        ("goal_line_2", cfg.goal_line_2()),
        ("hash_distance_from_sideline", cfg.hash_distance_from_sideline()),
        ("hash_length", cfg.hash_length()),
        ("yard_line_interval", cfg.yard_line_interval()),
        ("fifty_yard_line", cfg.fifty_yard_line()),
        ("number_distance_from_sideline", cfg.number_distance_from_sideline()),
    ];
    if let Some(&(name, value)) = dimensions.iter().find(|(_, v)| *v < 0) {
        return Err(FieldError::NegativeDimension { name, value });
    }

    let (gl1, fifty, gl2) = (cfg.goal_line_1(), cfg.fifty_yard_line(), cfg.goal_line_2());
    if !(gl1 < fifty && fifty < gl2) {
        return Err(FieldError::GoalLineOrder {
            goal_line_1: gl1,
            fifty_yard_line: fifty,
            goal_line_2: gl2,
        });
    }

    if gl2 >= cfg.length() {
        return Err(FieldError::GoalLineBeyondLength { goal_line_2: gl2, length: cfg.length() });
    }

    // hash < width / 2, compared without truncation
    if 2 * i64::from(cfg.hash_distance_from_sideline()) >= i64::from(cfg.width()) {
        return Err(FieldError::HashOutsideField {
            hash_distance_from_sideline: cfg.hash_distance_from_sideline(),
            width: cfg.width(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldOverrides;

    fn with(overrides: FieldOverrides) -> FieldConfiguration {
        FieldConfiguration::new(overrides)
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfiguration::default().validate().is_ok());
        assert!(FieldConfiguration::default().is_valid());
    }

    #[test]
    fn test_negative_dimension_reported_by_name() {
        let cfg = with(FieldOverrides { hash_length: Some(-1), ..Default::default() });
        match cfg.validate() {
            Err(FieldError::NegativeDimension { name, value }) => {
                assert_eq!(name, "hash_length");
                assert_eq!(value, -1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_inverted_goal_lines() {
        let cfg = with(FieldOverrides {
            goal_line_1: Some(3960),
            goal_line_2: Some(360),
            ..Default::default()
        });
        assert!(matches!(cfg.validate(), Err(FieldError::GoalLineOrder { .. })));
    }

    #[test]
    fn test_midfield_outside_goal_lines() {
        let cfg = with(FieldOverrides { fifty_yard_line: Some(4000), ..Default::default() });
        assert!(matches!(cfg.validate(), Err(FieldError::GoalLineOrder { .. })));

        let cfg = with(FieldOverrides { fifty_yard_line: Some(360), ..Default::default() });
        assert!(matches!(cfg.validate(), Err(FieldError::GoalLineOrder { .. })));
    }

    #[test]
    fn test_goal_line_past_end_line() {
        let cfg = with(FieldOverrides { length: Some(3960), ..Default::default() });
        assert!(matches!(
            cfg.validate(),
            Err(FieldError::GoalLineBeyondLength { goal_line_2: 3960, length: 3960 })
        ));
    }

    #[test]
    fn test_hash_marks_must_stay_on_own_half() {
        let cfg = with(FieldOverrides { hash_distance_from_sideline: Some(960), ..Default::default() });
        assert!(matches!(cfg.validate(), Err(FieldError::HashOutsideField { .. })));

        // odd width: 2 * 960 < 1921
        let cfg = with(FieldOverrides {
            width: Some(1921),
            hash_distance_from_sideline: Some(960),
            ..Default::default()
        });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_negative_checked_before_ordering() {
        let cfg = with(FieldOverrides {
            goal_line_1: Some(-10),
            goal_line_2: Some(-20),
            ..Default::default()
        });
        assert!(matches!(cfg.validate(), Err(FieldError::NegativeDimension { name: "goal_line_1", .. })));
    }
}
