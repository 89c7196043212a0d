//! End-to-end checks of the public field geometry API.

use football_field::{
    FieldConfiguration, FieldDescriptor, FieldError, FieldOverrides, FieldPoint, VertexCategory,
    VERTEX_COUNT,
};

#[test]
fn default_field_reference_points() {
    let cfg = FieldConfiguration::default();
    let v = cfg.vertices();

    assert_eq!(v.len(), 32);
    assert_eq!(v[0].as_tuple(), (0, 0));
    assert_eq!(v[8].as_tuple(), (2160, 0));
    assert_eq!(v[10].as_tuple(), (2160, 960));
}

#[test]
fn full_default_vertex_table() {
    let expected: [(i64, i64); VERTEX_COUNT] = [
        (0, 0),
        (0, 1920),
        (4320, 0),
        (4320, 1920),
        (360, 0),
        (360, 1920),
        (3960, 0),
        (3960, 1920),
        (2160, 0),
        (2160, 1920),
        (2160, 960),
        (360, 720),
        (360, 1200),
        (3960, 720),
        (3960, 1200),
        (2160, 720),
        (2160, 1200),
        (720, 720),
        (720, 1200),
        (1080, 720),
        (1080, 1200),
        (1440, 720),
        (1440, 1200),
        (2880, 720),
        (2880, 1200),
        (3240, 720),
        (3240, 1200),
        (3600, 720),
        (3600, 1200),
        (720, 324),
        (720, 1596),
        (2160, 324),
    ];
    let actual: Vec<(i64, i64)> =
        FieldConfiguration::default().vertices().iter().map(FieldPoint::as_tuple).collect();
    assert_eq!(actual, expected.to_vec());
}

#[test]
fn edges_stay_within_vertex_range() {
    let cfg = FieldConfiguration::default();
    assert!(cfg.edges().contains(&(9, 10)));
    assert!(cfg.edges().contains(&(1, 3)));
    for &(a, b) in cfg.edges() {
        assert!((1..=VERTEX_COUNT).contains(&a));
        assert!((1..=VERTEX_COUNT).contains(&b));
    }
}

#[test]
fn length_change_keeps_width_only_points() {
    let base = FieldConfiguration::default();
    let short = base.with_overrides(FieldOverrides { length: Some(3600), ..Default::default() });

    assert_eq!(base.vertex(1), short.vertex(1));
    assert_eq!(base.vertex(2), short.vertex(2));
    assert_ne!(base.vertex(3), short.vertex(3));
    assert_ne!(base.vertex(4), short.vertex(4));
    assert_eq!(short.vertex(3), Some(FieldPoint::new(3600, 0)));
}

#[test]
fn categories_and_colors_line_up() {
    let cfg = FieldConfiguration::default();
    for i in 1..=VERTEX_COUNT {
        let category = cfg.vertex_category(i).expect("index in range");
        assert_eq!(cfg.colors()[i - 1], category.color());
        assert!(cfg.vertex_name(i).is_some());
    }
    assert_eq!(cfg.vertex_category(11), Some(VertexCategory::Midfield));
}

#[test]
fn validation_is_opt_in() {
    let inverted = FieldConfiguration::new(FieldOverrides {
        goal_line_1: Some(3960),
        goal_line_2: Some(360),
        ..Default::default()
    });

    // Construction and derivation still succeed
    assert_eq!(inverted.vertices()[4].as_tuple(), (3960, 0));
    assert!(matches!(inverted.validate(), Err(FieldError::GoalLineOrder { .. })));
}

#[test]
fn descriptor_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.yaml");
    std::fs::write(&path, "width: 2000\n").unwrap();

    let cfg = FieldConfiguration::load(&path).unwrap();
    let descriptor = FieldDescriptor::from_config(&cfg);

    assert_eq!(descriptor.dimensions.width(), 2000);
    assert_eq!(descriptor.vertices[10], FieldPoint::new(2160, 1000));
    assert_eq!(descriptor.labels[31], "32");
}
