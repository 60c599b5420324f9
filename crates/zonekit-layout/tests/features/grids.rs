use zonekit_core::{LayoutError, Zone};
use zonekit_layout::{
    AnswerGridParams, GridGenerator, GridOperation, MatrixGridParams, SegmentedGridParams,
    ZoneEditor, ZoneRegistry,
};

fn matrix_anchors(editor: &mut ZoneEditor) {
    editor.upsert_zone(Zone::new("D00", 0.0, 0.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("D10", 0.0, 40.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("D01", 30.0, 0.0, 20.0, 20.0));
}

fn answer_anchors(editor: &mut ZoneEditor) {
    editor.upsert_zone(Zone::new("1A", 100.0, 100.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("1B", 130.0, 100.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("1C", 160.0, 100.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("2A", 100.0, 140.0, 20.0, 20.0));
}

/// First two options of every group start, 20px apart vertically per
/// question, 30px apart horizontally.
fn segmented_anchors(editor: &mut ZoneEditor) {
    for group in SegmentedGridParams::default().groups() {
        let top = 100.0 + f64::from(group.first_row - 1) * 20.0;
        editor.upsert_zone(Zone::new(format!("{}A", group.first_row), 100.0, top, 20.0, 20.0));
        editor.upsert_zone(Zone::new(format!("{}B", group.first_row), 130.0, top, 20.0, 20.0));
    }
}

#[test]
fn test_matrix_grid_scenario() {
    let mut editor = ZoneEditor::default();
    matrix_anchors(&mut editor);
    let depth = editor.history_depth();

    let written = editor.generate_matrix_grid().unwrap();
    assert_eq!(written, 77);
    assert_eq!(editor.registry().len(), 80);
    assert_eq!(editor.history_depth(), depth + 1);

    for row in 0..10u32 {
        for col in 0..8u32 {
            let zone = editor.registry().find(&format!("D{}{}", row, col)).unwrap();
            assert_eq!(zone.left, 30.0 * f64::from(col));
            assert_eq!(zone.top, 40.0 * f64::from(row));
            assert_eq!((zone.width, zone.height), (20.0, 20.0));
        }
    }
}

#[test]
fn test_matrix_grid_never_touches_anchors() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("D00", 5.0, 5.0, 20.0, 18.0));
    editor.upsert_zone(Zone::new("D10", 6.0, 45.0, 11.0, 11.0));
    editor.upsert_zone(Zone::new("D01", 35.0, 4.0, 12.0, 12.0));
    let before: Vec<Zone> = ["D00", "D10", "D01"]
        .iter()
        .map(|n| editor.registry().find(n).unwrap().clone())
        .collect();

    editor.generate_matrix_grid().unwrap();

    for anchor in before {
        assert_eq!(editor.registry().find(&anchor.name), Some(&anchor));
    }
    // Size comes from D00 only.
    assert_eq!(editor.registry().find("D77").unwrap().height, 18.0);
}

#[test]
fn test_matrix_regeneration_overwrites_generated_cells() {
    let mut editor = ZoneEditor::default();
    matrix_anchors(&mut editor);
    editor.generate_matrix_grid().unwrap();
    editor.move_zone("D55", 999.0, 999.0);

    editor.generate_matrix_grid().unwrap();
    let cell = editor.registry().find("D55").unwrap();
    assert_eq!((cell.left, cell.top), (150.0, 200.0));
    assert_eq!(editor.registry().len(), 80);
}

#[test]
fn test_matrix_missing_anchors_abort_without_snapshot() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("D00", 0.0, 0.0, 20.0, 20.0));
    let depth = editor.history_depth();

    let err = editor.generate_matrix_grid().unwrap_err();
    match err {
        LayoutError::MissingAnchors { missing, .. } => assert_eq!(missing, vec!["D10", "D01"]),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(editor.registry().len(), 1);
    assert_eq!(editor.history_depth(), depth);
}

#[test]
fn test_answer_grid_generation() {
    let mut editor = ZoneEditor::default();
    answer_anchors(&mut editor);

    let written = editor.generate_answer_grid(Some("12")).unwrap();
    assert_eq!(written, 32);
    assert_eq!(editor.registry().len(), 36);

    let cell = editor.registry().find("5C").unwrap();
    assert_eq!((cell.left, cell.top), (160.0, 260.0));
    let last = editor.registry().find("12B").unwrap();
    assert_eq!((last.left, last.top), (130.0, 540.0));
}

#[test]
fn test_answer_grid_default_question_count() {
    let mut editor = ZoneEditor::default();
    answer_anchors(&mut editor);
    editor.generate_answer_grid(None).unwrap();
    assert_eq!(editor.registry().len(), 30);
    assert!(editor.registry().contains("10C"));
    assert!(!editor.registry().contains("11A"));
}

#[test]
fn test_answer_grid_rejects_bad_count_before_snapshot() {
    let mut editor = ZoneEditor::default();
    answer_anchors(&mut editor);
    let depth = editor.history_depth();

    let err = editor.generate_answer_grid(Some("many")).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidInput { .. }));
    assert_eq!(editor.registry().len(), 4);
    assert_eq!(editor.history_depth(), depth);
}

#[test]
fn test_answer_grid_reports_every_missing_anchor() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("1A", 0.0, 0.0, 10.0, 10.0);
    let operation = GridOperation::Answers(AnswerGridParams::default());

    let err = GridGenerator::plan(&operation, &registry).unwrap_err();
    let message = err.to_string();
    for name in ["1B", "1C", "2A"] {
        assert!(message.contains(name), "{} missing from {}", name, message);
    }
}

#[test]
fn test_segmented_grid_generation() {
    let mut editor = ZoneEditor::default();
    segmented_anchors(&mut editor);
    assert_eq!(editor.registry().len(), 34);
    let depth = editor.history_depth();

    let written = editor.generate_segmented_grid().unwrap();
    assert_eq!(written, 150 - 34);
    assert_eq!(editor.registry().len(), 150);
    assert_eq!(editor.history_depth(), depth + 1);

    // Group 1-3: closing anchor 4A is 60px below 1A, spread over two steps.
    let cell = editor.registry().find("2C").unwrap();
    assert_eq!((cell.left, cell.top), (160.0, 130.0));
    let cell = editor.registry().find("3A").unwrap();
    assert_eq!(cell.top, 160.0);
}

#[test]
fn test_segmented_final_group_assumes_square_cells() {
    let mut editor = ZoneEditor::default();
    segmented_anchors(&mut editor);
    editor.generate_segmented_grid().unwrap();

    let first = editor.registry().find("49A").unwrap().clone();
    let next = editor.registry().find("50A").unwrap();
    // Vertical step equals the 30px horizontal step.
    assert_eq!(next.top - first.top, 30.0);
    assert_eq!(editor.registry().find("50C").unwrap().left, 160.0);
}

#[test]
fn test_segmented_grid_keeps_existing_cells() {
    let mut editor = ZoneEditor::default();
    segmented_anchors(&mut editor);
    let manual = Zone::new("2B", 1.0, 2.0, 3.0, 4.0);
    editor.upsert_zone(manual.clone());

    editor.generate_segmented_grid().unwrap();
    assert_eq!(editor.registry().find("2B"), Some(&manual));
}

#[test]
fn test_segmented_missing_anchor_aborts_everything() {
    let mut editor = ZoneEditor::default();
    segmented_anchors(&mut editor);
    editor.delete_zone("25A");
    let before = editor.registry().snapshot();
    let depth = editor.history_depth();

    let err = editor.generate_segmented_grid().unwrap_err();
    let LayoutError::MissingGroupAnchors(groups) = err else {
        panic!("expected missing group anchors");
    };
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].first_row, groups[0].last_row), (22, 24));
    assert_eq!(groups[0].missing, vec!["25A"]);
    assert_eq!((groups[1].first_row, groups[1].last_row), (25, 27));
    assert_eq!(groups[1].missing, vec!["25A"]);

    assert_eq!(editor.registry().snapshot(), before);
    assert_eq!(editor.history_depth(), depth);
}

#[test]
fn test_custom_matrix_params() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("M00", 0.0, 0.0, 5.0, 5.0);
    registry.upsert("M10", 0.0, 10.0, 5.0, 5.0);
    registry.upsert("M01", 10.0, 0.0, 5.0, 5.0);
    let params = MatrixGridParams::new("M", 3, 4);
    assert!(params.is_valid());
    assert_eq!(params.total_cells(), 12);

    let plan = GridGenerator::plan(&GridOperation::Matrix(params), &registry).unwrap();
    assert_eq!(plan.cells.len(), 9);
    assert_eq!(plan.kept, vec!["M00", "M01", "M10"]);

    let written = GridGenerator::apply(plan, &mut registry);
    assert_eq!(written, 9);
    assert_eq!(registry.find("M23").map(|z| (z.left, z.top)), Some((30.0, 20.0)));
}

#[test]
fn test_invalid_params_are_rejected() {
    let registry = ZoneRegistry::new();
    let operation = GridOperation::Answers(AnswerGridParams::new(5, vec!["A".into(), "B".into()]));
    assert!(!operation.is_valid());
    let err = GridGenerator::plan(&operation, &registry).unwrap_err();
    assert!(err.is_validation());
}
