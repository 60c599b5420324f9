use std::sync::{Arc, Mutex};
use zonekit_core::{EventCategory, EventFilter, LayoutError, LayoutEvent, StyleEvent, Zone, ZoneStyle};
use zonekit_layout::{EditorConfig, ScriptedInteraction, ZoneEditor};

fn dni_editor() -> ZoneEditor<ScriptedInteraction> {
    let mut editor = ZoneEditor::new(
        EditorConfig::default(),
        ScriptedInteraction::new().with_text("00000000"),
    );
    editor.upsert_zone(Zone::new("D00", 0.0, 0.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("D10", 0.0, 40.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("D01", 30.0, 0.0, 20.0, 20.0));
    editor.generate_matrix_grid().unwrap();
    editor
}

#[test]
fn test_preview_highlights_one_cell_per_digit() {
    let mut editor = dni_editor();
    let styles = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&styles);
    editor.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Style]),
        move |event| {
            if let LayoutEvent::Style(StyleEvent::ZoneStyled { name, style }) = event {
                sink.lock().unwrap().push((name, style));
            }
        },
    );
    let depth = editor.history_depth();

    let highlighted = editor.preview_dni("12345678").unwrap();
    assert_eq!(
        highlighted,
        vec!["D10", "D21", "D32", "D43", "D54", "D65", "D76", "D87"]
    );

    let styles = styles.lock().unwrap();
    let resets = styles.iter().filter(|(_, s)| *s == ZoneStyle::Normal).count();
    let marks = styles.iter().filter(|(_, s)| *s == ZoneStyle::Highlighted).count();
    assert_eq!(resets, 80);
    assert_eq!(marks, 8);
    assert_eq!(editor.history_depth(), depth);
}

#[test]
fn test_preview_rejects_malformed_values() {
    let mut editor = dni_editor();
    for value in ["1234567", "123456789", "1234567A", ""] {
        let err = editor.preview_dni(value).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { .. }), "{}", value);
    }
}

#[test]
fn test_prompted_preview() {
    let mut editor = dni_editor();
    let highlighted = editor.prompt_dni_preview().unwrap().unwrap();
    assert_eq!(highlighted.len(), 8);
    assert!(highlighted.iter().all(|n| n.starts_with("D0")));

    // Script exhausted: the next prompt is declined.
    assert_eq!(editor.prompt_dni_preview().unwrap(), None);
}
