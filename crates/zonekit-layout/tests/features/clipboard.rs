use zonekit_core::{CanvasPoint, InputMode, Zone};
use zonekit_layout::{
    EditorConfig, InputOutcome, ScriptedInteraction, ZoneEditor,
};

fn answer_row(editor: &mut ZoneEditor<ScriptedInteraction>) {
    editor.upsert_zone(Zone::new("1A", 100.0, 200.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("1B", 130.0, 200.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("1C", 160.0, 210.0, 20.0, 20.0));
    for name in ["1A", "1B", "1C"] {
        editor.toggle_selection(name);
    }
}

fn scripted(interaction: ScriptedInteraction) -> ZoneEditor<ScriptedInteraction> {
    ZoneEditor::new(EditorConfig::default(), interaction)
}

#[test]
fn test_repeated_paste_appends_suffixes() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("1A", 10.0, 10.0, 20.0, 20.0));
    editor.toggle_selection("1A");
    assert_eq!(editor.copy_selection(), 1);

    assert!(editor.prepare_paste());
    let outcome = editor.pointer_down(CanvasPoint::new(300.0, 300.0), false).unwrap();
    assert_eq!(outcome, InputOutcome::Pasted(vec!["1A_1".to_string()]));

    assert!(editor.prepare_paste());
    let outcome = editor.pointer_down(CanvasPoint::new(400.0, 300.0), false).unwrap();
    assert_eq!(outcome, InputOutcome::Pasted(vec!["1A_2".to_string()]));
    assert_eq!(editor.registry().len(), 3);
}

#[test]
fn test_paste_preserves_relative_geometry() {
    let mut editor = scripted(ScriptedInteraction::new());
    answer_row(&mut editor);
    let originals: Vec<Zone> = editor.registry().list().to_vec();
    editor.copy_selection();

    let placement = CanvasPoint::new(400.0, 50.0);
    editor.prepare_paste();
    let names = editor.paste_at(placement).unwrap();
    assert_eq!(names.len(), 3);

    for (original, name) in originals.iter().zip(&names) {
        let pasted = editor.registry().find(name).unwrap();
        assert_eq!(pasted.left - placement.x, original.left - 100.0);
        assert_eq!(pasted.top - placement.y, original.top - 200.0);
        assert_eq!((pasted.width, pasted.height), (original.width, original.height));
    }
}

#[test]
fn test_paste_replaces_selection_and_snapshots_once() {
    let mut editor = scripted(ScriptedInteraction::new());
    answer_row(&mut editor);
    editor.copy_selection();
    let depth = editor.history_depth();

    editor.prepare_paste();
    let names = editor.paste_at(CanvasPoint::new(0.0, 0.0)).unwrap();

    assert_eq!(editor.history_depth(), depth + 1);
    assert_eq!(editor.selection().names(), names.as_slice());
    assert_eq!(editor.mode(), InputMode::Idle);

    assert!(editor.undo());
    assert_eq!(editor.registry().len(), 3);
}

#[test]
fn test_paste_with_renumbering() {
    let interaction = ScriptedInteraction::new().with_confirm(true).with_text("16");
    let mut editor = scripted(interaction);
    answer_row(&mut editor);
    editor.copy_selection();

    editor.prepare_paste();
    let names = editor.paste_at(CanvasPoint::new(100.0, 500.0)).unwrap();
    assert_eq!(names, vec!["16A", "16B", "16C"]);
    assert!(editor
        .interaction()
        .asked()
        .iter()
        .any(|q| q == "Number for the new zones (current: 1):"));
}

#[test]
fn test_renumbering_declined_keeps_names() {
    let interaction = ScriptedInteraction::new().with_confirm(false);
    let mut editor = scripted(interaction);
    answer_row(&mut editor);
    editor.copy_selection();

    editor.prepare_paste();
    let names = editor.paste_at(CanvasPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(names, vec!["1A_1", "1B_1", "1C_1"]);
}

#[test]
fn test_invalid_renumber_start_pastes_without_renumbering() {
    let interaction = ScriptedInteraction::new().with_confirm(true).with_text("x1");
    let mut editor = scripted(interaction);
    answer_row(&mut editor);
    editor.copy_selection();
    let depth = editor.history_depth();

    editor.prepare_paste();
    let outcome = editor.pointer_down(CanvasPoint::new(0.0, 0.0), false).unwrap();
    assert_eq!(
        outcome,
        InputOutcome::Pasted(vec![
            "1A_1".to_string(),
            "1B_1".to_string(),
            "1C_1".to_string()
        ])
    );
    assert_eq!(editor.registry().len(), 6);
    assert_eq!(editor.history_depth(), depth + 1);
    assert_eq!(editor.mode(), InputMode::Idle);
}

#[test]
fn test_renumbering_rewrites_suffixed_copies() {
    let interaction = ScriptedInteraction::new().with_confirm(true).with_text("5");
    let mut editor = scripted(interaction);
    editor.upsert_zone(Zone::new("1A", 10.0, 10.0, 20.0, 20.0));
    editor.upsert_zone(Zone::new("1A_1", 40.0, 10.0, 20.0, 20.0));
    editor.toggle_selection("1A");
    editor.toggle_selection("1A_1");
    editor.copy_selection();

    editor.prepare_paste();
    let names = editor.paste_at(CanvasPoint::new(100.0, 100.0)).unwrap();
    assert_eq!(names, vec!["5A", "5A_1"]);
    assert_eq!(
        editor.registry().find("5A_1").map(|z| (z.left, z.top)),
        Some((130.0, 100.0))
    );
}

#[test]
fn test_copy_with_empty_selection_keeps_clipboard() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("1A", 0.0, 0.0, 5.0, 5.0));
    editor.toggle_selection("1A");
    editor.copy_selection();
    editor.clear_selection();

    assert_eq!(editor.copy_selection(), 0);
    assert_eq!(editor.clipboard().len(), 1);
}

#[test]
fn test_prepare_paste_needs_clipboard() {
    let mut editor = ZoneEditor::default();
    assert!(!editor.prepare_paste());
    assert_eq!(editor.mode(), InputMode::Idle);
}

#[test]
fn test_cancel_paste_restores_normal_input() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("1A", 0.0, 0.0, 5.0, 5.0));
    editor.toggle_selection("1A");
    editor.copy_selection();

    editor.prepare_paste();
    assert_eq!(editor.mode(), InputMode::AwaitingPastePlacement);
    editor.cancel_paste();
    assert_eq!(editor.mode(), InputMode::Idle);

    let outcome = editor.pointer_down(CanvasPoint::new(100.0, 100.0), false).unwrap();
    assert_eq!(outcome, InputOutcome::DrawingStarted);
    assert_eq!(editor.registry().len(), 1);
}

#[test]
fn test_clipboard_survives_paste_and_source_changes() {
    let mut editor = ZoneEditor::default();
    editor.upsert_zone(Zone::new("1A", 0.0, 0.0, 5.0, 5.0));
    editor.toggle_selection("1A");
    editor.copy_selection();
    editor.move_zone("1A", 50.0, 50.0);

    editor.prepare_paste();
    editor.paste_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_eq!(editor.clipboard().zones()[0].left, 0.0);
    assert_eq!(editor.clipboard().len(), 1);
}
