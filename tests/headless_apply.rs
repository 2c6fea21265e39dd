use std::io::Cursor;
use std::rc::Rc;
use todo_tui::headless::{apply_actions, apply_to, format_items, HeadlessError};
use todo_tui::ui::todo::{ActionDecodeError, TodoStore};

#[test]
fn applies_actions_to_seeded_list() {
    let input = concat!(
        r#"{"type":"ADD_ITEM","payload":"buy milk"}"#,
        "\n",
        "\n",
        r#"{"type":"ADD_ITEM","payload":""}"#,
        "\n",
    );

    let report = apply_actions(Cursor::new(input)).expect("replay");

    assert_eq!(report.dispatched, 2);
    assert_eq!(report.ignored, 0);
    assert_eq!(report.notifications, 2);
    assert_eq!(
        report.items,
        ["wash car", "work out", "mow the lawn", "buy milk", ""]
    );
}

#[test]
fn unknown_kinds_are_counted_and_ignored() {
    let input = concat!(
        r#"{"type":"REMOVE_ITEM","payload":"wash car"}"#,
        "\n",
        r#"{"type":"RESET"}"#,
        "\n",
    );

    let report = apply_actions(Cursor::new(input)).expect("replay");

    assert_eq!(report.dispatched, 2);
    assert_eq!(report.ignored, 2);
    assert_eq!(report.notifications, 2);
    assert_eq!(report.items, ["wash car", "work out", "mow the lawn"]);
}

#[test]
fn malformed_line_reports_its_number() {
    let input = concat!(r#"{"type":"ADD_ITEM","payload":"ok"}"#, "\n", "not json\n");

    let err = apply_actions(Cursor::new(input)).unwrap_err();
    assert!(matches!(
        err,
        HeadlessError::Decode(ActionDecodeError::InvalidJson { line: 2, .. })
    ));
}

#[test]
fn replay_releases_its_subscription() {
    let store = Rc::new(TodoStore::default());
    apply_to(&store, Cursor::new(r#"{"type":"ADD_ITEM","payload":"x"}"#)).expect("replay");

    assert_eq!(store.listener_count(), 0);
    assert_eq!(store.get_state().len(), 4);
}

#[test]
fn formats_items_as_lines_or_json() {
    let items = vec!["a".to_string(), "b \"c\"".to_string()];

    assert_eq!(format_items(&items, false).expect("text"), "a\nb \"c\"");
    assert_eq!(
        format_items(&items, true).expect("json"),
        r#"["a","b \"c\""]"#
    );
}

#[test]
fn unknown_kind_with_structured_payload_is_ignored() {
    let input = concat!(
        r#"{"type":"SET_FILTER","payload":{"done":true}}"#,
        "\n",
        r#"{"type":"ADD_ITEM","payload":"buy milk"}"#,
        "\n",
    );

    let report = apply_actions(Cursor::new(input)).expect("replay");

    assert_eq!(report.dispatched, 2);
    assert_eq!(report.ignored, 1);
    assert_eq!(
        report.items,
        ["wash car", "work out", "mow the lawn", "buy milk"]
    );
}

#[test]
fn add_item_with_non_string_payload_fails() {
    let err = apply_actions(Cursor::new(r#"{"type":"ADD_ITEM","payload":[1]}"#)).unwrap_err();
    assert!(matches!(
        err,
        HeadlessError::Decode(ActionDecodeError::MissingPayload { line: 1, .. })
    ));
}

#[test]
fn line_output_keeps_one_item_per_line() {
    let report = apply_actions(Cursor::new(
        r#"{"type":"ADD_ITEM","payload":"a\nb\\c\r"}"#,
    ))
    .expect("replay");

    let text = format_items(&report.items, false).expect("text");

    assert_eq!(text.lines().count(), report.items.len());
    assert_eq!(text.lines().last(), Some(r"a\nb\\c\r"));
}
