mod common;

use common::{key, mounted_view, render_rows, type_text};
use crossterm::event::KeyCode;
use todo_tui::config::Config;
use todo_tui::ui::input::handle_key;
use todo_tui::ui::render::SUBMIT_LABEL;
use todo_tui::ui::todo::TodoAction;

fn row_of(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}

#[test]
fn renders_items_in_order_then_input() {
    let (_store, mut view) = mounted_view(&Config::default());
    type_text(&mut view, "draft");

    let rows = render_rows(&view, 60, 20);

    let wash = row_of(&rows, "1. wash car").expect("first item");
    let work = row_of(&rows, "2. work out").expect("second item");
    let mow = row_of(&rows, "3. mow the lawn").expect("third item");
    let input = row_of(&rows, "draft").expect("input text");
    assert!(wash < work && work < mow && mow < input);
    assert!(rows[input].contains(SUBMIT_LABEL));
}

#[test]
fn header_shows_title_and_count() {
    let mut config = Config::default();
    config.app.title = "Chores".to_string();
    let (store, view) = mounted_view(&config);
    store.dispatch(TodoAction::add_item("buy milk"));

    let rows = render_rows(&view, 60, 20);
    let header = row_of(&rows, "Chores").expect("title");
    assert!(rows[header].contains("4 items"));
}

#[test]
fn new_item_appears_after_submit() {
    let (_store, mut view) = mounted_view(&Config::default());
    type_text(&mut view, "buy milk");
    handle_key(&mut view, key(KeyCode::Enter));

    let rows = render_rows(&view, 60, 20);
    assert!(row_of(&rows, "4. buy milk").is_some());
}

#[test]
fn newest_items_stay_visible_when_list_overflows() {
    let (store, view) = mounted_view(&Config::default());
    for n in 0..20 {
        store.dispatch(TodoAction::add_item(format!("extra {n}")));
    }

    let rows = render_rows(&view, 60, 16);
    assert!(row_of(&rows, "extra 19").is_some());
    assert!(row_of(&rows, "wash car").is_none());
}
