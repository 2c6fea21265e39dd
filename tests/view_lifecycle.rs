mod common;

use common::{ctrl, key, mounted_view, seed, type_text};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::rc::Rc;
use todo_tui::config::Config;
use todo_tui::ui::app::{Focus, TodoView};
use todo_tui::ui::input::{handle_key, handle_paste};
use todo_tui::ui::todo::{TodoAction, TodoStore};

#[test]
fn mount_subscribes_and_mirrors_store() {
    let store = Rc::new(TodoStore::default());
    store.dispatch(TodoAction::add_item("before mount"));

    let mut view = TodoView::new(Rc::clone(&store), &Config::default());
    assert!(!view.is_mounted());
    view.mount();

    assert!(view.is_mounted());
    assert_eq!(store.listener_count(), 1);
    assert_eq!(view.items().last().map(String::as_str), Some("before mount"));
}

#[test]
fn mount_twice_keeps_one_subscription() {
    let (store, mut view) = mounted_view(&Config::default());
    view.mount();
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn external_dispatch_refreshes_mirror() {
    let (store, view) = mounted_view(&Config::default());
    assert!(view.take_dirty());

    store.dispatch(TodoAction::add_item("from elsewhere"));

    assert!(view.take_dirty());
    assert_eq!(view.items().len(), 4);
    assert_eq!(view.view_state().mirrored, store.get_state());
}

#[test]
fn unmount_releases_listener() {
    let (store, mut view) = mounted_view(&Config::default());
    view.unmount();

    assert_eq!(store.listener_count(), 0);
    store.dispatch(TodoAction::add_item("after unmount"));
    assert_eq!(view.items(), seed());
}

#[test]
fn dropping_view_releases_listener() {
    let (store, view) = mounted_view(&Config::default());
    drop(view);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn typing_then_enter_adds_item() {
    let (store, mut view) = mounted_view(&Config::default());

    type_text(&mut view, "buy milk");
    assert_eq!(view.pending_input_text(), "buy milk");

    handle_key(&mut view, key(KeyCode::Enter));

    assert_eq!(
        store.get_state().items(),
        ["wash car", "work out", "mow the lawn", "buy milk"]
    );
    assert_eq!(view.items(), store.get_state().items());
}

#[test]
fn input_is_kept_after_submit_by_default() {
    let (store, mut view) = mounted_view(&Config::default());
    type_text(&mut view, "buy milk");

    handle_key(&mut view, key(KeyCode::Enter));
    handle_key(&mut view, key(KeyCode::Enter));

    assert_eq!(view.pending_input_text(), "buy milk");
    assert_eq!(&store.get_state().items()[3..], ["buy milk", "buy milk"]);
}

#[test]
fn clear_on_submit_empties_input() {
    let mut config = Config::default();
    config.view.clear_on_submit = true;
    let (store, mut view) = mounted_view(&config);

    type_text(&mut view, "buy milk");
    handle_key(&mut view, key(KeyCode::Enter));

    assert_eq!(view.pending_input_text(), "");
    assert_eq!(store.get_state().len(), 4);
}

#[test]
fn empty_submit_appends_empty_item() {
    let (store, mut view) = mounted_view(&Config::default());
    view.submit();

    let state = store.get_state();
    assert_eq!(state.len(), 4);
    assert_eq!(state.items()[3], "");
}

#[test]
fn submit_button_accepts_space() {
    let (store, mut view) = mounted_view(&Config::default());
    type_text(&mut view, "x");

    handle_key(&mut view, key(KeyCode::Tab));
    assert_eq!(view.focus(), Focus::Submit);
    handle_key(&mut view, key(KeyCode::Char(' ')));

    assert_eq!(store.get_state().items()[3], "x");
    assert_eq!(view.pending_input_text(), "x");
}

#[test]
fn typing_is_ignored_while_button_focused() {
    let (_store, mut view) = mounted_view(&Config::default());
    handle_key(&mut view, key(KeyCode::BackTab));
    type_text(&mut view, "abc");
    handle_paste(&mut view, "pasted");

    assert_eq!(view.pending_input_text(), "");
}

#[test]
fn paste_goes_to_input() {
    let (_store, mut view) = mounted_view(&Config::default());
    handle_paste(&mut view, "buy\nmilk");
    assert_eq!(view.pending_input_text(), "buymilk");
}

#[test]
fn ctrl_u_clears_input() {
    let (_store, mut view) = mounted_view(&Config::default());
    type_text(&mut view, "oops");
    handle_key(&mut view, ctrl('u'));
    assert_eq!(view.pending_input_text(), "");
}

#[test]
fn quit_keys_request_quit() {
    for event in [ctrl('q'), ctrl('c'), key(KeyCode::Esc)] {
        let (_store, mut view) = mounted_view(&Config::default());
        handle_key(&mut view, event);
        assert!(view.should_quit());
    }
}

#[test]
fn key_release_is_ignored() {
    let (store, mut view) = mounted_view(&Config::default());
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    handle_key(&mut view, release);
    assert_eq!(store.get_state().len(), 3);
}
