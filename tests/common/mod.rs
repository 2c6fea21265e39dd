//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;
use todo_tui::config::Config;
use todo_tui::ui::app::TodoView;
use todo_tui::ui::render::draw;
use todo_tui::ui::todo::TodoStore;

pub const SEED: [&str; 3] = ["wash car", "work out", "mow the lawn"];

pub fn seed() -> Vec<String> {
    SEED.iter().map(|item| item.to_string()).collect()
}

/// Fresh seeded store and a mounted view over it.
pub fn mounted_view(config: &Config) -> (Rc<TodoStore>, TodoView) {
    let store = Rc::new(TodoStore::default());
    let mut view = TodoView::new(Rc::clone(&store), config);
    view.mount();
    (store, view)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(view: &mut TodoView, text: &str) {
    for ch in text.chars() {
        todo_tui::ui::input::handle_key(view, key(KeyCode::Char(ch)));
    }
}

/// Draw the view into an in-memory terminal and return its rows.
pub fn render_rows(view: &TodoView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, view)).expect("draw");
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
