use crate::config::Config;
use crate::ui::app::TodoView;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::todo::TodoStore;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::io;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let store = Rc::new(TodoStore::default());
    let mut view = scopeguard::guard(TodoView::new(Rc::clone(&store), config), |mut view| {
        view.unmount();
    });
    view.mount();

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))?;
    }

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate, shutdown);
    tracing::info!(items = store.get_state().len(), "todo view started");

    loop {
        if view.take_dirty() {
            terminal.draw(|frame| draw(frame, &view))?;
        }
        if view.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut view, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut view, &text),
            Ok(AppEvent::Resize(_, _)) => view.mark_dirty(),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => view.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(items = store.get_state().len(), "todo view stopped");
    Ok(())
}
