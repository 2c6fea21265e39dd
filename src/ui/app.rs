use crate::config::Config;
use crate::ui::mvi::{Reducer, Subscription};
use crate::ui::text_field::{TextFieldIntent, TextFieldReducer, TextFieldState};
use crate::ui::todo::{AppState, TodoAction, TodoStore};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

/// Which control receives keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Submit,
}

/// Everything the view renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Copy of the store's state, refreshed on every notification.
    pub mirrored: AppState,
    /// Text typed but not yet submitted.
    pub pending_input: TextFieldState,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent);
    };
}

/// Presentational component over a [`TodoStore`].
///
/// Lifecycle: `mount` subscribes and mirrors the store, every dispatch
/// refreshes the mirror and flags a redraw, `unmount` (or drop) releases the
/// subscription.
pub struct TodoView {
    store: Rc<TodoStore>,
    state: Rc<RefCell<ViewState>>,
    dirty: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
    focus: Focus,
    title: String,
    clear_on_submit: bool,
    should_quit: bool,
}

impl TodoView {
    pub fn new(store: Rc<TodoStore>, config: &Config) -> Self {
        let mirrored = store.get_state();
        Self {
            store,
            state: Rc::new(RefCell::new(ViewState {
                mirrored,
                pending_input: TextFieldState::default(),
            })),
            dirty: Rc::new(Cell::new(true)),
            subscription: None,
            focus: Focus::Input,
            title: config.app.title.clone(),
            clear_on_submit: config.view.clear_on_submit,
            should_quit: false,
        }
    }

    /// Subscribe to the store and copy its current state. Idempotent.
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let store = Rc::downgrade(&self.store);
        let state = Rc::clone(&self.state);
        let dirty = Rc::clone(&self.dirty);
        self.subscription = Some(self.store.subscribe(move || {
            if let Some(store) = store.upgrade() {
                state.borrow_mut().mirrored = store.get_state();
                dirty.set(true);
            }
        }));

        self.state.borrow_mut().mirrored = self.store.get_state();
        self.dirty.set(true);
        tracing::debug!(items = self.store.get_state().len(), "view mounted");
    }

    /// Release the store subscription.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("view unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn view_state(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }

    /// Items as last mirrored from the store.
    pub fn items(&self) -> Vec<String> {
        self.state.borrow().mirrored.items().to_vec()
    }

    pub fn pending_input_text(&self) -> String {
        self.state.borrow().pending_input.value.clone()
    }

    pub fn on_input(&mut self, intent: TextFieldIntent) {
        {
            let mut state = self.state.borrow_mut();
            dispatch_mvi!(state, pending_input, TextFieldReducer, intent);
        }
        self.dirty.set(true);
    }

    /// Dispatch the pending text as a new item. Blank text is accepted.
    pub fn submit(&mut self) {
        let payload = self.pending_input_text();
        tracing::info!(chars = payload.chars().count(), "submitting item");
        self.store.dispatch(TodoAction::add_item(payload));

        if self.clear_on_submit {
            self.on_input(TextFieldIntent::Clear);
        }
        self.dirty.set(true);
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Submit,
            Focus::Submit => Focus::Input,
        };
        self.dirty.set(true);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and resets the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }
}

impl Drop for TodoView {
    fn drop(&mut self) {
        self.unmount();
    }
}
