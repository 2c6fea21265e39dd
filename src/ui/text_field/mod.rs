mod intent;
mod reducer;
mod state;

pub use intent::TextFieldIntent;
pub use reducer::TextFieldReducer;
pub use state::TextFieldState;
