//! Base trait for actions (user/system events) in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (key presses, submit)
/// - Scripted events (headless replay)
///
/// Actions are consumed exactly once by a reducer to produce a new state.
pub trait Action: std::fmt::Debug + 'static {
    /// Tag identifying the action, used for logging.
    fn kind(&self) -> &str;
}
