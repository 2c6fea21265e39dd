//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new snapshots, cheaply where possible)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Defaulted to their initial value (used when no prior state exists)
pub trait UiState: Clone + PartialEq + Default + 'static {}
