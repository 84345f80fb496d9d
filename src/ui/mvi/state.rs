/// Marker trait for shell state objects.
///
/// States are plain values: cloned to derive new states, compared to detect
/// changes, defaulted on startup.
pub trait UiState: Clone + PartialEq + Default + 'static {}
