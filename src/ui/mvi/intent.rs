/// Marker trait for intents: key presses and other discrete user actions
/// that a reducer turns into a new state.
pub trait Intent: 'static {}
