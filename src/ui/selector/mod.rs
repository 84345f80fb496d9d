mod intent;
mod reducer;
mod state;

pub use intent::SelectorIntent;
pub use reducer::SelectorReducer;
pub use state::SelectorState;
