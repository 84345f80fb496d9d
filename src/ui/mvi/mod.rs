//! Model-View-Intent (MVI) primitives for shell state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Shell state (which mode is selected) flows through a pure reducer. The
//! counter itself does not: it is owned by the mounted pattern adapter.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
