use crate::patterns::Mode;
use crate::ui::mvi::UiState;

/// Which pattern the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub mode: Mode,
}

impl UiState for SelectorState {}

impl SelectorState {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}
