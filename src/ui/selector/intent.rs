use crate::patterns::Mode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorIntent {
    Next,
    Prev,
    Select(Mode),
}

impl Intent for SelectorIntent {}
