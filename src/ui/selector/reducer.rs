use crate::ui::mvi::Reducer;
use crate::ui::selector::intent::SelectorIntent;
use crate::ui::selector::state::SelectorState;

pub struct SelectorReducer;

impl Reducer for SelectorReducer {
    type State = SelectorState;
    type Intent = SelectorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mode = match intent {
            SelectorIntent::Next => state.mode.next(),
            SelectorIntent::Prev => state.mode.prev(),
            SelectorIntent::Select(mode) => mode,
        };
        SelectorState { mode }
    }
}
