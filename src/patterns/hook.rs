use crate::counter::{CounterProps, CounterState};
use crate::patterns::{Adapter, Mode};
use crate::presenter::Component;
use crate::scope::{Hooks, Scope};
use crate::view::ViewNode;

/// Counter state stored in the calling component's scope.
///
/// Only callable during a render pass, since that is the only place a
/// [`Hooks`] handle exists. The first call allocates the state; later renders
/// get a fresh snapshot of the same state.
pub fn use_counter(hooks: &mut Hooks<'_>) -> CounterProps {
    let state = hooks.use_hook(|update| {
        let state = CounterState::new();
        state.subscribe(move |_| update());
        state
    });
    state.snapshot()
}

/// A component whose render logic calls [`use_counter`] and forwards the
/// result to its presenter.
pub struct HookCounter<C> {
    scope: Scope,
    presenter: C,
}

impl<C: Component> HookCounter<C> {
    pub fn new(presenter: C) -> Self {
        Self {
            scope: Scope::new("hook"),
            presenter,
        }
    }
}

impl<C: Component> Adapter for HookCounter<C> {
    fn mode(&self) -> Mode {
        Mode::Hook
    }

    fn render(&mut self) -> ViewNode {
        let mut hooks = self.scope.begin_render();
        let props = use_counter(&mut hooks);
        ViewNode::group("useCounter()", vec![self.presenter.render(&props)])
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }
}
