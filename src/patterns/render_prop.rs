use crate::counter::{CounterProps, CounterState};
use crate::patterns::{Adapter, Mode};
use crate::scope::Scope;
use crate::view::ViewNode;

/// Owns a counter and asks a caller-supplied function to build the view.
pub struct RenderPropCounter<F> {
    scope: Scope,
    state: CounterState,
    render_counter: F,
}

impl<F> RenderPropCounter<F>
where
    F: Fn(&CounterProps) -> ViewNode,
{
    pub fn new(render_counter: F) -> Self {
        let scope = Scope::new("render-prop");
        let state = CounterState::new();
        let update = scope.schedule_update();
        state.subscribe(move |_| update());
        Self {
            scope,
            state,
            render_counter,
        }
    }
}

impl<F> Adapter for RenderPropCounter<F>
where
    F: Fn(&CounterProps) -> ViewNode,
{
    fn mode(&self) -> Mode {
        Mode::RenderProp
    }

    fn render(&mut self) -> ViewNode {
        self.scope.begin_render();
        let props = self.state.snapshot();
        ViewNode::group("renderCounter(props)", vec![(self.render_counter)(&props)])
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }
}
