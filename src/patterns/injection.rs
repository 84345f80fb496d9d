use crate::counter::CounterState;
use crate::patterns::{Adapter, Mode};
use crate::presenter::Component;
use crate::scope::Scope;
use crate::view::ViewNode;

/// Owns a counter and renders an injected presenter with it.
pub struct InjectedCounter<C> {
    scope: Scope,
    state: CounterState,
    component: C,
}

impl<C: Component> InjectedCounter<C> {
    pub fn new(component: C) -> Self {
        let scope = Scope::new("comp-injection");
        let state = CounterState::new();
        let update = scope.schedule_update();
        state.subscribe(move |_| update());
        Self {
            scope,
            state,
            component,
        }
    }
}

impl<C: Component> Adapter for InjectedCounter<C> {
    fn mode(&self) -> Mode {
        Mode::CompInjection
    }

    fn render(&mut self) -> ViewNode {
        self.scope.begin_render();
        let props = self.state.snapshot();
        ViewNode::group("<Component {...props} />", vec![self.component.render(&props)])
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{CompactCounter, Counter, PresenterKind};

    #[test]
    fn renders_injected_component() {
        let mut classic = InjectedCounter::new(Counter);
        let mut compact = InjectedCounter::new(CompactCounter);
        assert_eq!(classic.render().to_plain(), "<Component {...props} />\n  [-] 0 [+]");
        assert_eq!(
            compact.render().to_plain(),
            "<Component {...props} />\n  count: 0 [+] [-]"
        );
    }

    #[test]
    fn accepts_trait_objects() {
        let mut adapter = InjectedCounter::new(PresenterKind::Compact.component());
        adapter.render().press("-");
        adapter.render().press("-");
        assert_eq!(adapter.render().displayed_values(), vec![-2]);
    }
}
