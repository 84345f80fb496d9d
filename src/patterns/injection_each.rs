use serde::{Deserialize, Serialize};

use crate::counter::{CounterProps, CounterState};
use crate::patterns::{Adapter, Mode};
use crate::presenter::Component;
use crate::scope::Scope;
use crate::view::ViewNode;

pub const DEFAULT_INSTANCES: usize = 4;

/// Owns a counter and renders the injected presenter once per index, letting
/// `get_props` customise a private copy of the props for each instance.
pub struct InjectedEachCounter<C, G> {
    scope: Scope,
    state: CounterState,
    component: C,
    get_props: G,
    instances: usize,
}

impl<C, G> InjectedEachCounter<C, G>
where
    C: Component,
    G: Fn(usize, CounterProps) -> CounterProps,
{
    pub fn new(component: C, get_props: G) -> Self {
        let scope = Scope::new("comp-injection-on-each");
        let state = CounterState::new();
        let update = scope.schedule_update();
        state.subscribe(move |_| update());
        Self {
            scope,
            state,
            component,
            get_props,
            instances: DEFAULT_INSTANCES,
        }
    }

    pub fn with_instances(mut self, instances: usize) -> Self {
        self.instances = instances;
        self
    }

    pub fn instances(&self) -> usize {
        self.instances
    }

    /// Lazily yields one view per index. All instances share one snapshot.
    fn instance_views<'a>(&'a self, shared: &'a CounterProps) -> impl Iterator<Item = ViewNode> + 'a {
        (0..self.instances).map(move |index| {
            let props = (self.get_props)(index, shared.clone());
            ViewNode::row(vec![
                ViewNode::text(format!("#{index}")),
                self.component.render(&props),
            ])
        })
    }
}

impl<C, G> Adapter for InjectedEachCounter<C, G>
where
    C: Component,
    G: Fn(usize, CounterProps) -> CounterProps,
{
    fn mode(&self) -> Mode {
        Mode::CompInjectionOnEach
    }

    fn render(&mut self) -> ViewNode {
        self.scope.begin_render();
        let shared = self.state.snapshot();
        let children = self.instance_views(&shared).collect();
        ViewNode::group("<Component {...getProps(i, props)} />", children)
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Built-in prop-getters selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PropsTransform {
    /// Every instance gets the shared props unchanged.
    #[default]
    Identity,
    /// Instance `i` displays `value * i`.
    ScaleByIndex,
}

impl PropsTransform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::ScaleByIndex => "scale-by-index",
        }
    }

    pub fn apply(self, index: usize, defaults: CounterProps) -> CounterProps {
        match self {
            Self::Identity => defaults,
            Self::ScaleByIndex => CounterProps {
                value: defaults.value.wrapping_mul(index as i64),
                ..defaults
            },
        }
    }
}
