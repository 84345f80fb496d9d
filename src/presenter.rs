//! Presentation components: stateless functions from counter props to a view.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::counter::CounterProps;
use crate::view::ViewNode;

pub const INCREMENT_LABEL: &str = "+";
pub const DECREMENT_LABEL: &str = "-";

/// Anything that can turn counter props into a view.
///
/// Implementations own no state and must not call the handlers in `props`
/// while rendering; handlers only run when a rendered button is pressed.
pub trait Component {
    fn render(&self, props: &CounterProps) -> ViewNode;
}

impl<F> Component for F
where
    F: Fn(&CounterProps) -> ViewNode,
{
    fn render(&self, props: &CounterProps) -> ViewNode {
        self(props)
    }
}

// No `Box<C>` impl: `Box<F>` is itself `Fn` and would overlap with the
// closure impl above. Boxed closures are components through that impl.
impl<C: Component + ?Sized> Component for Rc<C> {
    fn render(&self, props: &CounterProps) -> ViewNode {
        (**self).render(props)
    }
}

/// `[-] value [+]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter;

impl Component for Counter {
    fn render(&self, props: &CounterProps) -> ViewNode {
        ViewNode::row(vec![
            ViewNode::button(DECREMENT_LABEL, props.decrement.clone()),
            ViewNode::value(props.value),
            ViewNode::button(INCREMENT_LABEL, props.increment.clone()),
        ])
    }
}

/// `count: value [+] [-]`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactCounter;

impl Component for CompactCounter {
    fn render(&self, props: &CounterProps) -> ViewNode {
        ViewNode::row(vec![
            ViewNode::text("count:"),
            ViewNode::value(props.value),
            ViewNode::button(INCREMENT_LABEL, props.increment.clone()),
            ViewNode::button(DECREMENT_LABEL, props.decrement.clone()),
        ])
    }
}

/// Presenter selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PresenterKind {
    #[default]
    Classic,
    Compact,
}

impl PresenterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Compact => "compact",
        }
    }

    pub fn component(self) -> Rc<dyn Component> {
        match self {
            Self::Classic => Rc::new(Counter),
            Self::Compact => Rc::new(CompactCounter),
        }
    }
}
