//! The four ways of handing counter state to a presenter.
//!
//! ```text
//! hook                    HookCounter ── use_counter(hooks) ──→ presenter.render(props)
//! render-prop             RenderPropCounter ── render_counter(props)
//! comp-injection          InjectedCounter ── component.render(props)
//! comp-injection-on-each  InjectedEachCounter ── component.render(get_props(i, props)) × n
//! ```
//!
//! Every adapter owns exactly one counter for as long as it is mounted.
//! Mounting is construction, unmounting is drop.

mod hook;
mod injection;
mod injection_each;
mod mode;
mod render_prop;

pub use hook::{use_counter, HookCounter};
pub use injection::InjectedCounter;
pub use injection_each::{InjectedEachCounter, PropsTransform, DEFAULT_INSTANCES};
pub use mode::{Mode, UnknownMode};
pub use render_prop::RenderPropCounter;

use crate::callback::Redraw;
use crate::counter::CounterProps;
use crate::presenter::{Component, PresenterKind};
use crate::scope::Scope;
use crate::view::ViewNode;

/// A mounted delivery pattern.
pub trait Adapter {
    fn mode(&self) -> Mode;

    /// Produce the current view. Clears the pending-update flag.
    fn render(&mut self) -> ViewNode;

    /// True before the first render and after any mutation since the last one.
    fn needs_render(&self) -> bool {
        self.scope().needs_render()
    }

    /// Register a listener invoked whenever the adapter's state changes.
    fn on_update(&self, redraw: Redraw) {
        self.scope().on_update(redraw);
    }

    /// Completed render passes since mount.
    fn renders(&self) -> u64 {
        self.scope().renders()
    }

    /// The scope that owns this adapter's counter subscription.
    fn scope(&self) -> &Scope;
}

/// Knobs shared by every pattern when mounted from config or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    pub presenter: PresenterKind,
    pub instances: usize,
    pub transform: PropsTransform,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            presenter: PresenterKind::default(),
            instances: DEFAULT_INSTANCES,
            transform: PropsTransform::default(),
        }
    }
}

/// Mount a fresh adapter for `mode`. Its counter starts at zero.
pub fn mount(mode: Mode, options: &PatternOptions) -> Box<dyn Adapter> {
    let presenter = options.presenter.component();
    match mode {
        Mode::Hook => Box::new(HookCounter::new(presenter)),
        Mode::RenderProp => {
            Box::new(RenderPropCounter::new(move |props: &CounterProps| {
                presenter.render(props)
            }))
        }
        Mode::CompInjection => Box::new(InjectedCounter::new(presenter)),
        Mode::CompInjectionOnEach => {
            let transform = options.transform;
            Box::new(
                InjectedEachCounter::new(presenter, move |index: usize, defaults: CounterProps| {
                    transform.apply(index, defaults)
                })
                .with_instances(options.instances),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_adapter_reports_its_mode() {
        let options = PatternOptions::default();
        for mode in Mode::ALL {
            assert_eq!(mount(mode, &options).mode(), mode);
        }
    }

    #[test]
    fn mount_honours_instance_count() {
        let options = PatternOptions {
            instances: 2,
            ..PatternOptions::default()
        };
        let mut adapter = mount(Mode::CompInjectionOnEach, &options);
        assert_eq!(adapter.render().displayed_values(), vec![0, 0]);
    }

    #[test]
    fn redraw_listener_fires_on_mutation() {
        use std::cell::Cell;
        use std::rc::Rc;

        for mode in Mode::ALL {
            let mut adapter = mount(mode, &PatternOptions::default());
            let redraws = Rc::new(Cell::new(0));
            let counter = Rc::clone(&redraws);
            adapter.on_update(Rc::new(move || counter.set(counter.get() + 1)));

            let view = adapter.render();
            assert!(!adapter.needs_render());
            assert!(view.press("+"));
            assert_eq!(redraws.get(), 1, "{mode}");
            assert!(adapter.needs_render());
        }
    }

    #[test]
    fn render_count_tracks_passes_not_presses() {
        for mode in Mode::ALL {
            let mut adapter = mount(mode, &PatternOptions::default());
            assert_eq!(adapter.renders(), 0);
            let view = adapter.render();
            view.press("+");
            view.press("+");
            adapter.render();
            assert_eq!(adapter.renders(), 2, "{mode}");
        }
    }
}
