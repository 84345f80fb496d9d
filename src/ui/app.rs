use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use crate::cli::Overrides;
use crate::config::ConfigStore;
use crate::patterns::{mount, Adapter, Mode, PatternOptions};
use crate::ui::mvi::Reducer;
use crate::ui::selector::{SelectorIntent, SelectorReducer, SelectorState};
use crate::view::ViewNode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Help,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    Popup(PopupKind),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Selected mode (MVI pattern).
    selector: SelectorState,
    options: PatternOptions,
    /// The mounted pattern; replaced (unmounted) on every mode switch.
    adapter: Box<dyn Adapter>,
    /// Last rendered view.
    view: ViewNode,
    focused_control: usize,
    /// Set by the adapter's update listener and by shell-level changes.
    redraw: Rc<Cell<bool>>,
    config: ConfigStore,
    overrides: Overrides,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore, overrides: Overrides) -> Self {
        let current = config.get();
        let options = current.pattern_options();
        let selector = SelectorState::new(current.defaults.mode);
        let redraw = Rc::new(Cell::new(true));
        let (adapter, view) = mount_with_listener(selector.mode, &options, &redraw);
        Self {
            should_quit: false,
            focus: Focus::Counter,
            selector,
            options,
            adapter,
            view,
            focused_control: 0,
            redraw,
            config,
            overrides,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> Mode {
        self.selector.mode
    }

    pub fn options(&self) -> &PatternOptions {
        &self.options
    }

    pub fn view(&self) -> &ViewNode {
        &self.view
    }

    pub fn focused_control(&self) -> usize {
        self.focused_control
    }

    /// Render passes of the mounted adapter since it was mounted.
    pub fn renders(&self) -> u64 {
        self.adapter.renders()
    }

    pub fn config_path(&self) -> &Path {
        self.config.path()
    }

        pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Counter => None,
        }
    }

    pub fn toggle_popup(&mut self, kind: PopupKind) -> bool {
        self.focus = match self.focus {
            Focus::Popup(active) if active == kind => Focus::Counter,
            _ => Focus::Popup(kind),
        };
        self.redraw.set(true);
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Counter;
        self.redraw.set(true);
    }

    /// Returns and clears the pending-redraw flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn on_tick(&mut self) {
        self.refresh();
    }

    pub fn on_resize(&mut self, _cols: u16, _rows: u16) {
        self.redraw.set(true);
    }

    /// Re-render the adapter if its state changed since the last render.
    pub fn refresh(&mut self) {
        if self.adapter.needs_render() {
            self.view = self.adapter.render();
            self.clamp_focus();
            self.redraw.set(true);
        }
    }

    // ========================================================================
    // Controls
    // ========================================================================

    pub fn focus_next(&mut self) {
        let count = self.view.button_count();
        if count == 0 {
            self.focused_control = 0;
            return;
        }
        self.focused_control = (self.focused_control + 1) % count;
        self.redraw.set(true);
    }

    pub fn focus_prev(&mut self) {
        let count = self.view.button_count();
        if count == 0 {
            self.focused_control = 0;
            return;
        }
        self.focused_control = (self.focused_control + count - 1) % count;
        self.redraw.set(true);
    }

    /// Activate the focused button. Returns false when the view has none.
    pub fn press_focused(&mut self) -> bool {
        let pressed = self.view.press_index(self.focused_control);
        self.refresh();
        pressed
    }

    /// Activate the first button labelled `label`.
    pub fn press_label(&mut self, label: &str) -> bool {
        let pressed = self.view.press(label);
        self.refresh();
        pressed
    }

    // ========================================================================
    // Mode selection (MVI pattern)
    // ========================================================================

    pub fn dispatch_selector(&mut self, intent: SelectorIntent) {
        let before = self.selector.mode;
        dispatch_mvi!(self, selector, SelectorReducer, intent);
        if self.selector.mode != before {
            tracing::info!(from = %before, to = %self.selector.mode, "mode switched");
            self.remount();
        }
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.dispatch_selector(SelectorIntent::Select(mode));
    }

    pub fn next_mode(&mut self) {
        self.dispatch_selector(SelectorIntent::Next);
    }

    pub fn prev_mode(&mut self) {
        self.dispatch_selector(SelectorIntent::Prev);
    }

    /// Reload the config file and remount the current mode with new options.
    ///
    /// On failure the previous options stay in effect and the error is shown.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(mut config) => {
                self.overrides.apply(&mut config);
                self.options = config.pattern_options();
                self.config.set(config);
                self.last_error = None;
                self.remount();
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.last_error = Some(err.to_string());
                self.redraw.set(true);
            }
        }
    }

    /// Drop the current adapter (and its counter) and mount a fresh one.
    fn remount(&mut self) {
        let (adapter, view) = mount_with_listener(self.selector.mode, &self.options, &self.redraw);
        self.adapter = adapter;
        self.view = view;
        self.focused_control = 0;
        self.redraw.set(true);
    }

    fn clamp_focus(&mut self) {
        let count = self.view.button_count();
        if self.focused_control >= count {
            self.focused_control = count.saturating_sub(1);
        }
    }
}

fn mount_with_listener(
    mode: Mode,
    options: &PatternOptions,
    redraw: &Rc<Cell<bool>>,
) -> (Box<dyn Adapter>, ViewNode) {
    let mut adapter = mount(mode, options);
    let flag = Rc::clone(redraw);
    adapter.on_update(Rc::new(move || flag.set(true)));
    let view = adapter.render();
    (adapter, view)
}
