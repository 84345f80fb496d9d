//! Per-instance component storage: hook slots, dirty tracking, redraw listeners.
//!
//! A [`Scope`] lives as long as the mounted component that owns it. Hook
//! state is only reachable through [`Hooks`], which borrows the scope for the
//! duration of a single render pass.

use std::any::{type_name, Any};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::callback::Redraw;

struct Shared {
    dirty: Cell<bool>,
    listeners: RefCell<Vec<Redraw>>,
}

pub struct Scope {
    name: &'static str,
    shared: Rc<Shared>,
    slots: Vec<Box<dyn Any>>,
    renders: u64,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        tracing::debug!(component = name, "mounted");
        Self {
            name,
            shared: Rc::new(Shared {
                dirty: Cell::new(true),
                listeners: RefCell::new(Vec::new()),
            }),
            slots: Vec::new(),
            renders: 0,
        }
    }

    /// Handle that marks this scope dirty and notifies redraw listeners.
    ///
    /// The handle holds a weak reference, so it turns into a no-op once the
    /// scope is dropped.
    pub fn schedule_update(&self) -> Redraw {
        let shared = Rc::downgrade(&self.shared);
        Rc::new(move || {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            shared.dirty.set(true);
            let listeners: Vec<Redraw> = shared.listeners.borrow().iter().cloned().collect();
            for listener in listeners {
                listener();
            }
        })
    }

    pub fn on_update(&self, redraw: Redraw) {
        self.shared.listeners.borrow_mut().push(redraw);
    }

    /// True until the first render and after every scheduled update.
    pub fn needs_render(&self) -> bool {
        self.shared.dirty.get()
    }

    /// Number of completed render passes.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Start a render pass.
    pub fn begin_render(&mut self) -> Hooks<'_> {
        self.shared.dirty.set(false);
        self.renders += 1;
        Hooks {
            scope: self,
            cursor: 0,
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        tracing::debug!(component = self.name, renders = self.renders, "unmounted");
    }
}

/// Render-pass access to a scope's hook slots.
pub struct Hooks<'a> {
    scope: &'a mut Scope,
    cursor: usize,
}

impl Hooks<'_> {
    /// Return the value stored in the next hook slot, creating it with `init`
    /// on the first render.
    ///
    /// `init` receives the scope's update handle. Hooks must be called in the
    /// same order on every render.
    ///
    /// # Panics
    ///
    /// Panics if the slot at this position holds a different type, which
    /// means hook order changed between renders.
    pub fn use_hook<T, F>(&mut self, init: F) -> T
    where
        T: Clone + 'static,
        F: FnOnce(Redraw) -> T,
    {
        let index = self.cursor;
        self.cursor += 1;

        if index == self.scope.slots.len() {
            let update = self.scope.schedule_update();
            self.scope.slots.push(Box::new(init(update)));
        }

        match self.scope.slots[index].downcast_ref::<T>() {
            Some(value) => value.clone(),
            None => panic!(
                "hook #{index} in `{}` is not a `{}`: hooks must run in the same order every render",
                self.scope.name,
                type_name::<T>()
            ),
        }
    }
}
