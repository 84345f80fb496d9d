//! Cheaply clonable event handlers with stable identity.

use std::fmt;
use std::rc::Rc;

/// A shared `Fn()` handle.
///
/// Cloning a `Callback` does not create a new handler: every clone points at
/// the same closure, so [`Callback::ptr_eq`] can be used to check that a
/// component received the same handler across renders.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn emit(&self) {
        (self.0)()
    }

    /// True when both handles share the same closure.
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

/// Listener invoked after a scope has been marked for re-render.
pub type Redraw = Rc<dyn Fn()>;
