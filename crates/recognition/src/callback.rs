//! Registrable callback lists for gesture events.
//!
//! Each gesture template carries a set of "recognized" handlers, and the
//! recognizer carries a "not recognized" set. Handlers are zero-argument,
//! shared, and invoked in registration order.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A single registered handler.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// An ordered, shared set of zero-argument callbacks.
///
/// Clones are handles to the same underlying list: a handler registered
/// through any clone fires for all of them. Templates hold a clone of
/// their action's set, so subscribing after a gesture was recorded still
/// reaches the stored template.
#[derive(Clone, Default)]
pub struct CallbackSet {
    handlers: Arc<RwLock<Vec<Handler>>>,
}

impl CallbackSet {
    /// Create an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers fire in registration order.
    pub fn register(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.handlers.write().push(Arc::new(handler));
    }

    /// Register an already-shared handler.
    pub fn register_handler(&self, handler: Handler) {
        self.handlers.write().push(handler);
    }

    /// Invoke every handler, in registration order.
    ///
    /// The list is snapshotted first, so a handler that registers further
    /// handlers does not deadlock; additions fire from the next invoke.
    pub fn invoke(&self) {
        let handlers: Vec<Handler> = self.handlers.read().clone();
        for handler in &handlers {
            handler();
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl fmt::Debug for CallbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSet")
            .field("handlers", &self.len())
            .finish()
    }
}
