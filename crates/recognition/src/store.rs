//! Gesture template storage.
//!
//! ## Design
//!
//! GestureStore is an append-only, in-memory, ordered collection of
//! templates. It provides:
//! - Unconditional append (no validation, no name de-duplication)
//! - Insertion order preserved; on matching ties the earliest template wins
//! - Snapshot reads: the matcher iterates a cheap `Arc` clone of the list,
//!   so an append from another thread never tears an in-progress match
//!
//! Templates live for the process lifetime; nothing is pruned or replaced.
//! Re-recording an action appends a second template under the same name.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use gesturekit_core::{JointSample, TemplateId};

use crate::callback::CallbackSet;

/// A named reference pose with its recognition trigger.
///
/// Immutable once stored.
#[derive(Debug, Clone)]
pub struct GestureTemplate {
    id: TemplateId,
    name: String,
    sample: JointSample,
    on_recognized: CallbackSet,
}

impl GestureTemplate {
    /// Create a template. The id is assigned here.
    pub fn new(name: impl Into<String>, sample: JointSample, on_recognized: CallbackSet) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            sample,
            on_recognized,
        }
    }

    /// Unique id of this template.
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// Template name. Free text; duplicates are allowed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored reference pose.
    pub fn sample(&self) -> &JointSample {
        &self.sample
    }

    /// Callbacks invoked while this template is the best match.
    pub fn on_recognized(&self) -> &CallbackSet {
        &self.on_recognized
    }
}

/// Append-only ordered collection of gesture templates.
///
/// Thread safe: single-writer appends and snapshot reads keep the original
/// read-after-append visibility in a multi-threaded host, while the intended
/// single-threaded tick loop pays only an uncontended lock.
#[derive(Debug, Default)]
pub struct GestureStore {
    templates: RwLock<Vec<Arc<GestureTemplate>>>,
}

impl GestureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a template to the end of the sequence. Always succeeds.
    pub fn append(
        &self,
        name: impl Into<String>,
        sample: JointSample,
        on_recognized: CallbackSet,
    ) -> TemplateId {
        let template = GestureTemplate::new(name, sample, on_recognized);
        let id = template.id();
        debug!(name = template.name(), joints = template.sample().len(), %id, "template appended");
        self.templates.write().push(Arc::new(template));
        id
    }

    /// The current templates, in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<GestureTemplate>> {
        self.templates.read().clone()
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.read().is_empty()
    }
}
