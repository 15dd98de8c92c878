//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gesturekit::{HandTracking, RootTransform, Vec3};

/// A scriptable hand-tracking provider.
pub struct ScriptedHand {
    pub ready: bool,
    pub joints: Vec<Vec3>,
    pub root: RootTransform,
}

impl ScriptedHand {
    /// A ready hand with the given world-space joints and identity root.
    pub fn with_joints(joints: Vec<Vec3>) -> Self {
        Self {
            ready: true,
            joints,
            root: RootTransform::IDENTITY,
        }
    }

    /// An unready provider.
    pub fn unready() -> Self {
        Self {
            ready: false,
            joints: Vec::new(),
            root: RootTransform::IDENTITY,
        }
    }
}

impl HandTracking for ScriptedHand {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn joint_count(&self) -> usize {
        self.joints.len()
    }

    fn joint_world_positions(&self) -> Vec<Vec3> {
        self.joints.clone()
    }

    fn root_transform(&self) -> RootTransform {
        self.root
    }
}

/// A shared counter plus a handler that increments it.
pub fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let clone = Arc::clone(&count);
    (count, move || {
        clone.fetch_add(1, Ordering::SeqCst);
    })
}

/// Read a counter.
pub fn read(count: &Arc<AtomicUsize>) -> usize {
    count.load(Ordering::SeqCst)
}
