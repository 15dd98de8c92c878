//! Seam to the live hand-tracking provider.
//!
//! The toolkit never talks to tracking hardware directly: it consumes an
//! ordered, fixed-length list of joint world positions and the hand-root
//! transform through this trait. Implementations must expose a readiness
//! signal; every capture is gated on it (tracking runtimes need time to
//! initialize the skeleton before positions are meaningful).

use crate::geometry::{RootTransform, Vec3};

/// A live source of hand-joint transforms.
///
/// The joint ordering is defined by the provider and must be stable for the
/// provider's lifetime: index `i` always refers to the same physical joint.
pub trait HandTracking {
    /// Whether the provider has finished initializing and positions are valid.
    fn is_ready(&self) -> bool;

    /// Number of tracked joints. Stable once `is_ready` returns true.
    fn joint_count(&self) -> usize;

    /// Current world-space position of every joint, in provider order.
    ///
    /// The returned length must equal [`joint_count`](Self::joint_count).
    fn joint_world_positions(&self) -> Vec<Vec3>;

    /// Current world-space transform of the hand root.
    fn root_transform(&self) -> RootTransform;
}
