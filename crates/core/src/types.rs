//! Identifiers, the machine action set, and the per-frame joint sample.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::error::{GestureError, Result};
use crate::geometry::Vec3;
use crate::provider::HandTracking;

/// Unique identifier for a stored gesture template.
///
/// Template names are free text and may collide; the id is what
/// distinguishes two recordings of the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(Uuid);

impl TemplateId {
    /// Create a new random TemplateId using UUID v4.
    pub fn new() -> Self {
        TemplateId(Uuid::new_v4())
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of machine actions a gesture can trigger, in recording order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineAction {
    /// Raise the machine head
    Up,
    /// Lower the machine head
    Down,
    /// Press the workpiece
    Press,
}

impl MachineAction {
    /// All actions, in the order a recording session captures them.
    pub const ALL: [MachineAction; 3] =
        [MachineAction::Up, MachineAction::Down, MachineAction::Press];

    /// Canonical name, used as the template name when recording.
    pub fn name(&self) -> &'static str {
        match self {
            MachineAction::Up => "up",
            MachineAction::Down => "down",
            MachineAction::Press => "press",
        }
    }

    /// Parse from string (case-insensitive, legacy `action_*` spellings
    /// accepted).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "action_up" => Some(MachineAction::Up),
            "down" | "action_down" => Some(MachineAction::Down),
            "press" | "action_press" => Some(MachineAction::Press),
            _ => None,
        }
    }
}

impl std::fmt::Display for MachineAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hand skeletons commonly expose around twenty joints; samples up to this
/// size stay inline without a heap allocation.
const INLINE_JOINTS: usize = 24;

/// One frame's hand pose: joint positions in the hand-root local frame.
///
/// Positions preserve provider order, one entry per tracked joint. A sample
/// is a plain value, produced fresh every frame and copied freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSample {
    positions: SmallVec<[Vec3; INLINE_JOINTS]>,
}

impl JointSample {
    /// Build a sample from local-frame positions in provider order.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }

    /// Capture the provider's current pose in the hand-root local frame.
    ///
    /// Entry `i` is the root's inverse transform applied to joint `i`'s world
    /// position, preserving provider order.
    ///
    /// # Errors
    /// [`GestureError::ProviderNotReady`] if the provider has not signalled
    /// readiness or exposes zero joints.
    pub fn capture(provider: &dyn HandTracking) -> Result<Self> {
        if !provider.is_ready() {
            return Err(GestureError::ProviderNotReady);
        }
        let world = provider.joint_world_positions();
        if world.is_empty() {
            return Err(GestureError::ProviderNotReady);
        }
        let root = provider.root_transform();
        Ok(Self {
            positions: world.into_iter().map(|p| root.point_to_local(p)).collect(),
        })
    }

    /// Number of joints in the sample.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the sample holds no joints. Empty samples never match.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Joint positions in provider order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Quat, RootTransform};
    use std::f32::consts::FRAC_PI_2;

    struct FakeHand {
        ready: bool,
        joints: Vec<Vec3>,
        root: RootTransform,
    }

    impl HandTracking for FakeHand {
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

    #[test]
    fn action_names_and_order() {
        let names: Vec<_> = MachineAction::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["up", "down", "press"]);
    }

    #[test]
    fn action_parse_accepts_legacy_spellings() {
        assert_eq!(MachineAction::parse("up"), Some(MachineAction::Up));
        assert_eq!(MachineAction::parse("ACTION_DOWN"), Some(MachineAction::Down));
        assert_eq!(MachineAction::parse("press"), Some(MachineAction::Press));
        assert_eq!(MachineAction::parse("wave"), None);
    }

    #[test]
    fn template_ids_are_unique() {
        assert_ne!(TemplateId::new(), TemplateId::new());
    }

    #[test]
    fn capture_requires_ready_provider() {
        let hand = FakeHand {
            ready: false,
            joints: vec![Vec3::ZERO],
            root: RootTransform::IDENTITY,
        };
        let err = JointSample::capture(&hand).unwrap_err();
        assert!(err.is_provider_not_ready());
    }

    #[test]
    fn capture_requires_joints() {
        let hand = FakeHand {
            ready: true,
            joints: vec![],
            root: RootTransform::IDENTITY,
        };
        let err = JointSample::capture(&hand).unwrap_err();
        assert!(err.is_provider_not_ready());
    }

    #[test]
    fn capture_expresses_joints_in_root_frame() {
        // Root sits at (1, 0, 0), rotated a quarter turn about Z.
        let root = RootTransform::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2),
        );
        let hand = FakeHand {
            ready: true,
            joints: vec![Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            root,
        };
        let sample = JointSample::capture(&hand).unwrap();
        assert_eq!(sample.len(), 2);
        // (1,1,0) is one unit along the rotated x-axis from the root.
        assert!(sample.positions()[0].distance(Vec3::new(1.0, 0.0, 0.0)) < 1e-5);
        // The root itself maps to the local origin.
        assert!(sample.positions()[1].distance(Vec3::ZERO) < 1e-5);
    }

    #[test]
    fn capture_preserves_provider_order() {
        let joints = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        let hand = FakeHand {
            ready: true,
            joints: joints.clone(),
            root: RootTransform::IDENTITY,
        };
        let sample = JointSample::capture(&hand).unwrap();
        assert_eq!(sample.positions(), joints.as_slice());
    }
}
