//! Core types for the gesturekit hand gesture toolkit
//!
//! This crate defines the fundamental types used throughout the system:
//! - [`Vec3`], [`Quat`], [`RootTransform`]: minimal 3D math for expressing
//!   joint positions in the hand-root local frame
//! - [`JointSample`]: one frame's worth of hand-joint positions
//! - [`MachineAction`]: the fixed set of machine actions a gesture can drive
//! - [`HandTracking`]: the seam to the live hand-tracking provider
//! - [`GestureError`]: the canonical error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geometry;
pub mod provider;
pub mod types;

pub use error::{GestureError, Result};
pub use geometry::{Quat, RootTransform, Vec3};
pub use provider::HandTracking;
pub use types::{JointSample, MachineAction, TemplateId};
