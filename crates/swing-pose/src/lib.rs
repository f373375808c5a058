//! Pose provider contract and key-point extraction.
//!
//! Pose estimation itself is an external capability: implementations of
//! [`PoseProvider`] hand back named joint observations with confidence
//! scores, and the [`JointExtractor`] turns one frame's observations into a
//! normalized, orientation-corrected key-point set.

pub mod error;
pub mod extractor;
pub mod provider;

pub use error::{PoseError, PoseResult};
pub use extractor::{JointExtractor, CONFIDENCE_FLOOR};
pub use provider::{
    BodyJoint, BodyObservation, HandJoint, HandObservation, ImageOrientation, PoseProvider,
};
