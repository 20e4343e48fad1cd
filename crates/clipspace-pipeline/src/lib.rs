//! Vertex-stage transform pipeline for clipspace.
//!
//! Three pure building blocks compose into one pipeline:
//! - [`build_perspective`] produces the perspective projection matrix
//! - [`build_view`] produces the look-at view matrix through a [`CameraFrame`]
//! - [`transform`] carries object-space points into clip space and NDC
//!
//! [`Camera`] bundles all camera parameters and drives the three together.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Matrix entries are conventionally named after their row/column (m22, m23)
#![allow(clippy::similar_names)]

pub mod camera;
pub mod projection;
pub mod transform;
pub mod view;

pub use camera::Camera;
pub use projection::{build_perspective, focal_length, ndc_depth};
pub use transform::{
    transform, transform_point, transform_with, ClipPoint, NdcPoint, TransformedBatch,
};
pub use view::{build_inverse_view, build_view, CameraFrame};
