//! clipspace: a minimal 3D-to-2D camera transform pipeline.
//!
//! Given a camera position/orientation and a perspective configuration,
//! clipspace maps object-space points through view space and clip space into
//! normalized device coordinates (NDC), including the divide by `w`.
//!
//! # Quick Start
//!
//! ```
//! use clipspace::*;
//!
//! fn main() -> Result<()> {
//!     let view = build_view(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), Vec3::Y)?;
//!     let projection = build_perspective(60.0, 1.0, 0.5, 50.0)?;
//!
//!     let cube = create_cube(Vec3::new(0.0, 0.0, -5.0), 2.0);
//!     let (clip, ndc) = transform(&view, &projection, &cube).into_parts();
//!
//!     assert_eq!(clip.len(), 8);
//!     assert!(ndc.iter().all(NdcPoint::in_view_volume));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `clipspace-core` - vector/matrix types, homogeneous helpers, errors
//! - `clipspace-pipeline` - [`build_perspective`], [`build_view`], [`transform`], [`Camera`]
//! - `clipspace-structures` - the cube fixture and [`Wireframe`]
//! - this crate - re-exports, [`SceneConfig`] loading and the [`scenarios`]
//!
//! Points on the camera plane (`w == 0`) are never divided. They come back as
//! [`NdcPoint::OnCameraPlane`] while every other point in the batch is
//! transformed normally.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod scenarios;

// Re-export core types
pub use clipspace_core::{
    from_homogeneous, to_homogeneous, BasisDefect, ClipspaceError, Mat4, Result, Tolerances,
    Vec2, Vec3, Vec4,
};

// Re-export pipeline types
pub use clipspace_pipeline::{
    build_inverse_view, build_perspective, build_view, focal_length, ndc_depth, transform,
    transform_point, transform_with, Camera, CameraFrame, ClipPoint, NdcPoint, TransformedBatch,
};

// Re-export structures
pub use clipspace_structures::{create_cube, cube_edges, ProjectedWireframe, Wireframe};

pub use config::{CubeConfig, SceneConfig};

/// Initializes the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("clipspace logging initialized");
    }
}
