//! Core types for clipspace.
//!
//! This crate provides the value types shared by the camera transform pipeline:
//! - [`Vec2`], [`Vec3`], [`Vec4`] and [`Mat4`], fixed-size `f64` types from glam
//! - [`to_homogeneous`] / [`from_homogeneous`] for moving between 3D points and
//!   homogeneous coordinates
//! - the [`ClipspaceError`] taxonomy and [`Result`] alias
//! - [`Tolerances`] used to detect degenerate camera bases and perspective divides

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod homogeneous;
pub mod options;

pub use error::{BasisDefect, ClipspaceError, Result};
pub use homogeneous::{from_homogeneous, to_homogeneous};
pub use options::Tolerances;

// The pipeline works in double precision throughout.
pub use glam::{DMat4 as Mat4, DVec2 as Vec2, DVec3 as Vec3, DVec4 as Vec4};
