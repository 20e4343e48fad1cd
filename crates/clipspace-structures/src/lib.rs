//! Geometry for clipspace.
//!
//! - [`create_cube`] and [`cube_edges`] build the axis-aligned cube fixture
//! - [`Wireframe`] pairs nodes with index-pair edges and projects them through
//!   a [`Camera`](clipspace_pipeline::Camera) into drawable segments

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cube;
pub mod wireframe;

pub use cube::{create_cube, cube_edges};
pub use wireframe::{ProjectedWireframe, Wireframe};
