//! Foundational primitives for sub-pixel crop-resampling.
//!
//! ## Plane Views and Stride
//! Planes use element stride (not byte stride). `row_stride` is the distance,
//! in elements, between adjacent row starts and may be greater than the row
//! extent to allow views over padded buffers. `px_stride` is the distance
//! between horizontally adjacent samples of the same channel, which lets one
//! channel of an interleaved buffer be treated as an ordinary plane.
//!
//! ## Sampling Coordinates
//! Sampling uses pixel-center coordinates where integer coordinates refer to
//! pixel centers. Bilinear sampling uses the standard floor-based 2x2
//! interpolation neighborhood.
//!
//! ## Edge Clamping
//! Out-of-bounds neighbor indices are edge-replicated: a coordinate far
//! outside the plane saturates to a boundary sample instead of erroring.

mod error;
mod plane;
mod rect;
mod sample;

pub use error::Error;
pub use plane::{Plane, PlaneView, PlaneViewMut};
pub use rect::CropRect;
pub use sample::{clamp_index, sample_bilinear_clamp};
