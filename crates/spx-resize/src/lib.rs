//! Sub-pixel crop-resize of image frames.
//!
//! The crop rectangle is floating-point, in full-resolution source-pixel
//! units; destination pixels map onto it by normalizing `dx / (dst_w - 1)`
//! (and likewise for rows), so destination corners land on the rectangle's
//! corners. A 1-pixel destination axis samples the rectangle's origin edge.
//!
//! Format dispatch is table-driven: every supported format reduces to a list
//! of buffer layouts (resolution divisor + interleaved channel count), and
//! each channel of each buffer runs through the same single-channel plane
//! resizer via channel-strided views.
//!
//! Interpolation is bilinear with edge-replicate clamping. Nothing here is
//! gamma-aware; samples blend in their stored 8-bit code values.

mod error;
mod format;
mod frame;
mod resize;

pub use error::ResizeError;
pub use format::{PixelFormat, PlaneLayout};
pub use frame::{PlaneRef, PlaneRefMut, resize_cropped};
pub use resize::{resize_plane, resize_plane_into};
