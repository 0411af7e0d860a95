//! Umbrella crate for the `subpix` workspace.
//!
//! Re-exports the plane/sampling primitives from `spx-core` and the
//! crop-resize entry points from `spx-resize`.

pub use spx_core::*;
pub use spx_resize::*;
