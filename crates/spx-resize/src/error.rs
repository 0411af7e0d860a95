use core::fmt;

use crate::format::PixelFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// A source or destination dimension is zero.
    InvalidDimensions {
        src_w: usize,
        src_h: usize,
        dst_w: usize,
        dst_h: usize,
    },
    /// The format tag has no resize support.
    UnsupportedFormat(PixelFormat),
    /// Fewer plane descriptors were supplied than the format requires.
    MissingPlane { plane: usize },
    /// A supplied buffer or stride cannot hold its plane.
    BadPlane {
        plane: usize,
        source: spx_core::Error,
    },
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                src_w,
                src_h,
                dst_w,
                dst_h,
            } => write!(
                f,
                "invalid dimensions: source {src_w}x{src_h}, destination {dst_w}x{dst_h}"
            ),
            Self::UnsupportedFormat(format) => write!(f, "unsupported format: {format}"),
            Self::MissingPlane { plane } => write!(f, "missing plane {plane}"),
            Self::BadPlane { plane, source } => write!(f, "plane {plane}: {source}"),
        }
    }
}

impl std::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadPlane { source, .. } => Some(source),
            _ => None,
        }
    }
}
