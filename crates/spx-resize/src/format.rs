use core::fmt;

/// Layout of one buffer slot of a pixel format.
///
/// `subsample` divides the nominal frame dimensions and crop rectangle for
/// this buffer (1 for full resolution, 2 for half-resolution chroma).
/// `channels` is the interleaved channel count within the buffer (1 for
/// planar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    pub subsample: usize,
    pub channels: usize,
}

const FULL: PlaneLayout = PlaneLayout {
    subsample: 1,
    channels: 1,
};

const CHROMA_HALF: PlaneLayout = PlaneLayout {
    subsample: 2,
    channels: 1,
};

/// Known pixel format tags.
///
/// The tag space is larger than what the resizer handles; tags without a
/// [`PixelFormat::layout`] are rejected at dispatch with an
/// unsupported-format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Planar YUV, chroma at half resolution.
    Yuv420,
    /// Full-range variant of [`PixelFormat::Yuv420`]; identical layout.
    Yuvj420,
    /// Planar YUV, all planes at full resolution.
    Yuv444,
    /// Planar GBR, all planes at full resolution.
    Gbrp,
    /// Packed 3-channel RGB, one interleaved buffer.
    Rgb24,
    /// Packed 4-channel RGBA, one interleaved buffer.
    Rgba,
    /// Single-channel grayscale.
    Gray8,
    /// Semi-planar YUV (interleaved chroma). Not resizable here.
    Nv12,
    /// Planar YUV with horizontally-subsampled chroma. Not resizable here.
    Yuv422,
}

impl PixelFormat {
    /// Buffer layout table, or `None` when the tag is not resizable.
    pub fn layout(self) -> Option<&'static [PlaneLayout]> {
        match self {
            Self::Yuv420 | Self::Yuvj420 => Some(&[FULL, CHROMA_HALF, CHROMA_HALF]),
            Self::Yuv444 | Self::Gbrp => Some(&[FULL, FULL, FULL]),
            Self::Rgb24 => Some(&[PlaneLayout {
                subsample: 1,
                channels: 3,
            }]),
            Self::Rgba => Some(&[PlaneLayout {
                subsample: 1,
                channels: 4,
            }]),
            Self::Gray8 => Some(&[FULL]),
            Self::Nv12 | Self::Yuv422 => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self.layout().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Yuv420 => "yuv420p",
            Self::Yuvj420 => "yuvj420p",
            Self::Yuv444 => "yuv444p",
            Self::Gbrp => "gbrp",
            Self::Rgb24 => "rgb24",
            Self::Rgba => "rgba",
            Self::Gray8 => "gray8",
            Self::Nv12 => "nv12",
            Self::Yuv422 => "yuv422p",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
