use spx_core::{CropRect, Error as PlaneError, PlaneView, PlaneViewMut};

use crate::error::ResizeError;
use crate::format::{PixelFormat, PlaneLayout};
use crate::resize::resize_plane_into;

/// Read-only plane descriptor: sample buffer plus row stride in elements.
#[derive(Debug, Clone, Copy)]
pub struct PlaneRef<'a> {
    pub data: &'a [u8],
    pub stride: usize,
}

/// Writable plane descriptor.
#[derive(Debug)]
pub struct PlaneRefMut<'a> {
    pub data: &'a mut [u8],
    pub stride: usize,
}

/// Resamples a crop of a source frame into a destination frame.
///
/// `crop` is expressed in full-resolution source-pixel units; subsampled
/// planes see it divided by their resolution divisor, and their frame
/// dimensions divided the same way by integer division; the caller supplies
/// dimensions consistent with the format's subsampling. Interleaved
/// buffers are resized one channel at a time through a channel-strided view
/// of the same plane resizer.
///
/// All dimensions, the format tag, and every buffer layout are validated
/// before any pixel is written; a failed call leaves the destination frame
/// byte-for-byte untouched.
pub fn resize_cropped(
    src: &[PlaneRef<'_>],
    src_width: usize,
    src_height: usize,
    crop: CropRect,
    dst: &mut [PlaneRefMut<'_>],
    dst_width: usize,
    dst_height: usize,
    format: PixelFormat,
) -> Result<(), ResizeError> {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return Err(ResizeError::InvalidDimensions {
            src_w: src_width,
            src_h: src_height,
            dst_w: dst_width,
            dst_h: dst_height,
        });
    }

    let layout = format
        .layout()
        .ok_or(ResizeError::UnsupportedFormat(format))?;

    for (plane, pl) in layout.iter().enumerate() {
        let s = src
            .get(plane)
            .ok_or(ResizeError::MissingPlane { plane })?;
        let (sw, sh) = plane_dims(src_width, src_height, pl.subsample);
        check_plane(s.data, s.stride, sw, sh, pl)
            .map_err(|source| ResizeError::BadPlane { plane, source })?;

        let d = dst
            .get(plane)
            .ok_or(ResizeError::MissingPlane { plane })?;
        let (dw, dh) = plane_dims(dst_width, dst_height, pl.subsample);
        check_plane(d.data, d.stride, dw, dh, pl)
            .map_err(|source| ResizeError::BadPlane { plane, source })?;
    }

    for (plane, pl) in layout.iter().enumerate() {
        let (sw, sh) = plane_dims(src_width, src_height, pl.subsample);
        let (dw, dh) = plane_dims(dst_width, dst_height, pl.subsample);
        let plane_crop = crop.scaled_down(pl.subsample);

        let s = &src[plane];
        let d = &mut dst[plane];

        for channel in 0..pl.channels {
            let src_view =
                PlaneView::interleaved(sw, sh, s.stride, pl.channels, channel, s.data)
                    .map_err(|source| ResizeError::BadPlane { plane, source })?;
            let mut dst_view = PlaneViewMut::interleaved_mut(
                dw,
                dh,
                d.stride,
                pl.channels,
                channel,
                &mut *d.data,
            )
            .map_err(|source| ResizeError::BadPlane { plane, source })?;

            resize_plane_into(&src_view, plane_crop, &mut dst_view);
        }
    }

    Ok(())
}

fn plane_dims(width: usize, height: usize, subsample: usize) -> (usize, usize) {
    (width / subsample, height / subsample)
}

/// Validates that a buffer can hold every channel of a plane layout.
///
/// The last channel has the largest base offset, so checking it covers the
/// rest.
fn check_plane(
    data: &[u8],
    stride: usize,
    width: usize,
    height: usize,
    pl: &PlaneLayout,
) -> Result<(), PlaneError> {
    PlaneView::interleaved(width, height, stride, pl.channels, pl.channels - 1, data)
        .map(|_| ())
}
