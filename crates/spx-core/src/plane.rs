use crate::Error;

/// Owned single-channel plane of 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Plane {
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let required = width.checked_mul(height).ok_or(Error::SizeMismatch {
            required: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != required {
            return Err(Error::SizeMismatch {
                required,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, value: u8) -> Self {
        let len = width.checked_mul(height).expect("plane size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_view(&self) -> PlaneView<'_> {
        PlaneView {
            width: self.width,
            height: self.height,
            row_stride: self.width,
            px_stride: 1,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> PlaneViewMut<'_> {
        PlaneViewMut {
            width: self.width,
            height: self.height,
            row_stride: self.width,
            px_stride: 1,
            data: &mut self.data,
        }
    }
}

/// Borrowed read-only grid of 8-bit samples.
///
/// `row_stride` is the distance, in elements, between adjacent row starts.
/// `px_stride` is the distance between horizontally adjacent samples of the
/// same channel: `1` for a planar buffer, the channel count for one channel
/// of an interleaved buffer (with the view base offset by the channel index).
#[derive(Debug, Clone, Copy)]
pub struct PlaneView<'a> {
    width: usize,
    height: usize,
    row_stride: usize,
    px_stride: usize,
    data: &'a [u8],
}

impl<'a> PlaneView<'a> {
    /// View over a planar buffer (`px_stride == 1`).
    pub fn from_slice(
        width: usize,
        height: usize,
        row_stride: usize,
        data: &'a [u8],
    ) -> Result<Self, Error> {
        Self::with_px_stride(width, height, row_stride, 1, data)
    }

    /// View over one channel of a `channels`-interleaved buffer.
    pub fn interleaved(
        width: usize,
        height: usize,
        row_stride: usize,
        channels: usize,
        channel: usize,
        data: &'a [u8],
    ) -> Result<Self, Error> {
        if channel >= channels {
            return Err(Error::InvalidChannel { channel, channels });
        }
        let data = data.get(channel..).ok_or(Error::SizeMismatch {
            required: channel,
            actual: data.len(),
        })?;
        Self::with_px_stride(width, height, row_stride, channels, data)
    }

    pub fn with_px_stride(
        width: usize,
        height: usize,
        row_stride: usize,
        px_stride: usize,
        data: &'a [u8],
    ) -> Result<Self, Error> {
        let min_len = check_layout(width, height, row_stride, px_stride, data.len())?;
        debug_assert!(data.len() >= min_len);

        Ok(Self {
            width,
            height,
            row_stride,
            px_stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn px_stride(&self) -> usize {
        self.px_stride
    }

    /// Samples of one row. Planar views only.
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert_eq!(self.px_stride, 1, "row access requires a planar view");
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.row_stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.row_stride + x * self.px_stride).copied()
    }

    /// Returns a sample without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> u8 {
        // SAFETY: Caller guarantees `x < width` and `y < height`. With view
        // invariants this implies the index is in bounds of `data`.
        unsafe { *self.data.get_unchecked(y * self.row_stride + x * self.px_stride) }
    }
}

/// Borrowed write-only grid of 8-bit samples. Layout semantics match
/// [`PlaneView`].
#[derive(Debug)]
pub struct PlaneViewMut<'a> {
    width: usize,
    height: usize,
    row_stride: usize,
    px_stride: usize,
    data: &'a mut [u8],
}

impl<'a> PlaneViewMut<'a> {
    pub fn from_slice_mut(
        width: usize,
        height: usize,
        row_stride: usize,
        data: &'a mut [u8],
    ) -> Result<Self, Error> {
        Self::with_px_stride_mut(width, height, row_stride, 1, data)
    }

    pub fn interleaved_mut(
        width: usize,
        height: usize,
        row_stride: usize,
        channels: usize,
        channel: usize,
        data: &'a mut [u8],
    ) -> Result<Self, Error> {
        if channel >= channels {
            return Err(Error::InvalidChannel { channel, channels });
        }
        let actual = data.len();
        let data = data.get_mut(channel..).ok_or(Error::SizeMismatch {
            required: channel,
            actual,
        })?;
        Self::with_px_stride_mut(width, height, row_stride, channels, data)
    }

    pub fn with_px_stride_mut(
        width: usize,
        height: usize,
        row_stride: usize,
        px_stride: usize,
        data: &'a mut [u8],
    ) -> Result<Self, Error> {
        let min_len = check_layout(width, height, row_stride, px_stride, data.len())?;
        debug_assert!(data.len() >= min_len);

        Ok(Self {
            width,
            height,
            row_stride,
            px_stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn px_stride(&self) -> usize {
        self.px_stride
    }

    pub fn as_view(&self) -> PlaneView<'_> {
        PlaneView {
            width: self.width,
            height: self.height,
            row_stride: self.row_stride,
            px_stride: self.px_stride,
            data: self.data,
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.row_stride + x * self.px_stride)
    }

    /// Returns a mutable sample reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize) -> &mut u8 {
        // SAFETY: Caller guarantees `x < width` and `y < height`. With view
        // invariants this implies the index is in bounds of `data`.
        unsafe {
            self.data
                .get_unchecked_mut(y * self.row_stride + x * self.px_stride)
        }
    }
}

/// Validates a strided layout against a buffer length and returns the
/// minimum length the layout requires.
fn check_layout(
    width: usize,
    height: usize,
    row_stride: usize,
    px_stride: usize,
    len: usize,
) -> Result<usize, Error> {
    if px_stride == 0 {
        return Err(Error::InvalidStride);
    }

    let row_extent = width.checked_mul(px_stride).ok_or(Error::InvalidStride)?;
    if row_stride < row_extent {
        return Err(Error::InvalidStride);
    }

    let min_len = min_required_len(width, height, row_stride, px_stride).ok_or(
        Error::SizeMismatch {
            required: usize::MAX,
            actual: len,
        },
    )?;

    if len < min_len {
        return Err(Error::SizeMismatch {
            required: min_len,
            actual: len,
        });
    }

    Ok(min_len)
}

fn min_required_len(
    width: usize,
    height: usize,
    row_stride: usize,
    px_stride: usize,
) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(row_stride)?;
    let last_row = (width - 1).checked_mul(px_stride)?.checked_add(1)?;
    base.checked_add(last_row)
}
