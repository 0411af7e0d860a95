use spx_core::{CropRect, Plane, PlaneView, PlaneViewMut, sample_bilinear_clamp};

/// Fills every destination pixel by sampling the crop rectangle.
///
/// Destination pixel `(dx, dy)` maps to unit coordinates
/// `u = dx / (dst_w - 1)`, `v = dy / (dst_h - 1)`, then to source coordinates
/// `crop.x + u * crop.w`, `crop.y + v * crop.h`. A destination axis of one
/// pixel pins `u` or `v` to zero, so it samples the crop origin edge rather
/// than the rectangle center. Sampled values are saturated to `[0, 255]` and
/// truncated to `u8`.
///
/// An empty source or destination plane is a no-op.
pub fn resize_plane_into(src: &PlaneView<'_>, crop: CropRect, dst: &mut PlaneViewMut<'_>) {
    let dst_w = dst.width();
    let dst_h = dst.height();
    if src.width() == 0 || src.height() == 0 || dst_w == 0 || dst_h == 0 {
        return;
    }

    for dy in 0..dst_h {
        let v = if dst_h > 1 {
            dy as f32 / (dst_h - 1) as f32
        } else {
            0.0
        };
        let src_y = crop.y + v * crop.h;

        for dx in 0..dst_w {
            let u = if dst_w > 1 {
                dx as f32 / (dst_w - 1) as f32
            } else {
                0.0
            };
            let src_x = crop.x + u * crop.w;

            let val = sample_bilinear_clamp(src, src_x, src_y);

            // SAFETY: `dx < dst_w` and `dy < dst_h` by loop bounds.
            unsafe {
                *dst.get_unchecked_mut(dx, dy) = val.clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Owned-output convenience over [`resize_plane_into`].
pub fn resize_plane(src: &PlaneView<'_>, crop: CropRect, dst_w: usize, dst_h: usize) -> Plane {
    let mut dst = Plane::new_fill(dst_w, dst_h, 0);
    resize_plane_into(src, crop, &mut dst.as_view_mut());
    dst
}

#[cfg(test)]
mod tests {
    use spx_core::{CropRect, Plane};

    use crate::resize::resize_plane;

    fn gradient_plane(width: usize, height: usize) -> Plane {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push((10 * y + x) as u8);
            }
        }
        Plane::from_vec(width, height, data).expect("valid plane")
    }

    #[test]
    fn identity_crop_same_size_is_exact() {
        // 5x3: u steps of 1/4 and v steps of 1/2 are exact in f32, so every
        // destination pixel lands on an integer source coordinate.
        let src = gradient_plane(5, 3);
        let dst = resize_plane(&src.as_view(), CropRect::full_frame(5, 3), 5, 3);
        assert_eq!(dst.data(), src.data());
    }

    #[test]
    fn identity_crop_corners_are_exact() {
        let src = gradient_plane(7, 6);
        let dst = resize_plane(&src.as_view(), CropRect::full_frame(7, 6), 7, 6);

        for &(x, y) in &[(0usize, 0usize), (6, 0), (0, 5), (6, 5)] {
            assert_eq!(dst.as_view().get(x, y), src.as_view().get(x, y));
        }

        // Interior pixels may round through the float path.
        for y in 0..6 {
            for x in 0..7 {
                let got = dst.as_view().get(x, y).expect("in bounds") as i32;
                let want = src.as_view().get(x, y).expect("in bounds") as i32;
                assert!((got - want).abs() <= 1, "({x}, {y}): {got} vs {want}");
            }
        }
    }

    #[test]
    fn single_pixel_destination_samples_crop_origin() {
        let src = gradient_plane(8, 8);
        let crop = CropRect::new(2.0, 3.0, 4.0, 4.0);

        // 1-wide destination: every row samples x = crop.x, not the center.
        let dst = resize_plane(&src.as_view(), crop, 1, 3);
        assert_eq!(dst.as_view().get(0, 0), Some(32));
        assert_eq!(dst.as_view().get(0, 1), Some(52));
        assert_eq!(dst.as_view().get(0, 2), Some(72));

        // 1-tall destination: every column samples y = crop.y.
        let dst = resize_plane(&src.as_view(), crop, 3, 1);
        assert_eq!(dst.as_view().get(0, 0), Some(32));
        assert_eq!(dst.as_view().get(1, 0), Some(34));
        assert_eq!(dst.as_view().get(2, 0), Some(36));

        // 1x1 destination samples the crop origin corner.
        let dst = resize_plane(&src.as_view(), crop, 1, 1);
        assert_eq!(dst.as_view().get(0, 0), Some(32));
    }

    #[test]
    fn crop_far_outside_plane_replicates_edges() {
        let src = gradient_plane(4, 4);
        let dst = resize_plane(&src.as_view(), CropRect::new(-1000.0, -1000.0, 1.0, 1.0), 2, 2);
        // Every sample saturates to the top-left corner pixel.
        assert_eq!(dst.data(), &[0, 0, 0, 0]);

        let dst = resize_plane(&src.as_view(), CropRect::new(1000.0, 1000.0, 5.0, 5.0), 2, 2);
        assert_eq!(dst.data(), &[33, 33, 33, 33]);
    }

    #[test]
    fn output_stays_in_sample_range_for_extremes() {
        let full = Plane::new_fill(3, 3, 255);
        let dst = resize_plane(&full.as_view(), CropRect::new(-5.0, -5.0, 20.0, 20.0), 4, 4);
        assert!(dst.data().iter().all(|&v| v == 255));

        let empty = Plane::new_fill(3, 3, 0);
        let dst = resize_plane(&empty.as_view(), CropRect::new(-5.0, -5.0, 20.0, 20.0), 4, 4);
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_source_leaves_destination_untouched() {
        let src = Plane::new_fill(0, 0, 0);
        let mut dst = Plane::new_fill(2, 2, 7);
        super::resize_plane_into(
            &src.as_view(),
            CropRect::new(0.0, 0.0, 1.0, 1.0),
            &mut dst.as_view_mut(),
        );
        assert_eq!(dst.data(), &[7, 7, 7, 7]);
    }

    #[test]
    fn upscale_interpolates_between_neighbors() {
        let src = Plane::from_vec(2, 1, vec![0, 200]).expect("valid plane");
        let dst = resize_plane(&src.as_view(), CropRect::new(0.0, 0.0, 1.0, 0.0), 5, 1);
        assert_eq!(dst.data(), &[0, 50, 100, 150, 200]);
    }
}
