use crate::plane::PlaneView;

/// Maps an index onto `[0, len)` by edge replication.
///
/// Coordinates arbitrarily far outside the plane saturate to the nearest
/// boundary index rather than erroring.
pub fn clamp_index(i: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot clamp into an empty axis");
    if i < 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

/// Bilinear interpolation at `(x, y)` with edge-replicate clamping.
///
/// The fractional weights come from the unclamped floor of the coordinate;
/// the four neighbor indices are clamped independently into the plane. The
/// result is the raw blend, not yet saturated to the output sample range.
pub fn sample_bilinear_clamp(plane: &PlaneView<'_>, x: f32, y: f32) -> f32 {
    debug_assert!(
        plane.width() > 0 && plane.height() > 0,
        "cannot sample an empty plane"
    );

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;

    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let x0c = clamp_index(x0, plane.width());
    let x1c = clamp_index(x0 + 1, plane.width());
    let y0c = clamp_index(y0, plane.height());
    let y1c = clamp_index(y0 + 1, plane.height());

    // SAFETY: `clamp_index` returns indices in `[0, len)` for non-empty axes.
    let (p00, p10, p01, p11) = unsafe {
        (
            plane.get_unchecked(x0c, y0c) as f32,
            plane.get_unchecked(x1c, y0c) as f32,
            plane.get_unchecked(x0c, y1c) as f32,
            plane.get_unchecked(x1c, y1c) as f32,
        )
    };

    let top = p00 * (1.0 - fx) + p10 * fx;
    let bottom = p01 * (1.0 - fx) + p11 * fx;
    top * (1.0 - fy) + bottom * fy
}

#[cfg(test)]
mod tests {
    use crate::plane::{Plane, PlaneView};
    use crate::sample::{clamp_index, sample_bilinear_clamp};

    #[test]
    fn clamp_mapping_handles_negative_and_overflow() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(-1, 5), 0);
        assert_eq!(clamp_index(0, 5), 0);
        assert_eq!(clamp_index(4, 5), 4);
        assert_eq!(clamp_index(5, 5), 4);
        assert_eq!(clamp_index(99, 5), 4);
    }

    #[test]
    fn bilinear_center_of_2x2() {
        let plane = Plane::from_vec(2, 2, vec![0, 10, 20, 30]).expect("valid plane");
        let center = sample_bilinear_clamp(&plane.as_view(), 0.5, 0.5);
        assert!((center - 15.0).abs() < 1e-6);
    }

    #[test]
    fn far_off_plane_coordinates_return_edge_values() {
        let plane = Plane::from_vec(
            3,
            3,
            vec![
                0, 1, 2, //
                10, 11, 12, //
                20, 21, 22, //
            ],
        )
        .expect("valid plane");
        let view = plane.as_view();

        assert_eq!(sample_bilinear_clamp(&view, -1000.0, -1000.0), 0.0);
        assert_eq!(sample_bilinear_clamp(&view, 1000.0, -1000.0), 2.0);
        assert_eq!(sample_bilinear_clamp(&view, -1000.0, 1000.0), 20.0);
        assert_eq!(sample_bilinear_clamp(&view, 1000.0, 1000.0), 22.0);
        assert_eq!(sample_bilinear_clamp(&view, 1000.0, 1.0), 12.0);
        assert_eq!(sample_bilinear_clamp(&view, 1.0, -1000.0), 1.0);
    }

    #[test]
    fn fractional_weights_blend_along_one_axis() {
        let plane = Plane::from_vec(4, 1, vec![0, 100, 200, 40]).expect("valid plane");
        let view = plane.as_view();

        let v = sample_bilinear_clamp(&view, 1.25, 0.0);
        assert!((v - 125.0).abs() < 1e-4);
    }

    #[test]
    fn interleaved_channel_view_samples_like_planar() {
        // Same channel data expressed planar and as channel 2 of RGB triplets.
        let planar = Plane::from_vec(2, 2, vec![5, 15, 25, 35]).expect("valid plane");
        let packed = vec![
            0u8, 0, 5, 0, 0, 15, //
            0, 0, 25, 0, 0, 35, //
        ];
        let strided = PlaneView::interleaved(2, 2, 6, 3, 2, &packed).expect("valid view");

        for &(x, y) in &[(0.5f32, 0.5f32), (0.0, 0.75), (1.25, -0.5), (0.9, 0.1)] {
            let a = sample_bilinear_clamp(&planar.as_view(), x, y);
            let b = sample_bilinear_clamp(&strided, x, y);
            assert!((a - b).abs() < 1e-6, "mismatch at ({x}, {y}): {a} vs {b}");
        }
    }
}
