//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Height for a target width that preserves the source aspect ratio.
///
/// The ratio is computed in floating point and the product truncated toward
/// zero, so `100x33` scaled to width 50 gives `16` (16.5 truncated), not 17.
///
/// Returns `None` when either source dimension is zero.
///
/// ```
/// # use respimg::imaging::proportional_height;
/// assert_eq!(proportional_height((100, 33), 50), Some(16));
/// assert_eq!(proportional_height((1920, 1080), 640), Some(360));
/// ```
pub fn proportional_height(source: (u32, u32), target_width: u32) -> Option<u32> {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return None;
    }
    let aspect_ratio = src_h as f64 / src_w as f64;
    Some((target_width as f64 * aspect_ratio) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_rounding() {
        // 33/100 * 50 = 16.5
        assert_eq!(proportional_height((100, 33), 50), Some(16));
    }

    #[test]
    fn exact_landscape_ratio() {
        assert_eq!(proportional_height((1920, 1080), 640), Some(360));
        assert_eq!(proportional_height((2000, 1500), 1000), Some(750));
    }

    #[test]
    fn portrait_ratio() {
        // 3:4 portrait, width 300 → 400
        assert_eq!(proportional_height((600, 800), 300), Some(400));
    }

    #[test]
    fn upscaling_keeps_ratio() {
        assert_eq!(proportional_height((100, 50), 400), Some(200));
    }

    #[test]
    fn tiny_ratio_can_truncate_to_zero() {
        // 1/1000 * 500 = 0.5
        assert_eq!(proportional_height((1000, 1), 500), Some(0));
    }

    #[test]
    fn zero_width_target_gives_zero() {
        assert_eq!(proportional_height((100, 100), 0), Some(0));
    }

    #[test]
    fn degenerate_source_is_none() {
        assert_eq!(proportional_height((0, 100), 50), None);
        assert_eq!(proportional_height((100, 0), 50), None);
    }
}
