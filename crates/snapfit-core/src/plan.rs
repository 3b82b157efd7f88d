//! Target dimension planning.
//!
//! Pure arithmetic, no images involved. A max of 0 means "unconstrained".
//!
//! The correction is sequential: width first, then height against the
//! already-corrected height. Existing stored images were produced with this
//! order, so it must not be replaced by a simultaneous `min` of both scales.

/// Compute output dimensions for a source, preserving aspect ratio.
///
/// # Arguments
///
/// * `original_width`, `original_height` - Source dimensions (must be non-zero)
/// * `max_width`, `max_height` - Bounds in pixels, 0 for unconstrained
///
/// # Returns
///
/// `(width, height)` rounded to whole pixels, never larger than the source.
///
/// # Example
///
/// ```
/// use snapfit_core::plan_dimensions;
///
/// assert_eq!(plan_dimensions(1000, 500, 200, 0), (200, 100));
/// assert_eq!(plan_dimensions(500, 1000, 0, 200), (100, 200));
/// ```
pub fn plan_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if max_width == 0 && max_height == 0 {
        return (original_width, original_height);
    }

    let aspect_ratio = original_width as f64 / original_height as f64;
    let mut width = original_width as f64;
    let mut height = original_height as f64;

    if max_width > 0 && width > max_width as f64 {
        width = max_width as f64;
        height = width / aspect_ratio;
    }

    if max_height > 0 && height > max_height as f64 {
        height = max_height as f64;
        width = height * aspect_ratio;
    }

    // Extreme ratios can round an axis down to nothing
    (to_pixels(width), to_pixels(height))
}

fn to_pixels(value: f64) -> u32 {
    (value.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_returns_original() {
        assert_eq!(plan_dimensions(4032, 3024, 0, 0), (4032, 3024));
        assert_eq!(plan_dimensions(1, 1, 0, 0), (1, 1));
    }

    #[test]
    fn test_width_constraint_landscape() {
        assert_eq!(plan_dimensions(1000, 500, 200, 0), (200, 100));
    }

    #[test]
    fn test_height_constraint_portrait() {
        assert_eq!(plan_dimensions(500, 1000, 0, 200), (100, 200));
    }

    #[test]
    fn test_smaller_than_bounds_is_not_upscaled() {
        assert_eq!(plan_dimensions(300, 200, 800, 600), (300, 200));
        assert_eq!(plan_dimensions(300, 200, 800, 0), (300, 200));
        assert_eq!(plan_dimensions(300, 200, 0, 600), (300, 200));
    }

    #[test]
    fn test_portrait_needs_both_corrections() {
        // Width pass: 800x1600 -> 400x800, height pass: 800 > 500 -> 250x500
        assert_eq!(plan_dimensions(800, 1600, 400, 500), (250, 500));
    }

    #[test]
    fn test_height_pass_uses_corrected_height() {
        // Width pass alone already satisfies the height bound
        assert_eq!(plan_dimensions(2000, 1000, 1000, 600), (1000, 500));
    }

    #[test]
    fn test_rounds_to_nearest_pixel() {
        // 6000x4000 capped at 2560 wide -> 1706.67 high
        assert_eq!(plan_dimensions(6000, 4000, 2560, 0), (2560, 1707));
        // 4000x6000 capped at 2560 high -> 1706.67 wide
        assert_eq!(plan_dimensions(4000, 6000, 0, 2560), (1707, 2560));
    }

    #[test]
    fn test_rounds_half_up() {
        // 3x2 capped at 1 high -> width 1.5 rounds to 2
        assert_eq!(plan_dimensions(3, 2, 0, 1), (2, 1));
    }

    #[test]
    fn test_extreme_ratio_keeps_one_pixel() {
        assert_eq!(plan_dimensions(10_000, 1, 100, 0), (100, 1));
    }

    #[test]
    fn test_square_with_both_bounds() {
        assert_eq!(plan_dimensions(1000, 1000, 300, 200), (200, 200));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
