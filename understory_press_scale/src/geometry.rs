// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of an absolute push inset into a scale factor.

use kurbo::Size;

/// Returns the scale that pulls both edges of the element's dominant axis
/// inward by `size` device-independent units.
///
/// - `measured` is the element's measured size in pixels.
/// - `to_pixels` converts device-independent units to pixels (density scaling).
/// - A non-positive `size` returns `baseline_scale` unchanged.
/// - An inset larger than the dominant dimension, or an element with no
///   extent, returns `1.0`.
///
/// The dominant axis is the width when the element is wider than tall, and
/// the height otherwise.
///
/// ```
/// use kurbo::Size;
/// use understory_press_scale::scale_for_absolute_size;
///
/// // 10px inset on a 100px wide element: (100 - 2 * 10) / 100.
/// let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 10.0, 1.0, |dp| dp);
/// assert!((scale - 0.8).abs() < 1e-9);
/// ```
#[must_use]
pub fn scale_for_absolute_size(
    measured: Size,
    size: f64,
    baseline_scale: f64,
    to_pixels: impl FnOnce(f64) -> f64,
) -> f64 {
    if size.is_nan() || size <= 0.0 {
        return baseline_scale;
    }
    let inset = to_pixels(size);
    let dominant = if measured.width > measured.height {
        measured.width
    } else {
        measured.height
    };
    if dominant <= 0.0 || inset > dominant {
        return 1.0;
    }
    (dominant - 2.0 * inset) / dominant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(px: f64) -> f64 {
        px
    }

    #[test]
    fn zero_size_keeps_baseline() {
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 0.0, 0.7, identity);
        assert_eq!(scale, 0.7);
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), -4.0, 1.2, identity);
        assert_eq!(scale, 1.2);
    }

    #[test]
    fn oversized_inset_is_fully_expanded() {
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 200.0, 1.0, identity);
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn wide_element_uses_width() {
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 10.0, 1.0, identity);
        assert!((scale - 0.8).abs() < 1e-9, "got {scale}");
    }

    #[test]
    fn tall_and_square_elements_use_height() {
        let tall = scale_for_absolute_size(Size::new(50.0, 200.0), 10.0, 1.0, identity);
        assert!((tall - 0.9).abs() < 1e-9, "got {tall}");
        let square = scale_for_absolute_size(Size::new(80.0, 80.0), 8.0, 1.0, identity);
        assert!((square - 0.8).abs() < 1e-9, "got {square}");
    }

    #[test]
    fn density_conversion_is_applied() {
        // 5dp at 2x density is a 10px inset.
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 5.0, 1.0, |dp| dp * 2.0);
        assert!((scale - 0.8).abs() < 1e-9, "got {scale}");
    }

    #[test]
    fn unmeasured_element_is_fully_expanded() {
        let scale = scale_for_absolute_size(Size::ZERO, 10.0, 1.0, identity);
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn inset_between_half_and_full_goes_negative() {
        // Not clamped.
        let scale = scale_for_absolute_size(Size::new(100.0, 50.0), 75.0, 1.0, identity);
        assert!((scale + 0.5).abs() < 1e-9, "got {scale}");
    }
}
