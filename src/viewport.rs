//! Display scaling against the fixed design resolution

use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH, DISPLAY_SCALE_PADDING};

/// CSS scale for the game container so the 800x400 design fits the window.
///
/// Returns `None` for degenerate window sizes (zero, negative, NaN).
pub fn display_scale(window_width: f32, window_height: f32) -> Option<f32> {
    if !(window_width.is_finite() && window_height.is_finite())
        || window_width <= 0.0
        || window_height <= 0.0
    {
        return None;
    }
    let scale = (window_width / DESIGN_WIDTH).min(window_height / DESIGN_HEIGHT);
    Some(scale * DISPLAY_SCALE_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_limited_by_narrow_side() {
        // Width-limited: 400/800 = 0.5, height allows 2.0
        let scale = display_scale(400.0, 800.0).unwrap();
        assert!((scale - 0.45).abs() < 1e-6);

        // Height-limited
        let scale = display_scale(1920.0, 400.0).unwrap();
        assert!((scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_window() {
        assert_eq!(display_scale(0.0, 400.0), None);
        assert_eq!(display_scale(f32::NAN, 400.0), None);
        assert_eq!(display_scale(800.0, -1.0), None);
    }
}
