//! Flattening of per-character 3D transforms for the 2D preview.
//!
//! The exported page lets the browser do real `perspective` projection. The
//! preview only has a 2D painter, so it approximates the same look: depth
//! becomes a scale factor, Y rotation a horizontal squash, and curvature a
//! vertical offset.

use titlecraft_core::CharacterTransform;

/// `perspective` of the title container, in px. Shared with the export.
pub const PERSPECTIVE_PX: f64 = 500.0;
/// Vertical travel of the float animation, in px (upward).
pub const FLOAT_AMPLITUDE_PX: f64 = 20.0;
/// Root font size used to resolve `rem` values.
pub const REM_PX: f64 = 16.0;

/// Narrowest horizontal squash, so edge-on glyphs stay visible.
const MIN_SQUASH: f64 = 0.05;
/// Closest a glyph may come to the viewer before scaling is capped.
const MIN_VIEW_DISTANCE_PX: f64 = 1.0;

/// 2D placement of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Uniform scale from depth.
    pub scale: f64,
    /// Horizontal scale from Y rotation, in `MIN_SQUASH..=1`.
    pub squash_x: f64,
    /// Vertical offset in px (already scaled).
    pub offset_y: f64,
}

/// Project a character transform through a `perspective` of `perspective_px`.
pub fn project(t: &CharacterTransform, perspective_px: f64) -> Projection {
    let distance = (perspective_px - t.depth_z_px).max(MIN_VIEW_DISTANCE_PX);
    let scale = perspective_px / distance;
    Projection {
        scale,
        squash_x: t.rotation_y_deg.to_radians().cos().abs().max(MIN_SQUASH),
        offset_y: t.curvature_y_px * scale,
    }
}

/// Vertical offset of the float animation at `elapsed_secs`.
///
/// Runs `0 → -FLOAT_AMPLITUDE_PX` over `period_secs` and back (CSS
/// `alternate`), eased with a smoothstep curve. A non-positive period
/// disables the motion.
pub fn float_offset(elapsed_secs: f64, period_secs: f64) -> f64 {
    if period_secs.is_nan() || period_secs <= 0.0 || !elapsed_secs.is_finite() {
        return 0.0;
    }
    let phase = (elapsed_secs / period_secs).rem_euclid(2.0);
    let p = if phase <= 1.0 { phase } else { 2.0 - phase };
    let eased = p * p * (3.0 - 2.0 * p);
    -FLOAT_AMPLITUDE_PX * eased
}

/// Convert a `rem` length to px.
pub fn rem_to_px(rem: f64) -> f64 {
    rem * REM_PX
}
