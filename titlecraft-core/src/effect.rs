//! Per-character 3D transform and fading-shadow computation.
//!
//! Everything here is a pure, total function of a [`TitleConfig`] and a
//! character position. Out-of-domain inputs (empty text, non-positive shadow
//! length) produce empty results rather than errors.

use crate::color::HexColor;
use crate::config::TitleConfig;

/// Shadow length covered by one discrete layer before clamping, in px.
pub const SHADOW_STEP_PX: f64 = 5.0;
/// Fewest layers emitted for any positive shadow length.
pub const SHADOW_MIN_STEPS: usize = 10;
/// Most layers emitted, however long the shadow.
pub const SHADOW_MAX_STEPS: usize = 20;
/// Blur radii of the two glow layers, in px.
pub const GLOW_RADII: [f64; 2] = [10.0, 20.0];

const NEAR_ALPHA: f64 = 0.5;
const ALPHA_FALLOFF: f64 = 0.8;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// 3D placement of one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransform {
    /// `rotateY` in degrees.
    pub rotation_y_deg: f64,
    /// `translateY` in px; negative moves up.
    pub curvature_y_px: f64,
    /// `translateZ` in px.
    pub depth_z_px: f64,
    /// Stacking order; highest at the centre of the text.
    pub z_index: i32,
}

/// Color of a shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerColor {
    /// A fixed color.
    Rgb(HexColor),
    /// Whatever foreground color the character is painted with
    /// (CSS `currentColor`). Used for glow in rainbow mode.
    CurrentColor,
}

/// Which part of the effect a shadow layer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowKind {
    /// Centred halo around the glyph.
    Glow,
    /// One step of the extruded shadow.
    Fade,
}

/// One discrete offset/blur/color/alpha sample of a shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub kind: ShadowKind,
    pub dx: f64,
    pub dy: f64,
    pub blur: f64,
    pub color: LayerColor,
    pub alpha: f64,
}

impl ShadowLayer {
    pub fn is_glow(&self) -> bool {
        self.kind == ShadowKind::Glow
    }
}

/// Everything the renderer needs to draw one character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterVisual {
    pub index: usize,
    pub ch: char,
    pub transform: CharacterTransform,
    /// Ordered nearest to farthest; glow layers first.
    pub shadow_layers: Vec<ShadowLayer>,
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

#[inline]
fn center_index(char_count: usize) -> f64 {
    (char_count as f64 - 1.0) / 2.0
}

/// Compute the 3D transform of character `index` in a text of `char_count`.
///
/// Progress runs from -1 at the first character to 1 at the last. Rotation
/// and depth grow linearly with it; curvature follows a parabola so the
/// ends bend the most. Returns `None` for empty text.
pub fn compute_character_transform(
    index: usize,
    char_count: usize,
    config: &TitleConfig,
) -> Option<CharacterTransform> {
    if char_count == 0 {
        return None;
    }
    let center = center_index(char_count);
    let max_offset = if char_count > 1 { center } else { 1.0 };
    let offset = index as f64 - center;
    let progress = offset / max_offset;

    Some(CharacterTransform {
        rotation_y_deg: progress * config.perspective_rotate,
        curvature_y_px: -config.perspective_arc * progress * progress,
        depth_z_px: progress.abs() * config.depth_intensity,
        z_index: (char_count as f64 - offset.abs()).round() as i32,
    })
}

// ---------------------------------------------------------------------------
// Shadow
// ---------------------------------------------------------------------------

/// Shadow direction, in degrees, for character `index`.
///
/// Progress here is normalised by the full width (roughly -0.5..0.5), not the
/// half width the transform uses, so the angle only sweeps the middle half of
/// `start_angle..end_angle`.
pub fn shadow_angle(index: usize, char_count: usize, config: &TitleConfig) -> f64 {
    let progress = if char_count > 1 {
        (index as f64 - center_index(char_count)) / (char_count as f64 - 1.0)
    } else {
        0.0
    };
    config.start_angle + progress * (config.end_angle - config.start_angle)
}

/// Number of layers used to approximate a shadow of `length` px.
pub fn shadow_steps(length: f64) -> usize {
    if length.is_nan() || length <= 0.0 {
        return 0;
    }
    let wanted = (length / SHADOW_STEP_PX).ceil();
    (wanted.min(SHADOW_MAX_STEPS as f64) as usize).max(SHADOW_MIN_STEPS)
}

/// Build the ordered shadow layers for character `index`.
///
/// Glow (when enabled) contributes two centred layers. A positive shadow
/// length contributes [`shadow_steps`] layers marching away along the
/// character's shadow angle, each fainter and blurrier than the last.
pub fn compute_character_shadow(
    index: usize,
    char_count: usize,
    config: &TitleConfig,
) -> Vec<ShadowLayer> {
    let steps = shadow_steps(config.shadow_length);
    let mut layers = Vec::with_capacity(steps + GLOW_RADII.len());

    if config.glow_effect {
        let color = if config.rainbow_mode {
            LayerColor::CurrentColor
        } else {
            LayerColor::Rgb(config.text_color)
        };
        layers.extend(GLOW_RADII.iter().map(|&blur| ShadowLayer {
            kind: ShadowKind::Glow,
            dx: 0.0,
            dy: 0.0,
            blur,
            color,
            alpha: 1.0,
        }));
    }

    if steps > 0 {
        let length = config.shadow_length;
        let (sin, cos) = shadow_angle(index, char_count, config).to_radians().sin_cos();
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let dist = t * length;
            layers.push(ShadowLayer {
                kind: ShadowKind::Fade,
                dx: dist * cos,
                dy: dist * sin,
                blur: t * config.shadow_blur,
                color: LayerColor::Rgb(config.shadow_color),
                alpha: NEAR_ALPHA * (1.0 - t * ALPHA_FALLOFF),
            });
        }
    }

    layers
}

/// Compute the visual of every character in `config.text`, in order.
pub fn compute_visuals(config: &TitleConfig) -> Vec<CharacterVisual> {
    let char_count = config.char_count();
    config
        .text
        .chars()
        .enumerate()
        .filter_map(|(index, ch)| {
            let transform = compute_character_transform(index, char_count, config)?;
            Some(CharacterVisual {
                index,
                ch,
                transform,
                shadow_layers: compute_character_shadow(index, char_count, config),
            })
        })
        .collect()
}
