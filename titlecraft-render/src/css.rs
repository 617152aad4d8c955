//! CSS value formatting for character transforms and shadows.

use titlecraft_core::{CharacterTransform, LayerColor, ShadowKind, ShadowLayer};

/// Format a number the way a CSS author would write it: shortest exact form,
/// no trailing `.0`, and never `-0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    format!("{value}")
}

/// `rotateY(..deg) translateY(..px) translateZ(..px)`.
pub fn format_transform(t: &CharacterTransform) -> String {
    format!(
        "rotateY({}deg) translateY({}px) translateZ({}px)",
        css_number(t.rotation_y_deg),
        css_number(t.curvature_y_px),
        css_number(t.depth_z_px),
    )
}

fn format_layer_color(color: LayerColor, alpha: f64) -> String {
    match color {
        LayerColor::CurrentColor => "currentColor".to_string(),
        LayerColor::Rgb(c) if alpha >= 1.0 => c.to_string(),
        LayerColor::Rgb(c) => c.to_css_rgba(alpha),
    }
}

/// One `text-shadow` entry.
///
/// Glow layers keep their integer radii (`0 0 10px #FFFFFF`); fading layers
/// use two decimals for offsets and blur and three for alpha.
pub fn format_shadow_layer(layer: &ShadowLayer) -> String {
    let color = format_layer_color(layer.color, layer.alpha);
    match layer.kind {
        ShadowKind::Glow => format!("0 0 {}px {color}", css_number(layer.blur)),
        ShadowKind::Fade => format!(
            "{:.2}px {:.2}px {:.2}px {color}",
            layer.dx, layer.dy, layer.blur
        ),
    }
}

/// Full `text-shadow` value, or `none` when there are no layers.
pub fn format_text_shadow(layers: &[ShadowLayer]) -> String {
    if layers.is_empty() {
        return "none".to_string();
    }
    layers
        .iter()
        .map(format_shadow_layer)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecraft_core::{compute_character_shadow, HexColor, TitleConfig};

    #[test]
    fn numbers_drop_negative_zero() {
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(30.0), "30");
        assert_eq!(css_number(-7.5), "-7.5");
    }

    #[test]
    fn transform_string() {
        let t = CharacterTransform {
            rotation_y_deg: -30.0,
            curvature_y_px: -0.0,
            depth_z_px: 5.0,
            z_index: 2,
        };
        assert_eq!(
            format_transform(&t),
            "rotateY(-30deg) translateY(0px) translateZ(5px)"
        );
    }

    #[test]
    fn fading_layer_precision() {
        let layer = ShadowLayer {
            kind: ShadowKind::Fade,
            dx: 1.23456,
            dy: -0.5,
            blur: 0.5,
            color: LayerColor::Rgb(HexColor::rgb(94, 49, 67)),
            alpha: 0.46,
        };
        assert_eq!(
            format_shadow_layer(&layer),
            "1.23px -0.50px 0.50px rgba(94,49,67,0.460)"
        );
    }

    #[test]
    fn opaque_unshifted_fade_is_not_glow() {
        let layer = ShadowLayer {
            kind: ShadowKind::Fade,
            dx: 0.0,
            dy: 0.0,
            blur: 10.0,
            color: LayerColor::Rgb(HexColor::WHITE),
            alpha: 1.0,
        };
        assert!(!layer.is_glow());
        assert_eq!(
            format_shadow_layer(&layer),
            "0.00px 0.00px 10.00px #FFFFFF"
        );
    }

    #[test]
    fn glow_layers() {
        let config = TitleConfig {
            glow_effect: true,
            shadow_length: 0.0,
            ..TitleConfig::default()
        };
        let layers = compute_character_shadow(0, 1, &config);
        assert_eq!(
            format_text_shadow(&layers),
            "0 0 10px #F8DB28, 0 0 20px #F8DB28"
        );

        let rainbow = TitleConfig {
            rainbow_mode: true,
            ..config
        };
        let layers = compute_character_shadow(0, 1, &rainbow);
        assert_eq!(
            format_text_shadow(&layers),
            "0 0 10px currentColor, 0 0 20px currentColor"
        );
    }

    #[test]
    fn empty_shadow_is_none() {
        assert_eq!(format_text_shadow(&[]), "none");
    }

    #[test]
    fn default_shadow_has_ten_entries() {
        let config = TitleConfig::default();
        let css = format_text_shadow(&compute_character_shadow(2, 6, &config));
        assert_eq!(css.split(", ").count(), 10);
        assert!(css.ends_with("rgba(94,49,67,0.100)"));
    }
}
