use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Full title configuration: one snapshot of every user-tunable parameter.
///
/// Serialized as a flat camelCase key-value record. Keys missing from a
/// stored snapshot fall back to [`TitleConfig::default`], so a snapshot always
/// deserializes into a fully populated configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleConfig {
    pub text: String,
    /// Color each character with its own hue instead of `text_color`.
    pub rainbow_mode: bool,
    pub text_color: HexColor,
    pub outline_color: HexColor,
    /// Text stroke width in px.
    pub outline_width: f64,
    /// Letter spacing in rem.
    pub letter_spacing: f64,
    pub shadow_color: HexColor,
    /// Length of the fading shadow in px. Zero disables it.
    pub shadow_length: f64,
    /// Blur applied to the farthest shadow layer, in px.
    pub shadow_blur: f64,
    /// Shadow direction of the first character, in degrees.
    pub start_angle: f64,
    /// Shadow direction of the last character, in degrees.
    pub end_angle: f64,
    /// Parabolic curvature coefficient in px. Positive bows upward.
    pub perspective_arc: f64,
    /// Y rotation of the outermost characters, in degrees.
    pub perspective_rotate: f64,
    /// `translateZ` of the outermost characters, in px.
    pub depth_intensity: f64,
    pub glow_effect: bool,
    pub float_animation: bool,
    /// Float animation period in seconds.
    pub animation_speed: f64,
    pub background_color: HexColor,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: "Dulce!".to_string(),
            rainbow_mode: false,
            text_color: HexColor::rgb(0xF8, 0xDB, 0x28),
            outline_color: HexColor::rgb(0x90, 0x1F, 0x06),
            outline_width: 3.0,
            letter_spacing: -0.25,
            shadow_color: HexColor::rgb(0x5E, 0x31, 0x43),
            shadow_length: 4.0,
            shadow_blur: 5.0,
            start_angle: 45.0,
            end_angle: 135.0,
            perspective_arc: 0.0,
            perspective_rotate: 0.0,
            depth_intensity: 5.0,
            glow_effect: false,
            float_animation: false,
            animation_speed: 6.0,
            background_color: HexColor::BLACK,
        }
    }
}

impl TitleConfig {
    /// Number of characters the effect engine lays out (Unicode scalars).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Overlay every field the patch sets; untouched fields keep their values.
    pub fn merge(&mut self, patch: &ConfigPatch) {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field.clone_from(value);
                    }
                )*
            };
        }
        overlay!(
            text,
            rainbow_mode,
            text_color,
            outline_color,
            outline_width,
            letter_spacing,
            shadow_color,
            shadow_length,
            shadow_blur,
            start_angle,
            end_angle,
            perspective_arc,
            perspective_rotate,
            depth_intensity,
            glow_effect,
            float_animation,
            animation_speed,
            background_color,
        );
    }

    /// Return a copy with the patch merged in.
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// A partial configuration. `None` fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    pub text: Option<String>,
    pub rainbow_mode: Option<bool>,
    pub text_color: Option<HexColor>,
    pub outline_color: Option<HexColor>,
    pub outline_width: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub shadow_color: Option<HexColor>,
    pub shadow_length: Option<f64>,
    pub shadow_blur: Option<f64>,
    pub start_angle: Option<f64>,
    pub end_angle: Option<f64>,
    pub perspective_arc: Option<f64>,
    pub perspective_rotate: Option<f64>,
    pub depth_intensity: Option<f64>,
    pub glow_effect: Option<bool>,
    pub float_animation: Option<bool>,
    pub animation_speed: Option<f64>,
    pub background_color: Option<HexColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_look() {
        let c = TitleConfig::default();
        assert_eq!(c.text, "Dulce!");
        assert_eq!(c.text_color.to_string(), "#F8DB28");
        assert_eq!(c.outline_color.to_string(), "#901F06");
        assert_eq!(c.shadow_color.to_string(), "#5E3143");
        assert_eq!(c.start_angle, 45.0);
        assert_eq!(c.end_angle, 135.0);
        assert_eq!(c.animation_speed, 6.0);
    }

    #[test]
    fn merge_only_touches_set_fields() {
        let mut c = TitleConfig::default();
        let patch = ConfigPatch {
            text: Some("Hola".into()),
            shadow_length: Some(150.0),
            glow_effect: Some(true),
            ..ConfigPatch::default()
        };
        c.merge(&patch);
        assert_eq!(c.text, "Hola");
        assert_eq!(c.shadow_length, 150.0);
        assert!(c.glow_effect);
        assert_eq!(c.shadow_blur, TitleConfig::default().shadow_blur);
        assert_eq!(c.text_color, TitleConfig::default().text_color);
    }

    #[test]
    fn empty_patch_is_identity() {
        let c = TitleConfig::default();
        assert_eq!(c.merged(&ConfigPatch::default()), c);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let json = serde_json::to_value(TitleConfig::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 18);
        assert_eq!(obj["textColor"], "#F8DB28");
        assert_eq!(obj["perspectiveRotate"], 0.0);
        assert!(obj.contains_key("backgroundColor"));
    }

    #[test]
    fn partial_snapshot_fills_defaults() {
        let c: TitleConfig =
            serde_json::from_str(r##"{"text":"Retro","shadowColor":"#ff4500"}"##).unwrap();
        assert_eq!(c.text, "Retro");
        assert_eq!(c.shadow_color, HexColor::rgb(0xFF, 0x45, 0x00));
        assert_eq!(c.outline_width, TitleConfig::default().outline_width);
    }

    #[test]
    fn char_count_counts_scalars() {
        let c = TitleConfig {
            text: "Neón".into(),
            ..TitleConfig::default()
        };
        assert_eq!(c.char_count(), 4);
    }
}
