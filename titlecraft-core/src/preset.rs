use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::HexColor;
use crate::config::ConfigPatch;
use crate::error::CoreError;

/// A named look: a partial configuration merged over the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Stable identifier used for lookup.
    pub name: &'static str,
    /// Button label.
    pub label: &'static str,
    pub patch: ConfigPatch,
}

/// Return all built-in presets, in display order.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "deep",
            label: "Deep",
            patch: ConfigPatch {
                text: Some("Profundo".into()),
                shadow_length: Some(150.0),
                start_angle: Some(80.0),
                end_angle: Some(100.0),
                depth_intensity: Some(15.0),
                perspective_rotate: Some(25.0),
                letter_spacing: Some(-0.1),
                outline_width: Some(1.0),
                text_color: Some(HexColor::rgb(0xA0, 0xE7, 0xE5)),
                shadow_color: Some(HexColor::BLACK),
                outline_color: Some(HexColor::rgb(0x33, 0x33, 0x33)),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "neon",
            label: "Neon",
            patch: ConfigPatch {
                text: Some("Neón".into()),
                text_color: Some(HexColor::rgb(0x00, 0xFF, 0xFF)),
                outline_color: Some(HexColor::BLACK),
                outline_width: Some(2.0),
                letter_spacing: Some(0.1),
                shadow_color: Some(HexColor::rgb(0x00, 0xFF, 0xFF)),
                shadow_length: Some(0.0),
                shadow_blur: Some(15.0),
                glow_effect: Some(true),
                float_animation: Some(true),
                animation_speed: Some(4.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "elegant",
            label: "Elegant",
            patch: ConfigPatch {
                text: Some("Elegante".into()),
                text_color: Some(HexColor::rgb(0xE0, 0xCD, 0xA7)),
                outline_color: Some(HexColor::rgb(0x3D, 0x2B, 0x1F)),
                outline_width: Some(1.0),
                letter_spacing: Some(0.0),
                shadow_length: Some(10.0),
                shadow_blur: Some(2.0),
                shadow_color: Some(HexColor::BLACK),
                start_angle: Some(90.0),
                end_angle: Some(90.0),
                depth_intensity: Some(6.0),
                perspective_rotate: Some(-5.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "bold",
            label: "Bold",
            patch: ConfigPatch {
                text: Some("Negrita".into()),
                text_color: Some(HexColor::WHITE),
                outline_color: Some(HexColor::BLACK),
                outline_width: Some(6.0),
                letter_spacing: Some(-0.1),
                shadow_length: Some(5.0),
                shadow_blur: Some(1.0),
                shadow_color: Some(HexColor::BLACK),
                depth_intensity: Some(3.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "candy",
            label: "Candy",
            patch: ConfigPatch {
                text: Some("Dulce".into()),
                text_color: Some(HexColor::rgb(0xFF, 0x69, 0xB4)),
                outline_color: Some(HexColor::rgb(0x8A, 0x2B, 0xE2)),
                outline_width: Some(4.0),
                letter_spacing: Some(0.5),
                shadow_length: Some(10.0),
                shadow_blur: Some(5.0),
                shadow_color: Some(HexColor::rgb(0xFF, 0xC0, 0xCB)),
                start_angle: Some(0.0),
                end_angle: Some(180.0),
                depth_intensity: Some(8.0),
                perspective_rotate: Some(15.0),
                glow_effect: Some(true),
                animation_speed: Some(3.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "metal",
            label: "Metal",
            patch: ConfigPatch {
                text: Some("Metal".into()),
                text_color: Some(HexColor::rgb(0xC0, 0xC0, 0xC0)),
                outline_color: Some(HexColor::rgb(0x80, 0x80, 0x80)),
                outline_width: Some(2.0),
                letter_spacing: Some(-0.2),
                shadow_length: Some(20.0),
                shadow_blur: Some(8.0),
                shadow_color: Some(HexColor::rgb(0x40, 0x40, 0x40)),
                start_angle: Some(60.0),
                end_angle: Some(120.0),
                depth_intensity: Some(12.0),
                perspective_rotate: Some(10.0),
                float_animation: Some(true),
                animation_speed: Some(5.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "retro",
            label: "Retro",
            patch: ConfigPatch {
                text: Some("Retro".into()),
                text_color: Some(HexColor::rgb(0xFF, 0xFF, 0x00)),
                outline_color: Some(HexColor::rgb(0xFF, 0x00, 0xFF)),
                outline_width: Some(5.0),
                letter_spacing: Some(0.2),
                shadow_length: Some(25.0),
                shadow_blur: Some(10.0),
                shadow_color: Some(HexColor::rgb(0xFF, 0x45, 0x00)),
                start_angle: Some(20.0),
                end_angle: Some(160.0),
                depth_intensity: Some(10.0),
                perspective_rotate: Some(-15.0),
                glow_effect: Some(true),
                animation_speed: Some(4.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "galaxy",
            label: "Galaxy",
            patch: ConfigPatch {
                text: Some("Galaxia".into()),
                text_color: Some(HexColor::WHITE),
                outline_color: Some(HexColor::rgb(0x48, 0x3D, 0x8B)),
                outline_width: Some(2.0),
                letter_spacing: Some(0.1),
                shadow_length: Some(0.0),
                shadow_blur: Some(20.0),
                shadow_color: Some(HexColor::rgb(0x8A, 0x2B, 0xE2)),
                start_angle: Some(0.0),
                end_angle: Some(360.0),
                depth_intensity: Some(7.0),
                perspective_rotate: Some(0.0),
                glow_effect: Some(true),
                float_animation: Some(true),
                animation_speed: Some(8.0),
                ..ConfigPatch::default()
            },
        },
        Preset {
            name: "gradient",
            label: "Gradient",
            patch: ConfigPatch {
                text: Some("Gradiente".into()),
                text_color: Some(HexColor::WHITE),
                outline_color: Some(HexColor::BLACK),
                outline_width: Some(1.0),
                letter_spacing: Some(0.1),
                shadow_length: Some(5.0),
                shadow_blur: Some(10.0),
                shadow_color: Some(HexColor::rgb(0x77, 0x77, 0x77)),
                start_angle: Some(90.0),
                end_angle: Some(90.0),
                depth_intensity: Some(6.0),
                perspective_rotate: Some(0.0),
                glow_effect: Some(true),
                animation_speed: Some(5.0),
                ..ConfigPatch::default()
            },
        },
    ]
}

/// Look up a built-in preset by its identifier.
pub fn find_preset(name: &str) -> crate::Result<Preset> {
    builtin_presets()
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CoreError::UnknownPreset(name.to_string()))
}

// ---------------------------------------------------------------------------
// Randomize
// ---------------------------------------------------------------------------

/// Titles picked from when randomizing.
pub const RANDOM_TEXTS: [&str; 8] = [
    "¡Genial!",
    "Wow!",
    "Explosivo!",
    "Estilo 3D",
    "Diseño Web",
    "¡Avanzado!",
    "Dulce!",
    "Creativo",
];

/// Text, outline and shadow colors that read well together.
pub const RANDOM_PALETTES: [[HexColor; 3]; 8] = [
    [
        HexColor::rgb(0xF8, 0xDB, 0x28),
        HexColor::rgb(0x90, 0x1F, 0x06),
        HexColor::rgb(0x5E, 0x31, 0x43),
    ],
    [
        HexColor::rgb(0x00, 0xFF, 0xFF),
        HexColor::BLACK,
        HexColor::rgb(0x00, 0xFF, 0xFF),
    ],
    [
        HexColor::rgb(0xE0, 0xCD, 0xA7),
        HexColor::rgb(0x3D, 0x2B, 0x1F),
        HexColor::BLACK,
    ],
    [
        HexColor::WHITE,
        HexColor::BLACK,
        HexColor::rgb(0x40, 0x40, 0x40),
    ],
    [
        HexColor::rgb(0xFF, 0x69, 0xB4),
        HexColor::rgb(0x8A, 0x2B, 0xE2),
        HexColor::rgb(0xFF, 0xC0, 0xCB),
    ],
    [
        HexColor::rgb(0xC0, 0xC0, 0xC0),
        HexColor::rgb(0x80, 0x80, 0x80),
        HexColor::rgb(0x40, 0x40, 0x40),
    ],
    [
        HexColor::rgb(0xFF, 0xFF, 0x00),
        HexColor::rgb(0xFF, 0x00, 0xFF),
        HexColor::rgb(0xFF, 0x45, 0x00),
    ],
    [
        HexColor::WHITE,
        HexColor::rgb(0x48, 0x3D, 0x8B),
        HexColor::rgb(0x8A, 0x2B, 0xE2),
    ],
];

/// Outlines that keep rainbow letters legible.
pub const RAINBOW_OUTLINES: [HexColor; 3] = [
    HexColor::BLACK,
    HexColor::rgb(0x33, 0x33, 0x33),
    HexColor::rgb(0x80, 0x80, 0x80),
];

/// Chance that a randomized title uses rainbow letters.
const RAINBOW_CHANCE: f64 = 0.5;

/// Ranges for one family of randomized looks. Integer ranges are sampled
/// as whole numbers.
#[derive(Debug, Clone)]
struct RandomStyle {
    shadow_length: RangeInclusive<i32>,
    shadow_blur: RangeInclusive<i32>,
    depth_intensity: RangeInclusive<i32>,
    perspective_rotate: RangeInclusive<i32>,
    start_angle: RangeInclusive<i32>,
    end_angle: RangeInclusive<i32>,
    outline_width: RangeInclusive<i32>,
    letter_spacing: RangeInclusive<f64>,
    glow_chance: f64,
    float_chance: f64,
    animation_speed: RangeInclusive<i32>,
}

fn random_styles() -> [RandomStyle; 5] {
    [
        // Soft and deep.
        RandomStyle {
            shadow_length: 100..=200,
            shadow_blur: 10..=25,
            depth_intensity: 10..=20,
            perspective_rotate: -30..=30,
            start_angle: 70..=110,
            end_angle: 70..=110,
            outline_width: 1..=3,
            letter_spacing: -0.2..=0.1,
            glow_chance: 0.0,
            float_chance: 0.5,
            animation_speed: 4..=8,
        },
        // Neon.
        RandomStyle {
            shadow_length: 5..=30,
            shadow_blur: 15..=30,
            depth_intensity: 5..=10,
            perspective_rotate: -10..=10,
            start_angle: 0..=360,
            end_angle: 0..=360,
            outline_width: 2..=4,
            letter_spacing: 0.1..=0.4,
            glow_chance: 1.0,
            float_chance: 0.7,
            animation_speed: 3..=6,
        },
        // Bold.
        RandomStyle {
            shadow_length: 20..=80,
            shadow_blur: 2..=8,
            depth_intensity: 8..=15,
            perspective_rotate: -20..=20,
            start_angle: 20..=160,
            end_angle: 20..=160,
            outline_width: 4..=7,
            letter_spacing: -0.3..=0.2,
            glow_chance: 0.0,
            float_chance: 0.3,
            animation_speed: 5..=9,
        },
        // Subtle.
        RandomStyle {
            shadow_length: 10..=50,
            shadow_blur: 5..=15,
            depth_intensity: 4..=10,
            perspective_rotate: -5..=5,
            start_angle: 90..=90,
            end_angle: 90..=90,
            outline_width: 1..=2,
            letter_spacing: -0.1..=0.1,
            glow_chance: 0.3,
            float_chance: 0.0,
            animation_speed: 6..=10,
        },
        // Anything goes.
        RandomStyle {
            shadow_length: 0..=150,
            shadow_blur: 0..=30,
            depth_intensity: 1..=15,
            perspective_rotate: -45..=45,
            start_angle: 0..=360,
            end_angle: 0..=360,
            outline_width: 1..=8,
            letter_spacing: -0.5..=0.8,
            glow_chance: 0.5,
            float_chance: 0.6,
            animation_speed: 3..=12,
        },
    ]
}

fn whole<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<i32>) -> Option<f64> {
    Some(f64::from(rng.random_range(range.clone())))
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

fn style_patch<R: Rng + ?Sized>(rng: &mut R, style: &RandomStyle) -> ConfigPatch {
    let spacing = rng.random_range(style.letter_spacing.clone());
    ConfigPatch {
        shadow_length: whole(rng, &style.shadow_length),
        shadow_blur: whole(rng, &style.shadow_blur),
        depth_intensity: whole(rng, &style.depth_intensity),
        perspective_rotate: whole(rng, &style.perspective_rotate),
        start_angle: whole(rng, &style.start_angle),
        end_angle: whole(rng, &style.end_angle),
        outline_width: whole(rng, &style.outline_width),
        // Two decimals, so the slider shows what was picked.
        letter_spacing: Some((spacing * 100.0).round() / 100.0),
        glow_effect: Some(rng.random_bool(style.glow_chance)),
        float_animation: Some(rng.random_bool(style.float_chance)),
        animation_speed: whole(rng, &style.animation_speed),
        ..ConfigPatch::default()
    }
}

/// A random look: one of five style families, a coordinated color scheme
/// (or rainbow letters) and a sample title.
///
/// Arc and background are left alone.
pub fn random_patch<R: Rng + ?Sized>(rng: &mut R) -> ConfigPatch {
    let styles = random_styles();
    let style = &styles[rng.random_range(0..styles.len())];
    let mut patch = style_patch(rng, style);

    let rainbow = rng.random_bool(RAINBOW_CHANCE);
    patch.rainbow_mode = Some(rainbow);
    if rainbow {
        patch.text_color = Some(HexColor::WHITE);
        patch.outline_color = Some(pick(rng, &RAINBOW_OUTLINES));
        patch.shadow_color = Some(HexColor::BLACK);
    } else {
        let [text, outline, shadow] = pick(rng, &RANDOM_PALETTES);
        patch.text_color = Some(text);
        patch.outline_color = Some(outline);
        patch.shadow_color = Some(shadow);
    }

    patch.text = Some(pick(rng, &RANDOM_TEXTS).to_string());
    patch
}
