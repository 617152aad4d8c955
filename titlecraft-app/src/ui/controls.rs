use std::ops::RangeInclusive;

use eframe::egui;

use titlecraft_core::{HexColor, Preset, TitleConfig};

use crate::app::TitleCraftApp;

const CONTROLS_WIDTH: f32 = 300.0;
const SWATCH_SIZE: f32 = 22.0;

const BACKGROUND_SWATCHES: [(&str, HexColor); 6] = [
    ("Black", HexColor::BLACK),
    ("Midnight", HexColor::rgb(0x1a, 0x1a, 0x2e)),
    ("Slate", HexColor::rgb(0x2c, 0x3e, 0x50)),
    ("Plum", HexColor::rgb(0x2d, 0x13, 0x2c)),
    ("Charcoal", HexColor::rgb(0x33, 0x33, 0x33)),
    ("White", HexColor::WHITE),
];

impl TitleCraftApp {
    /// Left side panel bound to the draft configuration.
    ///
    /// Form edits only restart the debounce; presets and background swatches
    /// are discrete actions and commit immediately.
    pub(crate) fn draw_controls_panel(&mut self, ctx: &egui::Context) {
        if !self.show_controls {
            return;
        }

        let mut changed = false;
        let mut preset_clicked = None;
        let mut background_clicked = None;

        let draft = &mut self.draft;
        let presets = &self.presets;
        let current_background = self.config.background_color;

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(CONTROLS_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    changed |= text_section(ui, draft);
                    changed |= colors_section(ui, draft);
                    changed |= shadow_section(ui, draft);
                    changed |= perspective_section(ui, draft);
                    changed |= effects_section(ui, draft);
                    preset_clicked = presets_section(ui, presets);
                    background_clicked = background_section(ui, current_background);
                });
            });

        if changed {
            self.mark_draft_changed();
        }
        if let Some(index) = preset_clicked {
            self.apply_preset(index);
        }
        if let Some(color) = background_clicked {
            self.set_background(color);
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn text_section(ui: &mut egui::Ui, cfg: &mut TitleConfig) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Text")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut cfg.text)
                        .hint_text("Title text")
                        .desired_width(f32::INFINITY),
                )
                .changed();
            changed |= slider(ui, &mut cfg.outline_width, 0.0..=10.0, "Outline", " px");
            changed |= slider(
                ui,
                &mut cfg.letter_spacing,
                -0.5..=1.0,
                "Letter spacing",
                " rem",
            );
        });
    changed
}

fn colors_section(ui: &mut egui::Ui, cfg: &mut TitleConfig) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Colors")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui.checkbox(&mut cfg.rainbow_mode, "Rainbow letters").changed();
            ui.add_enabled_ui(!cfg.rainbow_mode, |ui| {
                changed |= color_row(ui, "Text", &mut cfg.text_color);
            });
            changed |= color_row(ui, "Outline", &mut cfg.outline_color);
            changed |= color_row(ui, "Shadow", &mut cfg.shadow_color);
        });
    changed
}

fn shadow_section(ui: &mut egui::Ui, cfg: &mut TitleConfig) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Shadow")
        .default_open(true)
        .show(ui, |ui| {
            changed |= slider(ui, &mut cfg.shadow_length, 0.0..=150.0, "Length", " px");
            changed |= slider(ui, &mut cfg.shadow_blur, 0.0..=20.0, "Blur", " px");
            changed |= slider(ui, &mut cfg.start_angle, 0.0..=360.0, "Start angle", "°");
            changed |= slider(ui, &mut cfg.end_angle, 0.0..=360.0, "End angle", "°");
        });
    changed
}

fn perspective_section(ui: &mut egui::Ui, cfg: &mut TitleConfig) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Perspective")
        .default_open(true)
        .show(ui, |ui| {
            changed |= slider(ui, &mut cfg.perspective_arc, -50.0..=50.0, "Arc", " px");
            changed |= slider(
                ui,
                &mut cfg.perspective_rotate,
                -45.0..=45.0,
                "Rotation",
                "°",
            );
            changed |= slider(ui, &mut cfg.depth_intensity, 0.0..=30.0, "Depth", "");
        });
    changed
}

fn effects_section(ui: &mut egui::Ui, cfg: &mut TitleConfig) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Effects")
        .default_open(false)
        .show(ui, |ui| {
            changed |= ui.checkbox(&mut cfg.glow_effect, "Glow").changed();
            changed |= ui.checkbox(&mut cfg.float_animation, "Float").changed();
            ui.add_enabled_ui(cfg.float_animation, |ui| {
                changed |= slider(
                    ui,
                    &mut cfg.animation_speed,
                    1.0..=20.0,
                    "Float period",
                    " s",
                );
            });
        });
    changed
}

fn presets_section(ui: &mut egui::Ui, presets: &[Preset]) -> Option<usize> {
    let mut clicked = None;
    egui::CollapsingHeader::new("Presets")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (i, preset) in presets.iter().enumerate() {
                    if ui.button(preset.label).clicked() {
                        clicked = Some(i);
                    }
                }
            });
        });
    clicked
}

fn background_section(ui: &mut egui::Ui, current: HexColor) -> Option<HexColor> {
    let mut clicked = None;
    egui::CollapsingHeader::new("Background")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (name, color) in BACKGROUND_SWATCHES {
                    let selected = color == current;
                    let stroke = if selected {
                        egui::Stroke::new(2.0, egui::Color32::from_rgb(80, 200, 255))
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::GRAY)
                    };
                    let button = egui::Button::new("")
                        .fill(to_color32(color))
                        .stroke(stroke)
                        .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                    if ui.add(button).on_hover_text(name).clicked() {
                        clicked = Some(color);
                    }
                }
            });
        });
    clicked
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn slider(
    ui: &mut egui::Ui,
    value: &mut f64,
    range: RangeInclusive<f64>,
    text: &str,
    suffix: &str,
) -> bool {
    ui.add(
        egui::Slider::new(value, range)
            .text(text)
            .suffix(suffix)
            .max_decimals(2),
    )
    .changed()
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut HexColor) -> bool {
    let mut rgb = [color.r, color.g, color.b];
    let changed = ui
        .horizontal(|ui| {
            let changed = ui.color_edit_button_srgb(&mut rgb).changed();
            ui.label(format!("{label}  {color}"));
            changed
        })
        .inner;
    if changed {
        *color = HexColor::rgb(rgb[0], rgb[1], rgb[2]);
    }
    changed
}

pub(crate) fn to_color32(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
