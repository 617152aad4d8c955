use std::sync::Arc;

use eframe::egui;

use titlecraft_core::{rainbow_color, CharacterVisual, LayerColor, ShadowLayer, TitleConfig};
use titlecraft_render::projection::rem_to_px;
use titlecraft_render::{float_offset, project, PERSPECTIVE_PX};

use super::controls::to_color32;
use crate::app::TitleCraftApp;

const MIN_FONT_PX: f32 = 40.0;
const MAX_FONT_PX: f32 = 120.0;
/// Font size as a fraction of the preview width (CSS `10vw`).
const FONT_WIDTH_FRACTION: f32 = 0.1;
/// Blur radius at which a layer is drawn at half its alpha.
const BLUR_HALF_ALPHA_PX: f64 = 8.0;
/// Directions used to fake a stroke around each glyph.
const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (0.707, 0.707),
    (0.0, 1.0),
    (-0.707, 0.707),
    (-1.0, 0.0),
    (-0.707, -0.707),
    (0.0, -1.0),
    (0.707, -0.707),
];

/// One laid-out character ready to paint.
struct PlacedGlyph<'a> {
    visual: &'a CharacterVisual,
    galley: Arc<egui::Galley>,
    pos: egui::Pos2,
    scale: f32,
    squash: f32,
    fill: egui::Color32,
}

impl TitleCraftApp {
    pub(crate) fn draw_preview(&mut self, ctx: &egui::Context) {
        let background = to_color32(self.config.background_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter_at(rect);

                if self.visuals.is_empty() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Type a title",
                        egui::FontId::proportional(18.0),
                        egui::Color32::from_gray(110),
                    );
                    return;
                }

                let font_px = (rect.width() * FONT_WIDTH_FRACTION).clamp(MIN_FONT_PX, MAX_FONT_PX);
                let float_y = if self.config.float_animation {
                    float_offset(
                        self.started.elapsed().as_secs_f64(),
                        self.config.animation_speed,
                    ) as f32
                } else {
                    0.0
                };

                let mut glyphs = layout_glyphs(
                    &painter,
                    &self.config,
                    &self.visuals,
                    font_px,
                    rect.center() + egui::vec2(0.0, float_y),
                );
                glyphs.sort_by_key(|g| g.visual.transform.z_index);

                let outline = to_color32(self.config.outline_color);
                let outline_px = self.config.outline_width as f32;
                for glyph in &glyphs {
                    paint_glyph(&painter, glyph, outline, outline_px);
                }
            });
    }
}

/// Lay out each character on one centred line, applying the projection.
fn layout_glyphs<'a>(
    painter: &egui::Painter,
    config: &TitleConfig,
    visuals: &'a [CharacterVisual],
    font_px: f32,
    center: egui::Pos2,
) -> Vec<PlacedGlyph<'a>> {
    let spacing = rem_to_px(config.letter_spacing) as f32;

    let mut glyphs = Vec::with_capacity(visuals.len());
    let mut advance_total = 0.0;
    for visual in visuals {
        let projection = project(&visual.transform, PERSPECTIVE_PX);
        let scale = projection.scale as f32;
        let squash = projection.squash_x as f32;
        let fill = if config.rainbow_mode {
            to_color32(rainbow_color(visual.index))
        } else {
            to_color32(config.text_color)
        };
        let galley = painter.layout_no_wrap(
            visual.ch.to_string(),
            egui::FontId::proportional(font_px * scale),
            fill,
        );
        let advance = galley.size().x * squash + spacing;
        glyphs.push(PlacedGlyph {
            visual,
            pos: egui::pos2(advance_total, projection.offset_y as f32),
            galley,
            scale,
            squash,
            fill,
        });
        advance_total += advance;
    }

    // Trailing spacing does not count towards centring.
    let width = advance_total - spacing;
    let origin_x = center.x - width / 2.0;
    for glyph in &mut glyphs {
        let size = glyph.galley.size();
        let slot = size.x * glyph.squash;
        glyph.pos = egui::pos2(
            origin_x + glyph.pos.x + (slot - size.x) / 2.0,
            center.y - size.y / 2.0 + glyph.pos.y,
        );
    }
    glyphs
}

fn paint_glyph(
    painter: &egui::Painter,
    glyph: &PlacedGlyph<'_>,
    outline: egui::Color32,
    outline_px: f32,
) {
    // Farthest layer first so nearer ones cover it.
    for layer in glyph.visual.shadow_layers.iter().rev() {
        let offset = egui::vec2(
            layer.dx as f32 * glyph.scale * glyph.squash,
            layer.dy as f32 * glyph.scale,
        );
        let color = layer_color(layer, glyph.fill);
        painter.galley_with_override_text_color(glyph.pos + offset, glyph.galley.clone(), color);
    }

    if outline_px > 0.0 {
        let radius = outline_px * glyph.scale / 2.0;
        for (dx, dy) in OUTLINE_DIRECTIONS {
            painter.galley_with_override_text_color(
                glyph.pos + egui::vec2(dx, dy) * radius,
                glyph.galley.clone(),
                outline,
            );
        }
    }

    painter.galley(glyph.pos, glyph.galley.clone(), glyph.fill);
}

/// Resolve a shadow layer to a paint color, folding blur into alpha.
fn layer_color(layer: &ShadowLayer, fill: egui::Color32) -> egui::Color32 {
    let base = match layer.color {
        LayerColor::Rgb(c) => to_color32(c),
        LayerColor::CurrentColor => fill,
    };
    let alpha = (layer.alpha * blur_fade(layer.blur)).clamp(0.0, 1.0);
    base.gamma_multiply(alpha as f32)
}

/// Alpha multiplier standing in for a Gaussian blur of `blur` px.
fn blur_fade(blur: f64) -> f64 {
    if blur <= 0.0 {
        1.0
    } else {
        BLUR_HALF_ALPHA_PX / (BLUR_HALF_ALPHA_PX + blur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecraft_core::{HexColor, ShadowKind};

    #[test]
    fn blur_fade_halves_at_reference_radius() {
        assert_eq!(blur_fade(0.0), 1.0);
        assert!((blur_fade(BLUR_HALF_ALPHA_PX) - 0.5).abs() < 1e-12);
        assert!(blur_fade(20.0) < blur_fade(10.0));
    }

    #[test]
    fn current_color_layers_take_the_fill() {
        let fill = egui::Color32::from_rgb(10, 200, 30);
        let layer = ShadowLayer {
            kind: ShadowKind::Glow,
            dx: 0.0,
            dy: 0.0,
            blur: 0.0,
            color: LayerColor::CurrentColor,
            alpha: 1.0,
        };
        assert_eq!(layer_color(&layer, fill), fill);

        let fixed = ShadowLayer {
            color: LayerColor::Rgb(HexColor::rgb(1, 2, 3)),
            ..layer
        };
        assert_eq!(layer_color(&fixed, fill), egui::Color32::from_rgb(1, 2, 3));
    }
}
