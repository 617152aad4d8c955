use std::time::Instant;

use eframe::egui;

use crate::app::{TitleCraftApp, HUD_CORNER_RADIUS, HUD_MARGIN};
use crate::status::STATUS_TTL;

impl TitleCraftApp {
    /// Bottom-centre status line, fading out over its lifetime.
    pub(crate) fn show_status(&mut self, ctx: &egui::Context) {
        let Some(status) = &self.status else {
            return;
        };

        let left = status.remaining(Instant::now()).as_secs_f32() / STATUS_TTL.as_secs_f32();
        let fade = (left * 4.0).clamp(0.0, 1.0);
        let alpha = (180.0 * fade).round() as u8;
        let text_color = if status.is_error {
            egui::Color32::from_rgb(255, 120, 100)
        } else {
            egui::Color32::from_rgb(100, 255, 100)
        };

        egui::Area::new(egui::Id::new("hud_status"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -HUD_MARGIN])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(alpha))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.colored_label(text_color.gamma_multiply(fade), status.text.as_str());
                    });
            });
    }
}
