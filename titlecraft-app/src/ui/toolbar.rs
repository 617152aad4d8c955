use eframe::egui;

use crate::app::{TitleCraftApp, HUD_CORNER_RADIUS, HUD_MARGIN};

impl TitleCraftApp {
    pub(crate) fn show_toolbar(&mut self, ctx: &egui::Context) {
        use egui_material_icons::icons::*;

        let icon_on = egui::Color32::from_rgb(200, 200, 200);
        let icon_off = egui::Color32::from_rgb(90, 90, 90);
        let mi = |icon: &str| egui::RichText::new(icon).size(18.0).color(icon_on);
        let mi_state = |icon: &str, active: bool| {
            egui::RichText::new(icon)
                .size(18.0)
                .color(if active { icon_on } else { icon_off })
        };

        let cell = egui::vec2(26.0, 22.0);

        let add_icon_btn =
            |ui: &mut egui::Ui, label: egui::RichText, enabled: bool| -> egui::Response {
                ui.allocate_ui_with_layout(
                    cell,
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| ui.add_enabled(enabled, egui::Button::new(label).frame(false)),
                )
                .inner
            };

        let can_undo = self.can_undo();
        let can_redo = self.can_redo();

        let top_y = HUD_MARGIN + self.menu_bar_height;
        egui::Area::new(egui::Id::new("hud_toolbar"))
            .anchor(egui::Align2::RIGHT_TOP, [-HUD_MARGIN, top_y])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(160))
                    .inner_margin(egui::Margin::same(4))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;

                            if add_icon_btn(ui, mi(ICON_UNDO), can_undo)
                                .on_hover_text("Undo (Ctrl+Z)")
                                .clicked()
                            {
                                self.undo();
                            }
                            if add_icon_btn(ui, mi(ICON_REDO), can_redo)
                                .on_hover_text("Redo (Ctrl+Y)")
                                .clicked()
                            {
                                self.redo();
                            }
                            if add_icon_btn(ui, mi(ICON_CASINO), true)
                                .on_hover_text("Randomize")
                                .clicked()
                            {
                                self.apply_random();
                            }
                            if add_icon_btn(ui, mi(ICON_RESTART_ALT), true)
                                .on_hover_text("Reset to defaults")
                                .clicked()
                            {
                                self.reset();
                            }
                            ui.add_space(6.0);
                            if add_icon_btn(ui, mi(ICON_CONTENT_COPY), true)
                                .on_hover_text("Copy HTML")
                                .clicked()
                            {
                                self.copy_html(ctx);
                            }
                            if add_icon_btn(ui, mi(ICON_SAVE), true)
                                .on_hover_text("Save HTML…")
                                .clicked()
                            {
                                self.save_html();
                            }
                            ui.add_space(6.0);
                            if add_icon_btn(ui, mi_state(ICON_TUNE, self.show_controls), true)
                                .on_hover_text("Controls panel")
                                .clicked()
                            {
                                self.show_controls = !self.show_controls;
                            }
                        });
                    });
            });
    }
}
