use eframe::egui;

use crate::app::TitleCraftApp;

impl TitleCraftApp {
    /// Draw the top menu bar. Must be called **before** the side and central
    /// panels so that `egui` reserves vertical space for it.
    pub(crate) fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        let resp = egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.menu_file(ui, ctx);
                self.menu_edit(ui);
                self.menu_view(ui);
                self.menu_help(ui);
            });
        });
        self.menu_bar_height = resp.response.rect.height();
    }

    fn menu_file(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("File", |ui| {
            if ui.button("Copy HTML").clicked() {
                ui.close();
                self.copy_html(ctx);
            }
            if ui.button("Save HTML…").clicked() {
                ui.close();
                self.save_html();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn menu_edit(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Edit", |ui| {
            if ui
                .add_enabled(self.can_undo(), shortcut_item("Undo", "Ctrl+Z"))
                .clicked()
            {
                ui.close();
                self.undo();
            }
            if ui
                .add_enabled(self.can_redo(), shortcut_item("Redo", "Ctrl+Y"))
                .clicked()
            {
                ui.close();
                self.redo();
            }
            ui.separator();
            if ui.button("Randomize").clicked() {
                ui.close();
                self.apply_random();
            }
            if ui.button("Reset to Defaults").clicked() {
                ui.close();
                self.reset();
            }
        });
    }

    fn menu_view(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("View", |ui| {
            if ui
                .checkbox(&mut self.show_controls, "Controls panel")
                .clicked()
            {
                ui.close();
            }
        });
    }

    fn menu_help(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            if ui.button("About TitleCraft").clicked() {
                ui.close();
                self.show_about = true;
            }
        });
    }

    pub(crate) fn draw_about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut open = true;
        egui::Window::new("About TitleCraft")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.heading(
                        egui::RichText::new("TitleCraft")
                            .strong()
                            .color(egui::Color32::from_rgb(248, 219, 40)),
                    );
                    ui.add_space(4.0);
                    ui.label("Design 3D text titles and export them as standalone HTML.");
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "Version {}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .small()
                        .color(egui::Color32::from_rgb(160, 160, 160)),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "State file: {}",
                            self.store.path().display()
                        ))
                        .small()
                        .color(egui::Color32::from_rgb(160, 160, 160)),
                    );
                    ui.add_space(4.0);
                });
            });
        if !open {
            self.show_about = false;
        }
    }
}

/// Build a `Button` with a right-aligned keyboard shortcut hint.
fn shortcut_item(label: &str, shortcut: &str) -> egui::Button<'static> {
    let text = format!("{label}    {shortcut}");
    egui::Button::new(egui::RichText::new(text).size(13.0))
        .wrap_mode(egui::TextWrapMode::Extend)
}
