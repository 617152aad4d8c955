use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use tracing::{debug, error, info};

use titlecraft_core::{
    builtin_presets, compute_visuals, random_patch, CharacterVisual, HexColor, History, Preset,
    TitleConfig,
};
use titlecraft_render::{build_html, export_html};

use crate::debounce::Debouncer;
use crate::state_store::StateStore;
use crate::status::StatusMessage;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;
const DEFAULT_EXPORT_NAME: &str = "title.html";

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct TitleCraftApp {
    // Title state
    /// Committed configuration; what the preview and export show.
    pub(crate) config: TitleConfig,
    /// Form-bound copy; committed to `config` once edits go quiet.
    pub(crate) draft: TitleConfig,
    pub(crate) visuals: Vec<CharacterVisual>,
    pub(crate) presets: Vec<Preset>,

    // Edit history
    pub(crate) history: History<TitleConfig>,
    pub(crate) debounce: Debouncer,

    // Persistence
    pub(crate) store: StateStore,
    pub(crate) last_export_dir: Option<PathBuf>,

    // UI state
    pub(crate) started: Instant,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) menu_bar_height: f32,
    pub(crate) show_controls: bool,
    pub(crate) show_about: bool,
}

// ---------------------------------------------------------------------------
// Constructor
// ---------------------------------------------------------------------------

impl TitleCraftApp {
    pub(crate) fn new(store: StateStore) -> Self {
        let config = store.load().unwrap_or_default();
        let mut history = History::new();
        history.push(&config);
        let visuals = compute_visuals(&config);
        info!(
            "Starting with \"{}\" ({} characters)",
            config.text,
            visuals.len()
        );

        Self {
            draft: config.clone(),
            config,
            visuals,
            presets: builtin_presets(),

            history,
            debounce: Debouncer::default(),

            store,
            last_export_dir: None,

            started: Instant::now(),
            status: None,
            menu_bar_height: 0.0,
            show_controls: true,
            show_about: false,
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Note a form edit; the draft is committed after the quiet window.
    pub(crate) fn mark_draft_changed(&mut self) {
        self.debounce.trigger(Instant::now());
    }

    /// Commit the draft if it differs from the live configuration.
    pub(crate) fn commit_draft(&mut self) {
        if self.draft == self.config {
            return;
        }
        self.config = self.draft.clone();
        self.record_edit();
    }

    /// Commit a pending form edit now, so it is not lost to the next action.
    pub(crate) fn flush_pending_edit(&mut self) {
        if self.debounce.is_pending() {
            self.debounce.cancel();
            self.commit_draft();
        }
    }

    fn record_edit(&mut self) {
        self.history.push(&self.config);
        self.store.save(&self.config);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visuals = compute_visuals(&self.config);
        debug!("Recomputed {} character visuals", self.visuals.len());
    }

    /// The live configuration changed outside the form: resync the draft.
    fn sync_draft(&mut self) {
        self.draft.clone_from(&self.config);
    }

    pub(crate) fn apply_preset(&mut self, index: usize) {
        self.flush_pending_edit();
        let Some(preset) = self.presets.get(index) else {
            return;
        };
        info!("Applying preset {}", preset.name);
        self.config.merge(&preset.patch);
        self.sync_draft();
        self.record_edit();
    }

    pub(crate) fn apply_random(&mut self) {
        self.flush_pending_edit();
        let patch = random_patch(&mut rand::rng());
        info!("Randomized look: \"{}\"", patch.text.as_deref().unwrap_or_default());
        self.config.merge(&patch);
        self.sync_draft();
        self.record_edit();
    }

    pub(crate) fn reset(&mut self) {
        self.flush_pending_edit();
        self.config = TitleConfig::default();
        self.sync_draft();
        self.record_edit();
    }

    pub(crate) fn set_background(&mut self, color: HexColor) {
        self.flush_pending_edit();
        if self.config.background_color == color {
            return;
        }
        self.config.background_color = color;
        self.sync_draft();
        self.record_edit();
    }

    pub(crate) fn undo(&mut self) {
        self.flush_pending_edit();
        if self.history.undo(&mut self.config) {
            self.after_history_step();
        }
    }

    pub(crate) fn redo(&mut self) {
        self.flush_pending_edit();
        if self.history.redo(&mut self.config) {
            self.after_history_step();
        }
    }

    fn after_history_step(&mut self) {
        self.sync_draft();
        self.store.save(&self.config);
        self.recompute();
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.history.can_undo() || self.debounce.is_pending()
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.history.can_redo() && !self.debounce.is_pending()
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    pub(crate) fn copy_html(&mut self, ctx: &egui::Context) {
        self.flush_pending_edit();
        let html = build_html(&self.config, &self.visuals);
        ctx.copy_text(html);
        self.status = Some(StatusMessage::info("HTML copied!", Instant::now()));
    }

    pub(crate) fn save_html(&mut self) {
        self.flush_pending_edit();
        let mut dialog = rfd::FileDialog::new()
            .add_filter("HTML", &["html", "htm"])
            .set_file_name(DEFAULT_EXPORT_NAME);
        if let Some(dir) = &self.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        let now = Instant::now();
        match export_html(&self.config, &path) {
            Ok(()) => {
                info!("Exported HTML to {}", path.display());
                self.last_export_dir = path.parent().map(PathBuf::from);
                self.status = Some(StatusMessage::info(
                    format!("Saved {}", path.display()),
                    now,
                ));
            }
            Err(e) => {
                error!("HTML export failed: {e}");
                self.status = Some(StatusMessage::error(format!("Export failed: {e}"), now));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Text fields keep their own undo.
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (undo, redo) = ctx.input(|i| {
            let command = i.modifiers.command;
            let z = i.key_pressed(egui::Key::Z);
            (
                command && z && !i.modifiers.shift,
                command && ((z && i.modifiers.shift) || i.key_pressed(egui::Key::Y)),
            )
        });
        if undo {
            self.undo();
        } else if redo {
            self.redo();
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for TitleCraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        let now = Instant::now();
        if self.debounce.poll(now) {
            self.commit_draft();
        }
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }

        self.handle_keyboard(ctx);

        self.draw_menu_bar(ctx);
        self.draw_controls_panel(ctx);
        self.draw_preview(ctx);
        self.show_toolbar(ctx);
        self.show_status(ctx);
        self.draw_about_window(ctx);

        if let Some(wait) = self.debounce.remaining(now) {
            ctx.request_repaint_after(wait);
        }
        if let Some(status) = &self.status {
            ctx.request_repaint_after(status.remaining(now));
        }
        if self.config.float_animation {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.flush_pending_edit();
        self.store.save(&self.config);
        info!("Saved state on exit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecraft_core::RANDOM_TEXTS;

    fn scratch_app(name: &str) -> TitleCraftApp {
        let dir = std::env::temp_dir().join(format!("titlecraft_app_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        TitleCraftApp::new(StateStore::new(dir.join("state.json")))
    }

    #[test]
    fn starts_from_defaults_with_seeded_history() {
        let app = scratch_app("defaults");
        assert_eq!(app.config, TitleConfig::default());
        assert_eq!(app.history.len(), 1);
        assert!(!app.can_undo());
        assert_eq!(app.visuals.len(), app.config.char_count());
    }

    #[test]
    fn draft_commit_records_and_persists() {
        let mut app = scratch_app("commit");
        app.draft.text = "Wow!".into();
        app.commit_draft();
        assert_eq!(app.config.text, "Wow!");
        assert_eq!(app.visuals.len(), 4);
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.store.load().unwrap().text, "Wow!");

        // Committing an unchanged draft does not add history.
        app.commit_draft();
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn undo_flushes_pending_edit_first() {
        let mut app = scratch_app("flush");
        app.draft.shadow_length = 90.0;
        app.mark_draft_changed();
        assert!(app.can_undo());

        app.undo();
        assert_eq!(app.config, TitleConfig::default());
        assert_eq!(app.draft, app.config);
        assert!(app.can_redo());

        app.redo();
        assert_eq!(app.config.shadow_length, 90.0);
    }

    #[test]
    fn preset_then_edit_drops_redo() {
        let mut app = scratch_app("preset");
        let neon = app.presets.iter().position(|p| p.name == "neon").unwrap();
        app.apply_preset(neon);
        assert!(app.config.glow_effect);
        app.undo();
        assert!(app.can_redo());

        app.set_background(HexColor::WHITE);
        assert!(!app.can_redo());
        assert_eq!(app.config.background_color, HexColor::WHITE);
    }

    #[test]
    fn randomize_records_one_entry() {
        let mut app = scratch_app("random");
        app.draft.perspective_arc = 17.0;
        app.mark_draft_changed();

        app.apply_random();
        // The pending edit and the random look are separate entries.
        assert_eq!(app.history.len(), 3);
        assert!(RANDOM_TEXTS.contains(&app.config.text.as_str()));
        assert_eq!(app.config.perspective_arc, 17.0);
        assert_eq!(app.draft, app.config);
        assert_eq!(app.visuals.len(), app.config.char_count());

        app.undo();
        assert_eq!(app.config.perspective_arc, 17.0);
        assert_eq!(app.config.text, TitleConfig::default().text);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = scratch_app("reset");
        app.apply_preset(0);
        app.reset();
        assert_eq!(app.config, TitleConfig::default());
        assert_eq!(app.history.len(), 3);
    }
}
