mod app;
mod debounce;
mod state_store;
mod status;
mod ui;

use eframe::egui;
use tracing::info;

use app::{TitleCraftApp, WINDOW_HEIGHT, WINDOW_WIDTH};
use state_store::StateStore;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting TitleCraft");

    let store = StateStore::open_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TitleCraft")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "TitleCraft",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(TitleCraftApp::new(store)))
        }),
    )
}
