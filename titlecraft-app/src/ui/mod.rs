mod controls;
mod hud;
mod menu_bar;
mod preview;
mod toolbar;
