#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

use dioxus::prelude::*;
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use estimate_builder::util::{
    logging::init_tracing,
    settings,
    version::{version_label, APP_NAME},
};

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let settings = settings::current();
    init_tracing(&settings.log_filter);
    tracing::info!(version = %version_label(), "launching {APP_NAME}");

    let config = desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
        )
    };

    LaunchBuilder::new().with_cfg(config).launch(app::App);
}
