#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    if let Err(err) = dioxus::logger::init(ui::config::config().log_level()) {
        eprintln!("[finsight] logger already initialized ({err})");
    }

    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "{} – v{}",
                            ui::config::config().brand,
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    let win = dioxus::desktop::use_window();
    use_effect(move || {
        win.set_maximized(true);
    });

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
