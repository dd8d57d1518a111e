//! Shared UI crate for FinSight. Engines, mock data and every view live here;
//! the platform crates only launch it.

pub mod charts;
pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod transactions;
pub mod views;

pub mod components {
    mod header;
    pub use header::Header;

    mod hero;
    pub use hero::Hero;

    mod sidebar;
    pub use sidebar::Sidebar;

    mod stat_card;
    pub use stat_card::{StatCard, StatGrid};
}

/// Shared theme stylesheet, embedded by both launchers.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
