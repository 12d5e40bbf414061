//! Shared UI crate for the P13 impact visualizer. Scenario logic, charts,
//! export and every view live here; the platform crates only launch them.

pub mod charts;
pub mod core;
pub mod export;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod logo_strip;
    mod metrics_grid;
    mod parameter_panel;

    pub use logo_strip::LogoStrip;
    pub use metrics_grid::MetricsGrid;
    pub use parameter_panel::ParameterPanel;
}

