//! Front-end menu and card-grid launcher for a collection of standalone
//! minigames.

pub mod assets;
pub mod catalog;
pub mod click;
pub mod components;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod launcher;
pub mod menu;
pub mod message;
pub mod process;
pub mod types;
pub mod ui;
pub mod utils;

pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Logging goes to stderr through `env_logger`; `RUST_LOG` overrides the
/// default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
