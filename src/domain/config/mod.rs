pub mod clicker_config;

pub use clicker_config::ClickerConfig;
