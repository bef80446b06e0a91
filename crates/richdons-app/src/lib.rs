//! Application service layer - quote service, config, constants, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
