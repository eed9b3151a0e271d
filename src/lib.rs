pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod savers;
pub mod schema;
pub mod validation;

use crate::config::Config;
use tracing::Level;

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level = match logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        }
    }
}
