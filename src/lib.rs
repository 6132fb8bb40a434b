pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod ui;
pub mod util;

pub use api::{Card, PropertyClient, SearchResponse};
pub use app::App;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
