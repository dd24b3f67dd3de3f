pub mod config;
pub mod error;
pub mod html;
pub mod http;
pub mod types;

pub use error::CommonError;
pub use error::Result;

pub const DEFAULT_DATASET: &str = "uk_festivals.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0:8082";

pub const API_EVENTS_PATH: &str = "/api/events";
pub const API_NEW_EVENT_PATH: &str = "/api/events/new";
pub const CLIENT_CONFIG_PATH: &str = "/config.json";

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
