//! JSON renderer for generating template text from resolved documents

pub mod config;
pub mod json;

pub use config::{ConfigError, RenderConfig};
pub use json::render_json;
