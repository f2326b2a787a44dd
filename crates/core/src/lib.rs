pub mod config;
pub mod error;
pub mod types;

pub use config::{MetadataStore, parse_site_toml};
pub use error::{ConfigError, ContentResolutionError, Error, RenderError, Result};
pub use types::*;
