use std::path::PathBuf;
use thiserror::Error;

/// Site configuration errors. Fatal for the whole build.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading {0:?}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Content lookup errors. Fatal for the affected page only.
#[derive(Debug, Error)]
pub enum ContentResolutionError {
    #[error("Content not found: '{0}'")]
    NotFound(String),

    #[error("IO error when reading {0:?}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid front matter in '{id}': {source}")]
    FrontMatter {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Malformed content '{id}': {reason}")]
    Malformed { id: String, reason: String },
}

/// Page composition errors. Fatal for the affected page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Site metadata unavailable: {0}")]
    Metadata(#[from] ConfigError),

    #[error("Navigation is empty; at least one [[menu]] entry is required")]
    EmptyNavigation,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentResolutionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            std::io::Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = io_err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let missing = ConfigError::MissingField("site.title");
        assert!(missing.to_string().contains("site.title"));
    }

    #[test]
    fn test_content_error_passes_through_unchanged() {
        let err: Error = ContentResolutionError::NotFound("docs/missing".to_string()).into();
        assert!(matches!(
            err,
            Error::Content(ContentResolutionError::NotFound(ref id)) if id == "docs/missing"
        ));
        assert_eq!(err.to_string(), "Content not found: 'docs/missing'");
    }

    #[test]
    fn test_render_error_wraps_config_error() {
        let err: RenderError = ConfigError::MissingField("menu").into();
        assert!(err.to_string().contains("Missing required field 'menu'"));
    }
}
