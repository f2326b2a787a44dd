use crate::error::ConfigError;
use crate::types::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

type Result<T> = std::result::Result<T, ConfigError>;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: Option<RawSite>,
    menu: Option<Vec<RawMenuEntry>>,
    #[serde(default)]
    theme: Option<RawTheme>,
    #[serde(default)]
    home: Option<RawHome>,
    #[serde(default)]
    footer: Option<RawFooter>,
    #[serde(default)]
    docs: Option<RawDocs>,
    #[serde(default)]
    manifest: Option<ManifestConfig>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    repository: String,
}

#[derive(Debug, Deserialize)]
struct RawMenuEntry {
    name: String,
    link: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    accent_color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHome {
    tagline: Option<String>,
    cta_label: Option<String>,
    cta_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFooter {
    copyright: Option<String>,
    #[serde(default)]
    column: Vec<RawFooterColumn>,
}

#[derive(Debug, Deserialize)]
struct RawFooterColumn {
    #[serde(default)]
    links: Vec<FooterLink>,
}

#[derive(Debug, Deserialize)]
struct RawDocs {
    #[serde(default)]
    section: Vec<SideMenuEntry>,
}

/// Load-once holder for the site metadata of a build.
///
/// The first successful [`MetadataStore::load`] parses `site.toml`; every
/// later call hands out the same `Arc`, so all pages of a build observe one
/// immutable snapshot.
#[derive(Debug)]
pub struct MetadataStore {
    path: PathBuf,
    metadata: OnceLock<Arc<SiteMetadata>>,
}

impl MetadataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metadata: OnceLock::new(),
        }
    }

    /// Store that is already populated, for callers that build metadata in memory
    pub fn from_metadata(metadata: SiteMetadata) -> Self {
        let store = Self::new(PathBuf::new());
        let _ = store.metadata.set(Arc::new(metadata));
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Arc<SiteMetadata>> {
        if let Some(metadata) = self.metadata.get() {
            return Ok(Arc::clone(metadata));
        }

        let parsed = Arc::new(parse_site_toml(&self.path)?);
        tracing::debug!(
            path = %self.path.display(),
            menu_entries = parsed.menu_entries.len(),
            "loaded site metadata"
        );
        Ok(Arc::clone(self.metadata.get_or_init(|| parsed)))
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteMetadata> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteMetadata> {
    let raw: RawConfig = toml::from_str(content)?;

    let site = raw.site.ok_or(ConfigError::MissingField("site"))?;
    let title = site.title.ok_or(ConfigError::MissingField("site.title"))?;
    let description = site
        .description
        .ok_or(ConfigError::MissingField("site.description"))?;
    let menu = raw.menu.ok_or(ConfigError::MissingField("menu"))?;

    let menu_entries = validate_menu(menu)?;

    let theme = match raw.theme.and_then(|t| t.accent_color) {
        Some(accent_color) => Theme { accent_color },
        None => Theme::default(),
    };

    let home = match raw.home {
        Some(home) => {
            let call_to_action = match (home.cta_label, home.cta_link) {
                (Some(label), Some(href)) => Some(FooterLink { label, href }),
                (None, None) => None,
                _ => {
                    return Err(ConfigError::Validation(
                        "home.cta_label and home.cta_link must be set together".to_string(),
                    ));
                }
            };
            HomeConfig {
                tagline: home.tagline,
                call_to_action,
            }
        }
        None => HomeConfig::default(),
    };

    let footer = match raw.footer {
        Some(footer) => FooterConfig {
            copyright: footer.copyright,
            columns: footer.column.into_iter().map(|c| c.links).collect(),
        },
        None => FooterConfig::default(),
    };

    let docs = DocsConfig {
        sections: raw.docs.map(|d| d.section).unwrap_or_default(),
    };

    let manifest = match raw.manifest {
        Some(mut manifest) => {
            if let Some(icon) = &manifest.icon {
                let icon = validate_path(icon, "manifest.icon")?;
                manifest.icon = Some(icon.to_string_lossy().into_owned());
            }
            Some(manifest)
        }
        None => None,
    };

    Ok(SiteMetadata {
        title,
        description,
        author: site.author,
        repository_url: site.repository,
        menu_entries: menu_entries.into(),
        theme,
        home,
        footer,
        docs,
        manifest,
    })
}

/// Check menu entries: names non-empty and unique, links non-empty.
/// Order is kept exactly as written.
fn validate_menu(menu: Vec<RawMenuEntry>) -> Result<Vec<MenuEntry>> {
    let mut seen = HashSet::new();
    menu.into_iter()
        .map(|raw| {
            let name = raw.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "menu entry with empty name".to_string(),
                ));
            }
            if raw.link.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "menu entry '{}' has an empty link",
                    name
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate menu entry name '{}'",
                    name
                )));
            }
            Ok(MenuEntry {
                name: name.to_string(),
                link: raw.link,
                icon: raw.icon,
            })
        })
        .collect()
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so that a
/// site.toml cannot point outside the site directory.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(ConfigError::Validation(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(ConfigError::Validation(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}
