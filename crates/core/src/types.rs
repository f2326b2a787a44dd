use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Complete site configuration, loaded once per build
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub repository_url: String,
    /// Primary navigation, shared by the header and the mobile menu
    pub menu_entries: Arc<[MenuEntry]>,
    pub theme: Theme,
    pub home: HomeConfig,
    pub footer: FooterConfig,
    pub docs: DocsConfig,
    pub manifest: Option<ManifestConfig>,
}

impl SiteMetadata {
    /// Minimal metadata with defaults for every optional section
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        menu_entries: Vec<MenuEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: String::new(),
            repository_url: String::new(),
            menu_entries: menu_entries.into(),
            theme: Theme::default(),
            home: HomeConfig::default(),
            footer: FooterConfig::default(),
            docs: DocsConfig::default(),
            manifest: None,
        }
    }
}

/// A single item of the primary navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub link: String,
    pub icon: String,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, link: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            icon: icon.into(),
        }
    }
}

/// Colour settings shared by every render surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

pub const DEFAULT_ACCENT_COLOR: &str = "#1D4350";

/// Hero section of the index page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Falls back to the site description when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<FooterLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    pub columns: Vec<Vec<FooterLink>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Page-scoped table of contents for long-form content pages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsConfig {
    pub sections: Vec<SideMenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMenuEntry {
    pub title: String,
    pub link: String,
}

impl SideMenuEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Web app manifest settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: String,
    /// Path relative to the site root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Identifies a meta tag either by `name` or by `property` (Open Graph)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaKey {
    Name(String),
    Property(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property.into()),
            content: content.into(),
        }
    }
}

/// Per-page metadata that takes precedence over the site defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetaOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub extra_tags: Vec<MetaTag>,
}

/// Final head metadata for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetaTags {
    pub language: String,
    pub title: String,
    pub tags: Vec<MetaTag>,
}

pub const DEFAULT_LANGUAGE: &str = "en";

/// A resolved long-form content unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDocument {
    pub id: String,
    /// Rendered HTML
    pub body: String,
    pub frontmatter: FrontMatter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ContentDocument {
    /// Output path of the page generated for this document
    pub fn output_path(&self) -> String {
        content_output_path(&self.id)
    }

    /// Site-absolute URL of the page generated for this document
    pub fn url(&self) -> String {
        content_url(&self.id)
    }
}

pub fn content_output_path(id: &str) -> String {
    format!("{}/index.html", id.trim_matches('/'))
}

pub fn content_url(id: &str) -> String {
    format!("/{}", id.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_document_paths() {
        let doc = ContentDocument {
            id: "docs/installation".to_string(),
            body: String::new(),
            frontmatter: FrontMatter::default(),
        };
        assert_eq!(doc.output_path(), "docs/installation/index.html");
        assert_eq!(doc.url(), "/docs/installation");
    }

    #[test]
    fn test_site_metadata_new_uses_defaults() {
        let site = SiteMetadata::new("Shelf", "The GraphQL Database!", vec![]);
        assert_eq!(site.theme.accent_color, DEFAULT_ACCENT_COLOR);
        assert!(site.manifest.is_none());
        assert!(site.menu_entries.is_empty());
    }
}
