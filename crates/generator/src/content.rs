//! Content Loader: resolves content ids into rendered documents.
//!
//! Documents are markdown files with optional YAML front matter:
//!
//! ```text
//! ---
//! title: Installation
//! description: Getting Shelf running
//! date: 2020-03-01
//! ---
//!
//! # Install
//! ```

use pulldown_cmark::{Options, Parser, html};
use shelf_site_core::{ContentDocument, ContentResolutionError, FrontMatter};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, ContentResolutionError>;

pub const CONTENT_EXTENSION: &str = "md";

/// Resolves content ids into documents
pub trait ContentSource {
    fn resolve(&self, id: &str) -> Result<ContentDocument>;

    /// Every id this source can resolve, sorted
    fn ids(&self) -> Result<Vec<String>>;
}

/// Markdown files under a root directory; `docs/installation` maps to
/// `<root>/docs/installation.md`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, CONTENT_EXTENSION))
    }
}

impl ContentSource for DirectorySource {
    fn resolve(&self, id: &str) -> Result<ContentDocument> {
        validate_id(id)?;
        let path = self.path_for(id);
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentResolutionError::NotFound(id.to_string()),
            _ => ContentResolutionError::Io(path.clone(), e),
        })?;
        tracing::debug!(id, path = %path.display(), "resolved content");
        parse_document(id, &raw)
    }

    fn ids(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                ContentResolutionError::Io(path, e.into())
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(CONTENT_EXTENSION)
            {
                continue;
            }
            // Hidden files are drafts or editor leftovers
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }
            if let Ok(relative) = path.strip_prefix(&self.root) {
                let id = relative
                    .with_extension("")
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// Content held in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, markdown: impl Into<String>) -> Self {
        self.insert(id, markdown);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, markdown: impl Into<String>) {
        self.documents.insert(id.into(), markdown.into());
    }
}

impl ContentSource for MemorySource {
    fn resolve(&self, id: &str) -> Result<ContentDocument> {
        validate_id(id)?;
        let raw = self
            .documents
            .get(id)
            .ok_or_else(|| ContentResolutionError::NotFound(id.to_string()))?;
        parse_document(id, raw)
    }

    fn ids(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }
}

/// Split front matter from the markdown body and render the body to HTML
pub fn parse_document(id: &str, raw: &str) -> Result<ContentDocument> {
    let (yaml, markdown) = split_front_matter(id, raw)?;

    let frontmatter = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<FrontMatter>(yaml)
            .map_err(|source| ContentResolutionError::FrontMatter {
                id: id.to_string(),
                source,
            })?,
        _ => FrontMatter::default(),
    };

    Ok(ContentDocument {
        id: id.to_string(),
        body: render_markdown(markdown),
        frontmatter,
    })
}

pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn split_front_matter<'a>(id: &str, raw: &'a str) -> Result<(Option<&'a str>, &'a str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(rest) = raw
        .strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))
    else {
        return Ok((None, raw));
    };

    // Empty front matter block
    if let Some(body) = rest
        .strip_prefix("---\n")
        .or_else(|| rest.strip_prefix("---\r\n"))
    {
        return Ok((Some(""), body));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }

    Err(ContentResolutionError::Malformed {
        id: id.to_string(),
        reason: "front matter is not closed with '---'".to_string(),
    })
}

/// Ids are relative, `/`-separated paths without traversal
fn validate_id(id: &str) -> Result<()> {
    let malformed = |reason: &str| ContentResolutionError::Malformed {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.trim().is_empty() {
        return Err(malformed("empty id"));
    }
    if id.starts_with('/') || id.contains('\\') || Path::new(id).is_absolute() {
        return Err(malformed("ids must be relative '/'-separated paths"));
    }
    for segment in id.split('/') {
        if segment.is_empty() {
            return Err(malformed("empty path segment"));
        }
        if segment == ".." || segment == "." {
            return Err(malformed("relative path segments are not allowed"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INSTALLATION: &str = "---\ntitle: Installation\ndescription: Getting started\ndate: 2020-03-01\n---\n\n# Install\n\nRun `docker run shelf`.\n";

    #[test]
    fn test_parse_document_with_front_matter() {
        let doc = parse_document("docs/installation", INSTALLATION).unwrap();
        assert_eq!(doc.id, "docs/installation");
        assert_eq!(doc.frontmatter.title.as_deref(), Some("Installation"));
        assert_eq!(doc.frontmatter.description.as_deref(), Some("Getting started"));
        assert_eq!(
            doc.frontmatter.date,
            chrono::NaiveDate::from_ymd_opt(2020, 3, 1)
        );
        assert!(doc.body.contains("<h1>Install</h1>"));
        assert!(doc.body.contains("<code>docker run shelf</code>"));
        assert!(!doc.body.contains("title:"));
    }

    #[test]
    fn test_parse_document_without_front_matter() {
        let doc = parse_document("notes", "Just *text*.\n").unwrap();
        assert_eq!(doc.frontmatter, FrontMatter::default());
        assert_eq!(doc.body, "<p>Just <em>text</em>.</p>\n");
    }

    #[test]
    fn test_parse_document_empty_front_matter() {
        let doc = parse_document("notes", "---\n---\nBody\n").unwrap();
        assert!(doc.frontmatter.title.is_none());
        assert_eq!(doc.body, "<p>Body</p>\n");
    }

    #[test]
    fn test_parse_document_crlf_front_matter() {
        let doc = parse_document("notes", "---\r\ntitle: Windows\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.frontmatter.title.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_unclosed_front_matter_is_malformed() {
        let err = parse_document("broken", "---\ntitle: Oops\n\n# Body\n").unwrap_err();
        assert!(matches!(err, ContentResolutionError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_front_matter_yaml() {
        let err = parse_document("broken", "---\ntitle: [unclosed\n---\nBody\n").unwrap_err();
        assert!(matches!(err, ContentResolutionError::FrontMatter { ref id, .. } if id == "broken"));
    }

    #[test]
    fn test_render_markdown_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("docs/installation").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("/etc/passwd").is_err());
        assert!(validate_id("docs/../../secret").is_err());
        assert!(validate_id("docs//installation").is_err());
        assert!(validate_id("docs\\installation").is_err());
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with("docs/installation", INSTALLATION)
            .with("about", "About us");

        assert_eq!(source.ids().unwrap(), vec!["about", "docs/installation"]);
        let doc = source.resolve("docs/installation").unwrap();
        assert_eq!(doc.frontmatter.title.as_deref(), Some("Installation"));
        assert!(matches!(
            source.resolve("docs/missing"),
            Err(ContentResolutionError::NotFound(ref id)) if id == "docs/missing"
        ));
    }

    #[test]
    fn test_directory_source_resolve_and_ids() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/installation.md"), INSTALLATION).unwrap();
        fs::write(dir.path().join("docs/querying.md"), "# Querying\n").unwrap();
        fs::write(dir.path().join("docs/.draft.md"), "# Draft\n").unwrap();
        fs::write(dir.path().join("docs/diagram.svg"), "<svg/>").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(
            source.ids().unwrap(),
            vec!["docs/installation", "docs/querying"]
        );

        let doc = source.resolve("docs/querying").unwrap();
        assert!(doc.frontmatter.title.is_none());
        assert!(doc.body.contains("<h1>Querying</h1>"));
    }

    #[test]
    fn test_directory_source_not_found() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.resolve("docs/missing"),
            Err(ContentResolutionError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_source_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("content"));
        assert!(matches!(
            source.resolve("../site"),
            Err(ContentResolutionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_directory_source_missing_root_has_no_ids() {
        let source = DirectorySource::new("/nonexistent/content");
        assert!(source.ids().unwrap().is_empty());
    }
}
