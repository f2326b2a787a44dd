// Validation logic: config loading, content resolution, internal links, manifest icon

use shelf_site_core::{MetadataStore, SiteMetadata, content_url};
use shelf_site_generator::content::{ContentSource, DirectorySource};
use shelf_site_generator::NOT_FOUND_PATH;
use shelf_site_generator::render::{MANIFEST_PATH, STYLESHEET_PATH};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

pub const CONFIG_FILE: &str = "site.toml";
pub const CONTENT_DIR: &str = "content";
pub const STATIC_DIR: &str = shelf_site_generator::assets::STATIC_DIR;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a site directory without writing anything
pub fn validate_site(path: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let store = MetadataStore::new(path.join(CONFIG_FILE));
    let site = match store.load() {
        Ok(site) => site,
        Err(e) => {
            report.errors.push(format!("{}: {}", CONFIG_FILE, e));
            return report;
        }
    };
    report.info.push(format!(
        "Site: {} ({} menu entries)",
        site.title,
        site.menu_entries.len()
    ));
    if site.menu_entries.is_empty() {
        report
            .errors
            .push("No [[menu]] entries; pages cannot be composed".to_string());
    }

    let source = DirectorySource::new(path.join(CONTENT_DIR));
    let ids = match source.ids() {
        Ok(ids) => ids,
        Err(e) => {
            report.errors.push(format!("Failed to list content: {}", e));
            Vec::new()
        }
    };

    let mut known = BTreeSet::from([
        "/".to_string(),
        format!("/{}", NOT_FOUND_PATH),
        format!("/{}", STYLESHEET_PATH),
    ]);
    if site.manifest.is_some() {
        known.insert(format!("/{}", MANIFEST_PATH));
    }
    for id in &ids {
        match source.resolve(id) {
            Ok(document) => {
                if document.frontmatter.title.is_none() {
                    report.warnings.push(format!(
                        "Content '{}' has no title; the site title is used",
                        id
                    ));
                }
                known.insert(content_url(id));
            }
            Err(e) => report.errors.push(e.to_string()),
        }
    }
    known.extend(static_files(&path.join(STATIC_DIR)));
    report
        .info
        .push(format!("Content documents: {}", ids.len()));

    check_links(&site, &known, &mut report);
    check_manifest_icon(path, &site, &mut report);

    report
}

/// Site-absolute URLs of everything under the static directory
fn static_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path().strip_prefix(dir).ok().map(|relative| {
                let segments: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                format!("/{}", segments.join("/"))
            })
        })
        .collect()
}

fn is_internal(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//")
}

fn check_links(site: &SiteMetadata, known: &BTreeSet<String>, report: &mut ValidationReport) {
    let mut check = |origin: &str, link: &str| {
        if !is_internal(link) {
            return;
        }
        let target = link.split(['#', '?']).next().unwrap_or(link);
        let normalized = if target == "/" {
            target
        } else {
            target.trim_end_matches('/')
        };
        if !known.contains(normalized) {
            report.warnings.push(format!(
                "{} links to '{}', which is not a generated page",
                origin, link
            ));
        }
    };

    for entry in site.menu_entries.iter() {
        check(&format!("Menu entry '{}'", entry.name), &entry.link);
    }
    for section in &site.docs.sections {
        check(&format!("Docs section '{}'", section.title), &section.link);
    }
    if let Some(cta) = &site.home.call_to_action {
        check("Home call to action", &cta.href);
    }
    for link in site.footer.columns.iter().flatten() {
        check(&format!("Footer link '{}'", link.label), &link.href);
    }
}

fn check_manifest_icon(root: &Path, site: &SiteMetadata, report: &mut ValidationReport) {
    let Some(icon) = site.manifest.as_ref().and_then(|m| m.icon.as_deref()) else {
        return;
    };

    if !Path::new(icon).starts_with(STATIC_DIR) {
        report.warnings.push(format!(
            "Manifest icon '{}' is outside {}/ and will not be published",
            icon, STATIC_DIR
        ));
    }

    let icon_path = root.join(icon);
    if !icon_path.exists() {
        report
            .warnings
            .push(format!("Manifest icon not found: {}", icon));
        return;
    }

    match image::image_dimensions(&icon_path) {
        Ok((width, height)) => {
            if width != height {
                report.warnings.push(format!(
                    "Manifest icon should be square, got {}x{}",
                    width, height
                ));
            } else {
                report
                    .info
                    .push(format!("Manifest icon: {}x{}", width, height));
            }
        }
        Err(e) => {
            tracing::debug!(icon, error = %e, "icon decode failed");
            report
                .warnings
                .push(format!("Manifest icon could not be read as an image: {}", e));
        }
    }
}
