use anyhow::{Context, Result};
use shelf_site_validator::{CONFIG_FILE, CONTENT_DIR, STATIC_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for a TOML basic string.
///
/// The scaffold is written as text so that it keeps its comments, which
/// the toml serializer would drop.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Human-readable site title from a directory name.
///
/// - `shelf-docs` → "Shelf Docs"
/// - `my_site` → "My Site"
fn title_from_dir(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .replace(['_', '-'], " ");

    let words: Vec<String> = name
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect();

    if words.is_empty() {
        "My Site".to_string()
    } else {
        words.join(" ")
    }
}

/// Initialize a new site directory.
///
/// Writes `site.toml` with one menu entry and one docs section, a first
/// content page under `content/docs/` and an empty `static/` directory.
/// Refuses to run when `site.toml` already exists.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE,
            config_path.display()
        );
    }

    fs::create_dir_all(path.join(CONTENT_DIR).join("docs"))
        .context("Failed to create content directory")?;
    fs::create_dir_all(path.join(STATIC_DIR)).context("Failed to create static directory")?;

    let title = title_from_dir(&path);
    fs::write(&config_path, site_toml(&title)).context("Failed to write site.toml")?;
    println!("   ✓ Created {}", CONFIG_FILE);

    let first_page = path.join(CONTENT_DIR).join("docs").join("installation.md");
    if !first_page.exists() {
        fs::write(&first_page, INSTALLATION_TEMPLATE)
            .context("Failed to write installation page")?;
        println!("   ✓ Created content/docs/installation.md");
    }

    println!("\n✓ Site initialized");
    println!("\nNext steps:");
    println!("  1. Edit {}", CONFIG_FILE);
    println!("  2. Add markdown pages to content/");
    println!("  3. Run: shelf-site preview {}", path.display());

    Ok(())
}

fn site_toml(title: &str) -> String {
    format!(
        r##"[site]
title = "{title}"
description = "Documentation for {title}"
# author = ""
# repository = "https://github.com/you/project"

# Entries shown in the header and in the mobile menu
[[menu]]
name = "Docs"
link = "/docs/installation"
icon = "book"

[theme]
accent_color = "#1D4350"

[home]
cta_label = "Get started"
cta_link = "/docs/installation"

# Side menu on content pages
[[docs.section]]
title = "Installation"
link = "/docs/installation"

[footer]
# copyright = "© You"

# [[footer.column]]
# links = [{{ label = "Docs", href = "/docs/installation" }}]

# Web app manifest; the icon must live under static/
# [manifest]
# name = "{title}"
# short_name = "{title}"
# start_url = "/"
# background_color = "#ffffff"
# theme_color = "#1D4350"
# display = "minimal-ui"
# icon = "static/icon.png"
"##,
        title = toml_escape_string(title)
    )
}

const INSTALLATION_TEMPLATE: &str = r#"---
title: Installation
description: How to install
---

# Installation

Describe how to install your project here.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_site_core::parse_site_toml;
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("plain"), "plain");
        assert_eq!(toml_escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(toml_escape_string("a\\b"), "a\\\\b");
        assert_eq!(toml_escape_string("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_title_from_dir() {
        assert_eq!(title_from_dir(Path::new("/tmp/shelf-docs")), "Shelf Docs");
        assert_eq!(title_from_dir(Path::new("my_site")), "My Site");
        assert_eq!(title_from_dir(Path::new("/")), "My Site");
    }

    #[tokio::test]
    async fn test_init_scaffold_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shelf-docs");

        run(path.clone()).await.unwrap();

        assert!(path.join("content/docs/installation.md").exists());
        assert!(path.join("static").is_dir());

        let site = parse_site_toml(&path.join("site.toml")).unwrap();
        assert_eq!(site.title, "Shelf Docs");
        assert_eq!(site.menu_entries.len(), 1);
        assert_eq!(site.docs.sections.len(), 1);
        assert!(site.home.call_to_action.is_some());
    }

    #[tokio::test]
    async fn test_init_refuses_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.toml"), "[site]\n").unwrap();

        let err = run(temp.path().to_path_buf()).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(temp.path().join("site.toml")).unwrap(),
            "[site]\n"
        );
    }

    #[tokio::test]
    async fn test_init_quotes_in_title() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("say\"hi");
        run(path.clone()).await.unwrap();

        let site = parse_site_toml(&path.join("site.toml")).unwrap();
        assert_eq!(site.title, "Say\"hi");
    }
}
