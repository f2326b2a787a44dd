use anyhow::{Context, Result};
use shelf_site_core::MetadataStore;
use shelf_site_generator::content::DirectorySource;
use shelf_site_generator::{GeneratedSite, generate_site};
use shelf_site_validator::{CONFIG_FILE, CONTENT_DIR, STATIC_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Metadata store and content source for a site directory
pub fn open_site(path: &Path) -> Result<(MetadataStore, DirectorySource)> {
    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'shelf-site init {}' first",
            CONFIG_FILE,
            path.display(),
            path.display()
        );
    }

    Ok((
        MetadataStore::new(config_path),
        DirectorySource::new(path.join(CONTENT_DIR)),
    ))
}

/// Build static site
pub async fn run(path: PathBuf, output: PathBuf, keep_going: bool) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let (store, source) = open_site(&path)?;
    let site = store.load().context("Failed to load site.toml")?;
    println!("✓ Loaded: {}", site.title);
    println!("  Menu entries: {}", site.menu_entries.len());
    println!();

    let generated = generate_site(&store, &source, false).context("Failed to generate site")?;

    if !generated.failures.is_empty() {
        for failure in &generated.failures {
            eprintln!("   ⚠ {}: {}", failure.id, failure.error);
        }
        if !keep_going {
            anyhow::bail!(
                "{} content page(s) failed; rerun with --keep-going to write the rest",
                generated.failures.len()
            );
        }
    }

    println!("📁 Creating output directory...");
    fs::create_dir_all(&output).context("Failed to create output directory")?;

    println!("📄 Writing pages...");
    let written = write_site(&generated, &output)?;
    println!("   ✓ Wrote {} files", written);

    println!("📦 Copying static files...");
    let copied = copy_static(&path.join(STATIC_DIR), &output, &generated)?;
    println!("   ✓ Copied {} static files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

fn write_site(generated: &GeneratedSite, output: &Path) -> Result<usize> {
    let files = generated
        .pages
        .iter()
        .map(|(p, html)| (p, html.as_bytes()))
        .chain(generated.assets.iter().map(|(p, data)| (p, data.as_slice())));

    let mut written = 0;
    for (relative, data) in files {
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
        tracing::debug!(path = %dst.display(), "wrote");
        written += 1;
    }
    Ok(written)
}

/// Copy the static directory into the output root, keeping its layout.
///
/// Generated pages and assets win over static files at the same path, as
/// they do in preview.
fn copy_static(static_dir: &Path, output: &Path, generated: &GeneratedSite) -> Result<usize> {
    if !static_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(static_dir)?;
        let site_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if generated.page(&site_path).is_some() || generated.asset(&site_path).is_some() {
            eprintln!(
                "   ⚠ Skipping static/{}: a generated file has the same path",
                site_path
            );
            continue;
        }
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SITE: &str = r#"
[site]
title = "Shelf"
description = "The GraphQL Database!"

[[menu]]
name = "Docs"
link = "/docs/installation"
icon = "book"
"#;

    fn site_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE).unwrap();
        fs::create_dir_all(dir.path().join("content/docs")).unwrap();
        fs::write(
            dir.path().join("content/docs/installation.md"),
            "---\ntitle: Installation\n---\n# Install\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("static/images")).unwrap();
        fs::write(dir.path().join("static/images/logo.svg"), "<svg/>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_build_writes_pages_assets_and_static() {
        let site = site_dir();
        let out = TempDir::new().unwrap();

        run(site.path().to_path_buf(), out.path().to_path_buf(), false)
            .await
            .unwrap();

        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("404.html").exists());
        assert!(out.path().join("docs/installation/index.html").exists());
        assert!(out.path().join("style.css").exists());
        assert!(out.path().join("images/logo.svg").exists());
        assert!(!out.path().join("manifest.webmanifest").exists());

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Home | Shelf</title>"));
        assert!(!index.contains("EventSource"));
    }

    #[tokio::test]
    async fn test_build_fails_on_broken_content_unless_keep_going() {
        let site = site_dir();
        fs::write(
            site.path().join("content/docs/broken.md"),
            "---\ntitle: never closed\n",
        )
        .unwrap();

        let out = TempDir::new().unwrap();
        let result = run(site.path().to_path_buf(), out.path().to_path_buf(), false).await;
        assert!(result.is_err());
        assert!(!out.path().join("index.html").exists());

        run(site.path().to_path_buf(), out.path().to_path_buf(), true)
            .await
            .unwrap();
        assert!(out.path().join("docs/installation/index.html").exists());
        assert!(!out.path().join("docs/broken/index.html").exists());
    }

    #[tokio::test]
    async fn test_generated_files_win_over_static() {
        let site = site_dir();
        fs::write(site.path().join("static/index.html"), "STALE").unwrap();
        fs::write(site.path().join("static/style.css"), "STALE").unwrap();
        let out = TempDir::new().unwrap();

        run(site.path().to_path_buf(), out.path().to_path_buf(), false)
            .await
            .unwrap();

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Home | Shelf</title>"));
        let css = fs::read_to_string(out.path().join("style.css")).unwrap();
        assert_ne!(css, "STALE");
        assert!(out.path().join("images/logo.svg").exists());
    }

    #[tokio::test]
    async fn test_build_without_config_fails() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let err = run(site.path().to_path_buf(), out.path().to_path_buf(), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("site.toml not found"));
    }
}
