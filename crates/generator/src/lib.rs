// Static site generation with Leptos SSR

pub mod assets;
pub mod components;
pub mod content;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod seo;

use content::ContentSource;
use layout::{ContentPageProps, PageBody, compose, compose_content_page};
use render::{MANIFEST_PATH, RenderOptions, STYLESHEET_PATH, render_document};
use shelf_site_core::{Error, MetadataStore, PageMetaOverride, Result, content_output_path};

pub const INDEX_PATH: &str = "index.html";
pub const NOT_FOUND_PATH: &str = "404.html";
pub const INDEX_TITLE: &str = "Home";
pub const NOT_FOUND_TITLE: &str = "404: Not found";

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
    /// Content pages that could not be resolved; the rest of the site is
    /// still generated
    pub failures: Vec<PageFailure>,
}

#[derive(Debug)]
pub struct PageFailure {
    pub id: String,
    pub error: Error,
}

impl GeneratedSite {
    pub fn page(&self, path: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, html)| html.as_str())
    }

    pub fn asset(&self, path: &str) -> Option<&[u8]> {
        self.assets
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data.as_slice())
    }
}

/// Generate every page and asset of a site.
///
/// Metadata and composition errors abort the whole build. A content page
/// whose document cannot be resolved is recorded in
/// [`GeneratedSite::failures`] and skipped.
pub fn generate_site(
    store: &MetadataStore,
    source: &dyn ContentSource,
    live_reload: bool,
) -> Result<GeneratedSite> {
    let site = store.load()?;
    let options = RenderOptions {
        manifest: site.manifest.is_some(),
        live_reload,
    };

    let mut pages = Vec::new();

    let index = compose(
        store,
        &PageMetaOverride {
            title: Some(INDEX_TITLE.to_string()),
            ..Default::default()
        },
        PageBody::from_html(components::hero_html(&site)),
    )?;
    pages.push((INDEX_PATH.to_string(), render_document(&index, &options)));

    let not_found = compose(
        store,
        &PageMetaOverride {
            title: Some(NOT_FOUND_TITLE.to_string()),
            ..Default::default()
        },
        PageBody::from_html(components::not_found_html()),
    )?;
    pages.push((NOT_FOUND_PATH.to_string(), render_document(&not_found, &options)));

    let mut failures = Vec::new();
    for id in source.ids()? {
        let props = ContentPageProps {
            id: id.clone(),
            side_menu: site.docs.sections.clone(),
            extra_tags: Vec::new(),
        };
        match compose_content_page(store, source, &props) {
            Ok(page) => {
                pages.push((content_output_path(&id), render_document(&page, &options)));
            }
            Err(Error::Content(error)) => {
                tracing::warn!(id = %id, error = %error, "skipping content page");
                failures.push(PageFailure {
                    id,
                    error: Error::Content(error),
                });
            }
            Err(other) => return Err(other),
        }
    }

    let mut assets = vec![(
        STYLESHEET_PATH.to_string(),
        assets::stylesheet(&site.theme).into_bytes(),
    )];
    if let Some(manifest) = &site.manifest {
        assets.push((
            MANIFEST_PATH.to_string(),
            assets::manifest_json(manifest).into_bytes(),
        ));
    }

    tracing::info!(
        pages = pages.len(),
        assets = assets.len(),
        failures = failures.len(),
        "generated site"
    );

    Ok(GeneratedSite {
        pages,
        assets,
        failures,
    })
}
