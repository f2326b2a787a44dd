//! Page Layout and Content Page Layout.
//!
//! Both layouts are plain functions from (site metadata, props, body) to a
//! [`PageComposition`]. Rendering the composition to markup is left to
//! [`crate::render`].

use crate::components;
use crate::content::ContentSource;
use crate::navigation::{NavSurface, build_navigation};
use crate::seo;
use shelf_site_core::{
    Error, FooterLink, MetaTag, MetadataStore, PageMetaOverride, RenderError, ResolvedMetaTags,
    SideMenuEntry, SiteMetadata,
};

pub const REPOSITORY_LABEL: &str = "GitHub";

/// Assembled regions of one page, top to bottom
#[derive(Debug, Clone)]
pub struct PageComposition {
    /// Head-only metadata, not visually rendered
    pub head: ResolvedMetaTags,
    pub header: HeaderRegion,
    pub side_menu: Option<SideMenu>,
    pub body: PageBody,
    pub footer: FooterRegion,
    pub mobile_menu: NavSurface,
}

#[derive(Debug, Clone)]
pub struct HeaderRegion {
    pub title: String,
    pub repository_url: String,
    pub navigation: NavSurface,
}

/// Table of contents shown beside long-form content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideMenu {
    pub entries: Vec<SideMenuEntry>,
    /// Link of the page being rendered, if it appears in `entries`
    pub active: Option<String>,
}

/// Opaque, already rendered page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBody(String);

impl PageBody {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterRegion {
    pub columns: Vec<Vec<FooterLink>>,
    pub copyright: Option<String>,
}

/// Caller-supplied inputs of a content page
#[derive(Debug, Clone, Default)]
pub struct ContentPageProps {
    pub id: String,
    pub side_menu: Vec<SideMenuEntry>,
    pub extra_tags: Vec<MetaTag>,
}

/// Compose a page around an opaque body
pub fn compose(
    store: &MetadataStore,
    props: &PageMetaOverride,
    body: PageBody,
) -> Result<PageComposition, RenderError> {
    let site = store.load()?;
    assemble(&site, props, None, body)
}

/// Compose a long-form content page: resolves the document, adds the side
/// menu, and falls back to the site title when the document has none
pub fn compose_content_page(
    store: &MetadataStore,
    source: &dyn ContentSource,
    props: &ContentPageProps,
) -> Result<PageComposition, Error> {
    let site = store.load().map_err(RenderError::from)?;
    let document = source.resolve(&props.id)?;

    let mut extra_tags = Vec::with_capacity(props.extra_tags.len() + 1);
    if let Some(date) = document.frontmatter.date {
        extra_tags.push(MetaTag::property(
            "article:published_time",
            date.format("%Y-%m-%d").to_string(),
        ));
    }
    extra_tags.extend(props.extra_tags.iter().cloned());

    let meta = PageMetaOverride {
        title: document.frontmatter.title.clone(),
        description: document.frontmatter.description.clone(),
        language: None,
        extra_tags,
    };

    let url = document.url();
    let active = props
        .side_menu
        .iter()
        .any(|entry| entry.link.trim_end_matches('/') == url)
        .then_some(url);
    let side_menu = SideMenu {
        entries: props.side_menu.clone(),
        active,
    };

    let body = PageBody::from_html(components::article_html(&document));
    Ok(assemble(&site, &meta, Some(side_menu), body)?)
}

fn assemble(
    site: &SiteMetadata,
    props: &PageMetaOverride,
    side_menu: Option<SideMenu>,
    body: PageBody,
) -> Result<PageComposition, RenderError> {
    let head = seo::merge(site, props);

    let navigation = build_navigation(site);
    if navigation.is_empty() {
        return Err(RenderError::EmptyNavigation);
    }

    let header = HeaderRegion {
        title: site.title.clone(),
        repository_url: site.repository_url.clone(),
        navigation: NavSurface::header(navigation.clone(), &site.theme),
    };
    let mobile_menu = NavSurface::mobile_menu(navigation, &site.theme);

    Ok(PageComposition {
        head,
        header,
        side_menu,
        body,
        footer: footer_region(site),
        mobile_menu,
    })
}

/// Footer columns from the config, with the repository link added to the
/// last column unless it is already listed
fn footer_region(site: &SiteMetadata) -> FooterRegion {
    let mut columns = site.footer.columns.clone();
    let repository = site.repository_url.trim();

    if !repository.is_empty()
        && !columns
            .iter()
            .flatten()
            .any(|link| link.href.trim_end_matches('/') == repository.trim_end_matches('/'))
    {
        let link = FooterLink {
            label: REPOSITORY_LABEL.to_string(),
            href: repository.to_string(),
        };
        match columns.last_mut() {
            Some(column) => column.push(link),
            None => columns.push(vec![link]),
        }
    }

    FooterRegion {
        columns,
        copyright: site.footer.copyright.clone(),
    }
}
