//! Head metadata: site defaults merged with per-page overrides.

use shelf_site_core::{DEFAULT_LANGUAGE, MetaTag, PageMetaOverride, ResolvedMetaTags, SiteMetadata};

pub const VIEWPORT: &str = "width=device-width, initial-scale=1.0, viewport-fit=cover";

/// Merge site-wide defaults with one page's overrides.
///
/// The page title, when present, is rendered as `"<page> | <site>"`; otherwise
/// the site title is used alone. Base tags come first in a fixed order and
/// `page.extra_tags` are appended verbatim. Empty values are still emitted.
pub fn merge(site: &SiteMetadata, page: &PageMetaOverride) -> ResolvedMetaTags {
    let title = match &page.title {
        Some(title) => format!("{} | {}", title, site.title),
        None => site.title.clone(),
    };
    let social_title = page.title.as_deref().unwrap_or(&site.title);
    let description = page.description.as_deref().unwrap_or(&site.description);
    let language = page
        .language
        .clone()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let mut tags = vec![
        MetaTag::name("viewport", VIEWPORT),
        MetaTag::name("description", description),
        MetaTag::property("og:title", social_title),
        MetaTag::property("og:description", description),
        MetaTag::property("og:type", "website"),
        MetaTag::name("twitter:card", "summary"),
        MetaTag::name("twitter:creator", site.author.as_str()),
        MetaTag::name("twitter:title", social_title),
        MetaTag::name("twitter:description", description),
    ];
    tags.extend(page.extra_tags.iter().cloned());

    ResolvedMetaTags {
        language,
        title,
        tags,
    }
}
