use leptos::prelude::*;
use shelf_site_core::{ContentDocument, SiteMetadata};

/// Body of a content page: optional heading and date, then the rendered
/// markdown as-is
pub fn article_html(document: &ContentDocument) -> String {
    let heading = document
        .frontmatter
        .title
        .clone()
        .map(|title| view! { <h1 class="article-title">{title}</h1> });
    let date = document.frontmatter.date.map(|date| {
        let datetime = date.format("%Y-%m-%d").to_string();
        let display = date.format("%B %-d, %Y").to_string();
        view! { <time class="article-date" datetime=datetime>{display}</time> }
    });
    let body = document.body.clone();

    view! {
        <article class="article">
            {heading}
            {date}
            <div class="article-body" inner_html=body></div>
        </article>
    }
    .to_html()
}

/// Hero section of the index page
pub fn hero_html(site: &SiteMetadata) -> String {
    let title = site.title.clone();
    let tagline = site
        .home
        .tagline
        .clone()
        .unwrap_or_else(|| site.description.clone());
    let call_to_action = site.home.call_to_action.clone().map(|cta| {
        view! {
            <a href=cta.href class="hero-button">
                <span>{cta.label}</span>
            </a>
        }
    });

    view! {
        <section class="hero">
            <h1 class="hero-title">{title}</h1>
            <h2 class="hero-subtitle">{tagline}</h2>
            {call_to_action}
        </section>
    }
    .to_html()
}

pub fn not_found_html() -> String {
    view! {
        <section class="not-found">
            <h1>"NOT FOUND"</h1>
            <p>"You just hit a route that doesn't exist... the sadness."</p>
        </section>
    }
    .to_html()
}

/// Standalone document for errors that prevent a page from being generated
pub fn error_html(message: &str) -> String {
    let message = message.to_string();
    let document = view! {
        <html lang="en">
            <head>
                <title>"Error"</title>
            </head>
            <body>
                <h1>"Site Error"</h1>
                <pre>{message}</pre>
            </body>
        </html>
    }
    .to_html();
    format!("<!DOCTYPE html>\n{}", document)
}
