use super::nav::nav_surface_view;
use crate::layout::HeaderRegion;
use leptos::prelude::*;

/// Wide-viewport header: site title, navigation and the repository corner
pub fn header_html(region: &HeaderRegion) -> String {
    let title = region.title.clone();
    let nav = nav_surface_view(&region.navigation);
    let repository = (!region.repository_url.is_empty()).then(|| {
        let href = region.repository_url.clone();
        view! {
            <a href=href class="repository-corner" aria-label="View source on GitHub">
                "GitHub"
            </a>
        }
    });

    view! {
        <header class="header">
            <a href="/" class="header-title">
                <span>{title}</span>
            </a>
            {nav}
            {repository}
        </header>
    }
    .to_html()
}
