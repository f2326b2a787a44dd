use crate::navigation::{NavSurface, SurfaceKind};
use leptos::prelude::*;

/// Render a navigation surface to HTML
pub fn nav_surface_html(surface: &NavSurface) -> String {
    nav_surface_view(surface).to_html()
}

/// Navigation surface view.
///
/// The header and the mobile menu both go through here; they differ only by
/// the surface options (class, Home entry, icon colour).
pub fn nav_surface_view(surface: &NavSurface) -> impl IntoView + use<> {
    let class = match surface.options.kind {
        SurfaceKind::Header => "nav nav-header",
        SurfaceKind::MobileMenu => "nav nav-mobile",
    };
    let icon_style = format!("color: {}", surface.options.accent_color);
    let show_icons = surface.options.kind == SurfaceKind::MobileMenu;

    let items = surface
        .items()
        .into_iter()
        .map(|item| {
            let name = item.name().to_string();
            let link = item.link().to_string();
            let icon = show_icons.then(|| {
                let icon = item.icon().to_string();
                let style = icon_style.clone();
                view! { <span class="nav-icon" data-icon=icon style=style aria-hidden="true"></span> }
            });
            view! {
                <a href=link class="nav-item">
                    {icon}
                    <span class="nav-label">{name}</span>
                </a>
            }
        })
        .collect_view();

    view! { <nav class=class>{items}</nav> }
}
