use crate::layout::SideMenu;
use leptos::prelude::*;

/// Table of contents beside long-form content. The active entry is marked
/// with `aria-current`.
pub fn side_menu_html(menu: &SideMenu) -> String {
    let entries = menu
        .entries
        .iter()
        .map(|entry| {
            let is_active = menu.active.as_deref() == Some(entry.link.trim_end_matches('/'));
            let class = if is_active {
                "side-menu-item active"
            } else {
                "side-menu-item"
            };
            let current = is_active.then_some("page");
            let href = entry.link.clone();
            let title = entry.title.clone();
            view! {
                <li>
                    <a href=href class=class aria-current=current>{title}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="side-menu">
            <ul>{entries}</ul>
        </aside>
    }
    .to_html()
}
