//! Leptos SSR render surfaces. Each function turns one region of a
//! [`crate::layout::PageComposition`] into an HTML fragment.

mod footer;
mod head;
mod header;
mod nav;
mod pages;
mod side_menu;

pub use footer::footer_html;
pub use head::head_html;
pub use header::header_html;
pub use nav::nav_surface_html;
pub use pages::{article_html, error_html, hero_html, not_found_html};
pub use side_menu::side_menu_html;
