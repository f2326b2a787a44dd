use crate::components::{footer_html, head_html, header_html, nav_surface_html, side_menu_html};
use crate::layout::PageComposition;
use leptos::prelude::*;

pub const STYLESHEET_PATH: &str = "style.css";
pub const MANIFEST_PATH: &str = "manifest.webmanifest";

/// Document-level settings that are not part of a page composition
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Link the web app manifest from the head
    pub manifest: bool,
    /// Inject the preview server's live-reload script
    pub live_reload: bool,
}

const LIVE_RELOAD_SCRIPT: &str = r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#;

/// Serialize a page composition into a complete HTML document.
///
/// Regions are emitted top to bottom: head metadata, header, optional side
/// menu beside the body, footer, mobile menu.
pub fn render_document(page: &PageComposition, options: &RenderOptions) -> String {
    let head = head_html(&page.head);
    let header = header_html(&page.header);
    let side_menu = page
        .side_menu
        .as_ref()
        .map(side_menu_html)
        .unwrap_or_default();
    let footer = footer_html(&page.footer);
    let mobile_menu = nav_surface_html(&page.mobile_menu);

    let manifest_link = if options.manifest {
        format!(r#"<link rel="manifest" href="/{}">"#, MANIFEST_PATH)
    } else {
        String::new()
    };
    let reload_script = if options.live_reload {
        LIVE_RELOAD_SCRIPT
    } else {
        ""
    };
    let main_class = if page.side_menu.is_some() {
        "main main-with-side-menu"
    } else {
        "main"
    };

    let head_inner = format!(
        r#"<meta charset="UTF-8">
    {}
    <link rel="stylesheet" href="/{}">
    {}"#,
        head, STYLESHEET_PATH, manifest_link,
    );
    let body_inner = format!(
        r#"<div class="page">
        {}
        <div class="{}">
            {}
            <main class="content">{}</main>
        </div>
        {}
        <div class="mobile-menu-placeholder"></div>
        <div class="mobile-menu">{}</div>
    </div>
    {}"#,
        header,
        main_class,
        side_menu,
        page.body.as_html(),
        footer,
        mobile_menu,
        reload_script,
    );
    let language = page.head.language.clone();

    let document = view! {
        <html lang=language>
            <head inner_html=head_inner></head>
            <body inner_html=body_inner></body>
        </html>
    }
    .to_html();

    format!("<!DOCTYPE html>\n{}\n", document)
}
