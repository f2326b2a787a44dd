use serde_json::json;
use shelf_site_core::{ManifestConfig, Theme};
use std::path::Path;

/// Site stylesheet. Only the layout of the regions and the accent colour
/// are styled.
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        r#":root {{
    --accent: {accent};
    --base-100: #ffffff;
    --base-content: #222222;
    --mobile-menu-height: 64px;
}}
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: var(--base-content);
    background: var(--base-100);
}}
a {{ color: var(--accent); }}
.header {{
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 1rem 2rem;
    background: var(--accent);
}}
.header a {{ color: #ffffff; text-decoration: none; }}
.header-title {{ font-size: 1.4rem; font-weight: bold; }}
.nav {{ display: flex; gap: 1rem; }}
.repository-corner {{ margin-left: auto; }}
.main {{ max-width: 1100px; margin: 0 auto; padding: 2rem; }}
.main-with-side-menu {{ display: grid; grid-template-columns: 220px 1fr; gap: 2rem; }}
.side-menu ul {{ list-style: none; }}
.side-menu-item.active {{ font-weight: bold; }}
.hero {{ padding: 4rem 0; text-align: center; }}
.hero-button {{
    display: inline-block;
    margin-top: 1.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 4px;
    background: var(--accent);
    color: #ffffff;
    text-decoration: none;
}}
.footer {{ padding: 2rem; border-top: 1px solid #eeeeee; }}
.footer-links {{ display: flex; gap: 3rem; }}
.footer-links-column {{ display: flex; flex-direction: column; }}
.footer-copyright {{ margin-top: 1rem; color: #999999; font-size: 0.9rem; }}
.mobile-menu, .mobile-menu-placeholder {{ display: none; }}
@media (max-width: 768px) {{
    .header .nav {{ display: none; }}
    .main-with-side-menu {{ grid-template-columns: 1fr; }}
    .mobile-menu-placeholder {{ display: block; height: var(--mobile-menu-height); }}
    .mobile-menu {{
        display: block;
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        height: var(--mobile-menu-height);
        background: var(--base-100);
        box-shadow: 0 -2px 8px rgba(0, 0, 0, 0.1);
    }}
    .nav-mobile {{ justify-content: space-around; height: 100%; align-items: center; }}
    .nav-mobile .nav-item {{ display: flex; flex-direction: column; align-items: center; text-decoration: none; }}
}}
"#,
        accent = theme.accent_color
    )
}

/// Web app manifest JSON
pub fn manifest_json(manifest: &ManifestConfig) -> String {
    let icons = match &manifest.icon {
        Some(icon) => {
            let src = icon_url(icon);
            let mime = mime_guess::from_path(icon)
                .first_or_octet_stream()
                .to_string();
            json!([{ "src": src, "type": mime }])
        }
        None => json!([]),
    };

    let value = json!({
        "name": manifest.name,
        "short_name": manifest.short_name,
        "start_url": manifest.start_url,
        "background_color": manifest.background_color,
        "theme_color": manifest.theme_color,
        "display": manifest.display,
        "icons": icons,
    });

    // A json! value always serializes
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Icons are served from the static directory, which is copied to the
/// output root
pub fn icon_url(icon: &str) -> String {
    let relative = Path::new(icon)
        .strip_prefix(STATIC_DIR)
        .unwrap_or(Path::new(icon));
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", segments.join("/"))
}

pub const STATIC_DIR: &str = "static";
