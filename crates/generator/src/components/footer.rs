use crate::layout::FooterRegion;
use leptos::prelude::*;

pub fn footer_html(region: &FooterRegion) -> String {
    let columns = region
        .columns
        .iter()
        .map(|column| {
            let links = column
                .iter()
                .map(|link| {
                    let href = link.href.clone();
                    let label = link.label.clone();
                    view! { <a href=href>{label}</a> }
                })
                .collect_view();
            view! { <div class="footer-links-column">{links}</div> }
        })
        .collect_view();

    let copyright = region.copyright.clone().map(|text| {
        view! {
            <div class="footer-copyright">
                <span>{text}</span>
            </div>
        }
    });

    view! {
        <footer class="footer">
            <div class="footer-links">{columns}</div>
            {copyright}
        </footer>
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_site_core::FooterLink;

    fn link(label: &str, href: &str) -> FooterLink {
        FooterLink {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_footer_columns_and_copyright() {
        let region = FooterRegion {
            columns: vec![
                vec![link("About", "/"), link("Installation", "/docs/installation")],
                vec![link("Docker", "https://hub.docker.com/r/example/shelf")],
            ],
            copyright: Some("Copyright 2020 Jane Doe".to_string()),
        };
        let html = footer_html(&region);

        assert_eq!(html.matches("footer-links-column").count(), 2);
        let about = html.find(">About<").unwrap();
        let install = html.find(">Installation<").unwrap();
        let docker = html.find(">Docker<").unwrap();
        assert!(about < install && install < docker);
        assert!(html.contains("Copyright 2020 Jane Doe"));
    }

    #[test]
    fn test_footer_without_copyright() {
        let region = FooterRegion {
            columns: vec![],
            copyright: None,
        };
        let html = footer_html(&region);
        assert!(html.starts_with("<footer"));
        assert!(!html.contains("footer-copyright"));
    }
}
