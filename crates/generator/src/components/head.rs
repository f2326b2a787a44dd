use leptos::prelude::*;
use shelf_site_core::{MetaKey, ResolvedMetaTags};

/// `<title>` plus the meta tags, in the order the merger produced them
pub fn head_html(head: &ResolvedMetaTags) -> String {
    let title = head.title.clone();
    let tags = head
        .tags
        .iter()
        .map(|tag| {
            let (name, property) = match &tag.key {
                MetaKey::Name(name) => (Some(name.clone()), None),
                MetaKey::Property(property) => (None, Some(property.clone())),
            };
            let content = tag.content.clone();
            // `property` is not a known attribute on <meta>; unset keys are omitted
            leptos::html::meta()
                .attr("name", name)
                .attr("property", property)
                .attr("content", content)
        })
        .collect_view();

    view! {
        <title>{title}</title>
        {tags}
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_site_core::MetaTag;

    #[test]
    fn test_head_keeps_tag_order() {
        let head = ResolvedMetaTags {
            language: "en".to_string(),
            title: "Installation | Shelf".to_string(),
            tags: vec![
                MetaTag::name("description", "Install"),
                MetaTag::property("og:title", "Installation"),
                MetaTag::name("robots", ""),
            ],
        };
        let html = head_html(&head);

        assert!(html.contains("<title>Installation | Shelf</title>"));
        let description = html.find("name=\"description\"").unwrap();
        let og = html.find("property=\"og:title\"").unwrap();
        let robots = html.find("name=\"robots\"").unwrap();
        assert!(description < og && og < robots);
        assert!(html.contains("content=\"\""));
        assert!(!html.contains("property=\"description\""));
    }

    #[test]
    fn test_property_tags_have_no_name() {
        let head = ResolvedMetaTags {
            language: "en".to_string(),
            title: "Shelf".to_string(),
            tags: vec![MetaTag::property("og:type", "website")],
        };
        let html = head_html(&head);
        assert!(html.contains("property=\"og:type\""));
        assert!(html.contains("content=\"website\""));
        assert!(!html.contains("name="));
    }

    #[test]
    fn test_head_escapes_content() {
        let head = ResolvedMetaTags {
            language: "en".to_string(),
            title: "A <b> title".to_string(),
            tags: vec![MetaTag::name("description", "\"quoted\"")],
        };
        let html = head_html(&head);
        assert!(html.contains("A &lt;b&gt; title"));
        assert!(html.contains("content=\"&quot;quoted&quot;\""));
    }
}
