//! Primary navigation shared by the header and the mobile menu.
//!
//! Both surfaces are built from the same [`Navigation`], which holds the
//! site's `Arc<[MenuEntry]>` itself rather than a copy. The only difference a
//! surface may introduce is the synthetic Home entry of the mobile menu, and
//! that is an explicit [`SurfaceOptions`] switch.

use shelf_site_core::{MenuEntry, SiteMetadata, Theme};
use std::sync::Arc;

pub const HOME_NAME: &str = "Home";
pub const HOME_LINK: &str = "/";
pub const HOME_ICON: &str = "home";

/// Ordered navigation entries of a site
#[derive(Debug, Clone)]
pub struct Navigation {
    entries: Arc<[MenuEntry]>,
}

impl Navigation {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when both values share the same underlying sequence
    pub fn same_source(&self, other: &Navigation) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Build the navigation from the site's menu entries
pub fn build_navigation(site: &SiteMetadata) -> Navigation {
    Navigation {
        entries: Arc::clone(&site.menu_entries),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Header,
    MobileMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub kind: SurfaceKind,
    /// Prepend a synthetic Home entry
    pub home_entry: bool,
    pub accent_color: String,
}

/// One render surface of the navigation
#[derive(Debug, Clone)]
pub struct NavSurface {
    pub navigation: Navigation,
    pub options: SurfaceOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem<'a> {
    Home,
    Entry(&'a MenuEntry),
}

impl NavItem<'_> {
    pub fn name(&self) -> &str {
        match self {
            NavItem::Home => HOME_NAME,
            NavItem::Entry(entry) => &entry.name,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            NavItem::Home => HOME_LINK,
            NavItem::Entry(entry) => &entry.link,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            NavItem::Home => HOME_ICON,
            NavItem::Entry(entry) => &entry.icon,
        }
    }
}

impl NavSurface {
    /// Wide-viewport header surface, never with a Home entry
    pub fn header(navigation: Navigation, theme: &Theme) -> Self {
        Self {
            navigation,
            options: SurfaceOptions {
                kind: SurfaceKind::Header,
                home_entry: false,
                accent_color: theme.accent_color.clone(),
            },
        }
    }

    /// Narrow-viewport menu, led by a Home entry
    pub fn mobile_menu(navigation: Navigation, theme: &Theme) -> Self {
        Self {
            navigation,
            options: SurfaceOptions {
                kind: SurfaceKind::MobileMenu,
                home_entry: true,
                accent_color: theme.accent_color.clone(),
            },
        }
    }

    pub fn items(&self) -> Vec<NavItem<'_>> {
        let home = self.options.home_entry.then_some(NavItem::Home);
        home.into_iter()
            .chain(self.navigation.entries().iter().map(NavItem::Entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> SiteMetadata {
        SiteMetadata::new(
            "Shelf",
            "The GraphQL Database!",
            vec![
                MenuEntry::new("Docs", "/docs", "book"),
                MenuEntry::new("Blog", "/blog", "rss"),
            ],
        )
    }

    fn names(surface: &NavSurface) -> Vec<String> {
        surface.items().iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_build_navigation_preserves_order_and_source() {
        let site = shelf();
        let nav = build_navigation(&site);
        assert_eq!(nav.entries(), &site.menu_entries[..]);
        assert!(Arc::ptr_eq(&nav.entries, &site.menu_entries));
    }

    #[test]
    fn test_build_navigation_many_entries_identity_of_order() {
        let entries: Vec<MenuEntry> = (0..20)
            .map(|i| MenuEntry::new(format!("Entry {i}"), format!("/e/{i}"), "link"))
            .collect();
        let site = SiteMetadata::new("Shelf", "db", entries.clone());
        assert_eq!(build_navigation(&site).entries(), entries.as_slice());
    }

    #[test]
    fn test_header_and_mobile_scenario() {
        let site = shelf();
        let nav = build_navigation(&site);
        let header = NavSurface::header(nav.clone(), &site.theme);
        let mobile = NavSurface::mobile_menu(nav, &site.theme);

        assert_eq!(names(&header), vec!["Docs", "Blog"]);
        assert_eq!(names(&mobile), vec!["Home", "Docs", "Blog"]);
        assert!(header.navigation.same_source(&mobile.navigation));
    }

    #[test]
    fn test_mobile_without_home_equals_header() {
        let site = shelf();
        let nav = build_navigation(&site);
        let header = NavSurface::header(nav.clone(), &site.theme);
        let mobile = NavSurface::mobile_menu(nav, &site.theme);

        let mut mobile_items = mobile.items();
        assert_eq!(mobile_items.first(), Some(&NavItem::Home));
        mobile_items.remove(0);
        assert_eq!(mobile_items, header.items());
        assert!(!mobile_items.contains(&NavItem::Home));
    }

    #[test]
    fn test_home_item_values() {
        assert_eq!(NavItem::Home.link(), "/");
        assert_eq!(NavItem::Home.icon(), "home");
    }

    #[test]
    fn test_empty_navigation() {
        let site = SiteMetadata::new("Shelf", "db", vec![]);
        let nav = build_navigation(&site);
        assert!(nav.is_empty());
        let mobile = NavSurface::mobile_menu(nav, &site.theme);
        assert_eq!(mobile.items(), vec![NavItem::Home]);
    }
}
