//! Site navigation entries and href classification.
//!
//! The header nav and the mobile menu render the same links, so the table
//! lives here. Each href is classified before dispatch: in-page anchors are
//! smooth-scrolled, router paths are left to the router, and absolute URLs
//! leave the app entirely.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Id of the contact section. Booking flows scroll here.
pub const CONTACT_SECTION_ID: &str = "contact";

/// A navigation entry shared by the header nav and the mobile menu.
#[derive(Clone, Copy, Debug)]
pub struct SiteLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The site's navigation, in display order.
pub const SITE_LINKS: &[SiteLink] = &[
    SiteLink { label: "Home", href: "#home" },
    SiteLink { label: "About", href: "#about" },
    SiteLink { label: "Services", href: "#services" },
    SiteLink { label: "Gallery", href: "#gallery" },
    SiteLink { label: "Price List", href: "/pricelist" },
    SiteLink { label: "Contact", href: "#contact" },
];

/// What following a link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Scroll to the section with this id on the home page.
    Anchor(&'a str),
    /// Let the client-side router handle this path.
    Route(&'a str),
    /// An absolute URL outside the app.
    External(&'a str),
}

/// Classify an href by shape. `#about` and `/#about` are anchors, `http(s)`
/// URLs are external, anything else is a router path.
#[must_use]
pub fn classify_href(href: &str) -> LinkTarget<'_> {
    if let Some(anchor) = href.strip_prefix("/#").or_else(|| href.strip_prefix('#')) {
        return LinkTarget::Anchor(anchor);
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return LinkTarget::External(href);
    }
    LinkTarget::Route(href)
}

/// Whether a router pathname is the home page, where the anchor sections live.
#[must_use]
pub fn is_home_path(path: &str) -> bool {
    path.is_empty() || path == "/"
}
