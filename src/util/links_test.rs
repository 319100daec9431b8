use super::*;

#[test]
fn classify_href_detects_anchors() {
    assert_eq!(classify_href("#about"), LinkTarget::Anchor("about"));
    assert_eq!(classify_href("/#services"), LinkTarget::Anchor("services"));
    assert_eq!(classify_href("#"), LinkTarget::Anchor(""));
}

#[test]
fn classify_href_detects_external_urls() {
    assert_eq!(
        classify_href("https://instagram.com/edenroots"),
        LinkTarget::External("https://instagram.com/edenroots")
    );
    assert_eq!(
        classify_href("http://example.com"),
        LinkTarget::External("http://example.com")
    );
}

#[test]
fn classify_href_treats_paths_as_routes() {
    assert_eq!(classify_href("/pricelist"), LinkTarget::Route("/pricelist"));
    assert_eq!(classify_href("/"), LinkTarget::Route("/"));
}

#[test]
fn site_links_cover_every_home_section() {
    let anchors: Vec<&str> = SITE_LINKS
        .iter()
        .filter_map(|link| match classify_href(link.href) {
            LinkTarget::Anchor(id) => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(anchors, vec!["home", "about", "services", "gallery", "contact"]);
}

#[test]
fn site_links_route_to_the_price_list() {
    let routes: Vec<&str> = SITE_LINKS
        .iter()
        .filter_map(|link| match classify_href(link.href) {
            LinkTarget::Route(path) => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(routes, vec!["/pricelist"]);
}

#[test]
fn is_home_path_accepts_root_and_empty() {
    assert!(is_home_path("/"));
    assert!(is_home_path(""));
    assert!(!is_home_path("/pricelist"));
}
