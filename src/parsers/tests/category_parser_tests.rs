use super::selectors;
use crate::parsers::categories::parse_categories;
use url::Url;

const DIRECTORY: &str = r#"
<html><body>
  <ul class="mntl-link-list">
    <li><a class="mntl-link-list__link" href="https://example.test/italian">
        Italian
    </a></li>
    <li><a class="mntl-link-list__link" href="/recipes/mexican/">  Mexican </a></li>
    <li><a class="mntl-link-list__link">Orphan</a></li>
    <li><a class="other-link" href="https://example.test/about">About</a></li>
  </ul>
</body></html>
"#;

#[test]
fn test_categories_in_page_order() {
    let page = Url::parse("https://example.test/cuisine-a-z").unwrap();
    let extraction = parse_categories(DIRECTORY, &page, &selectors());

    let names: Vec<&str> = extraction.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Italian", "Mexican"]);
    assert_eq!(extraction.items[0].link, "https://example.test/italian");
}

#[test]
fn test_relative_links_become_absolute() {
    let page = Url::parse("https://example.test/cuisine-a-z").unwrap();
    let extraction = parse_categories(DIRECTORY, &page, &selectors());

    assert_eq!(
        extraction.items[1].link,
        "https://example.test/recipes/mexican/"
    );
    for entry in &extraction.items {
        assert!(!entry.name.trim().is_empty());
        assert!(Url::parse(&entry.link).is_ok());
    }
}

#[test]
fn test_anchor_without_href_is_reported() {
    let page = Url::parse("https://example.test/cuisine-a-z").unwrap();
    let extraction = parse_categories(DIRECTORY, &page, &selectors());

    assert_eq!(extraction.failures.len(), 1);
    assert!(extraction.failures[0].item.contains("Orphan"));
}

#[test]
fn test_no_matches_yields_empty() {
    let page = Url::parse("https://example.test/").unwrap();
    let extraction = parse_categories(
        "<html><body><p>down</p></body></html>",
        &page,
        &selectors(),
    );
    assert!(extraction.items.is_empty());
    assert!(extraction.failures.is_empty());
}

#[test]
fn test_base_element_sets_link_base() {
    let html = r#"
<html><head><base href="https://cdn.example.test/world/"></head><body>
  <a class="mntl-link-list__link" href="thai/">Thai</a>
  <a class="mntl-link-list__link" href="/korean/">Korean</a>
</body></html>
"#;
    let page = Url::parse("https://example.test/cuisine-a-z").unwrap();
    let extraction = parse_categories(html, &page, &selectors());

    let links: Vec<&str> = extraction.items.iter().map(|c| c.link.as_str()).collect();
    assert_eq!(
        links,
        vec![
            "https://cdn.example.test/world/thai/",
            "https://cdn.example.test/korean/"
        ]
    );
}
