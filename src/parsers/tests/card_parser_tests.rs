use super::selectors;
use crate::parsers::cards::parse_recipe_cards;
use url::Url;

const CATEGORY_PAGE: &str = r#"
<html><body>
  <div class="mntl-card-list">
    <a class="mntl-card-list-items" href="https://example.test/recipe/1/lasagna/">
      <div class="card__content">
        <span class="card__title"><span class="card__title-text">Classic Lasagna</span></span>
      </div>
    </a>
    <a class="mntl-card-list-items" href="https://example.test/recipe/2/no-title/">
      <div class="card__content">No title here</div>
    </a>
    <a class="mntl-card-list-items" href="/recipe/3/risotto/">
      <span class="card__title-text">
        Mushroom   Risotto
      </span>
    </a>
    <a class="mntl-card-list-items">
      <span class="card__title-text">Linkless</span>
    </a>
  </div>
</body></html>
"#;

#[test]
fn test_cards_carry_category_and_order() {
    let page = Url::parse("https://example.test/italian").unwrap();
    let extraction = parse_recipe_cards(CATEGORY_PAGE, &page, "Italian", &selectors());

    assert_eq!(extraction.items.len(), 2);
    assert_eq!(extraction.items[0].recipe_name, "Classic Lasagna");
    assert_eq!(
        extraction.items[0].link,
        "https://example.test/recipe/1/lasagna/"
    );
    assert_eq!(extraction.items[1].recipe_name, "Mushroom Risotto");
    assert_eq!(
        extraction.items[1].link,
        "https://example.test/recipe/3/risotto/"
    );
    assert!(extraction.items.iter().all(|r| r.category == "Italian"));
}

#[test]
fn test_broken_cards_are_skipped_not_fatal() {
    let page = Url::parse("https://example.test/italian").unwrap();
    let extraction = parse_recipe_cards(CATEGORY_PAGE, &page, "Italian", &selectors());

    assert_eq!(extraction.failures.len(), 2);
    assert_eq!(extraction.failures[0].item, "Italian card #1");
    assert!(extraction.failures[0].reason.contains("title"));
    assert_eq!(extraction.failures[1].item, "Italian card #3");
    assert!(extraction.failures[1].reason.contains("href"));
}

#[test]
fn test_relative_base_element_joins_page_url() {
    let html = r#"
<html><head><base href="/archive/"></head><body>
  <a class="mntl-card-list-items" href="recipe/9/pho/">
    <span class="card__title-text">Pho</span>
  </a>
</body></html>
"#;
    let page = Url::parse("https://example.test/vietnamese").unwrap();
    let extraction = parse_recipe_cards(html, &page, "Vietnamese", &selectors());

    assert_eq!(
        extraction.items[0].link,
        "https://example.test/archive/recipe/9/pho/"
    );
}
