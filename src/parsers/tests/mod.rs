mod card_parser_tests;
mod category_parser_tests;
mod recipe_parser_tests;

use crate::config::SiteSelectors;
use crate::parsers::Selectors;

fn selectors() -> Selectors {
    Selectors::compile(&SiteSelectors::default()).unwrap()
}
