use super::selectors;
use crate::parsers::recipe::parse_recipe_page;
use crate::results::NOT_AVAILABLE;

const RECIPE_PAGE: &str = r#"
<html><body>
  <div id="mm-recipes-review-bar_1-0" class="mm-recipes-review-bar">
    <div id="mm-recipes-review-bar__rating_1-0"> 4.6 </div>
    <div id="mm-recipes-review-bar__rating-count_1-0">(1,287)</div>
  </div>
  <div class="mm-recipes-details">
    <div class="mm-recipes-details__item">
      <div class="mm-recipes-details__label">Prep Time:</div>
      <div class="mm-recipes-details__value">20 mins</div>
    </div>
    <div class="mm-recipes-details__item">
      <div class="mm-recipes-details__label"> Total Time: </div>
      <div class="mm-recipes-details__value"> 1 hr 5 mins </div>
    </div>
    <div class="mm-recipes-details__item">
      <div class="mm-recipes-details__label">Servings:</div>
      <div class="mm-recipes-details__value">8</div>
    </div>
    <div class="mm-recipes-details__item">
      <div class="mm-recipes-details__label">Yield:</div>
    </div>
  </div>
  <ul class="mm-recipes-structured-ingredients__list">
    <li class="mm-recipes-structured-ingredients__list-item">
      <p><span>1</span> <span>pound</span> <span>sweet Italian sausage</span></p>
    </li>
    <li class="mm-recipes-structured-ingredients__list-item"><p>salt</p></li>
  </ul>
  <ul class="mm-recipes-structured-ingredients__list">
    <li class="mm-recipes-structured-ingredients__list-item"><p>second list</p></li>
  </ul>
  <table class="mm-recipes-nutrition-facts-summary__table">
    <tbody>
      <tr><td>250 cal</td><td>Calories</td></tr>
      <tr><td>12g</td><td>Fat</td></tr>
      <tr><td>only one cell</td></tr>
      <tr><td>30g</td><td>Carbs</td></tr>
    </tbody>
  </table>
</body></html>
"#;

#[test]
fn test_time_and_servings_by_label() {
    let fields = parse_recipe_page(RECIPE_PAGE, &selectors());
    assert_eq!(fields.total_time, "1 hr 5 mins");
    assert_eq!(fields.servings, "8");
}

#[test]
fn test_first_ingredient_list_only() {
    let fields = parse_recipe_page(RECIPE_PAGE, &selectors());
    assert_eq!(
        fields.ingredients,
        vec!["1poundsweet Italian sausage", "salt"]
    );
}

#[test]
fn test_nutrition_key_is_second_cell() {
    let fields = parse_recipe_page(RECIPE_PAGE, &selectors());
    let facts: Vec<(&str, &str)> = fields.nutrition_facts.iter().collect();
    assert_eq!(
        facts,
        vec![("Calories", "250 cal"), ("Fat", "12g"), ("Carbs", "30g")]
    );
}

#[test]
fn test_ratings_by_id_marker() {
    let fields = parse_recipe_page(RECIPE_PAGE, &selectors());
    assert_eq!(fields.total_rating, "4.6");
    assert_eq!(fields.rating_count, "1,287");
}

#[test]
fn test_missing_fields_default_independently() {
    let html = r#"
    <html><body>
      <div class="mm-recipes-details__item">
        <div class="mm-recipes-details__label">Servings:</div>
        <div class="mm-recipes-details__value">4</div>
      </div>
    </body></html>
    "#;
    let fields = parse_recipe_page(html, &selectors());
    assert_eq!(fields.servings, "4");
    assert_eq!(fields.total_time, NOT_AVAILABLE);
    assert!(fields.ingredients.is_empty());
    assert!(fields.nutrition_facts.is_empty());
    assert_eq!(fields.total_rating, NOT_AVAILABLE);
    assert_eq!(fields.rating_count, NOT_AVAILABLE);
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_recipe_page(RECIPE_PAGE, &selectors());
    let second = parse_recipe_page(RECIPE_PAGE, &selectors());
    assert_eq!(first, second);
}
