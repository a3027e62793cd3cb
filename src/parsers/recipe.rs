use crate::parsers::Selectors;
use crate::results::{NutritionFacts, RecipeFields};
use crate::utils::{element_text, stripped_text};
use scraper::{ElementRef, Html};

/// Parse the detail fields out of a rendered recipe page.
///
/// Every field is looked up independently; whatever is missing keeps its
/// "N/A" or empty default.
pub fn parse_recipe_page(html: &str, selectors: &Selectors) -> RecipeFields {
    let doc = Html::parse_document(html);
    let root = doc.root_element();
    let mut fields = RecipeFields::default();

    parse_time_and_servings(root, selectors, &mut fields);
    fields.ingredients = parse_ingredients(root, selectors);
    fields.nutrition_facts = parse_nutrition(root, selectors);

    if let Some(rating) = root.select(&selectors.rating).next() {
        fields.total_rating = stripped_text(rating);
    }
    if let Some(count) = root.select(&selectors.rating_count).next() {
        fields.rating_count = strip_parens(&stripped_text(count));
    }

    fields
}

/// Label/value pairs under the details container; later matches overwrite earlier ones
fn parse_time_and_servings(
    root: ElementRef<'_>,
    selectors: &Selectors,
    fields: &mut RecipeFields,
) {
    for item in root.select(&selectors.detail_item) {
        let label = item.select(&selectors.detail_label).next();
        let value = item.select(&selectors.detail_value).next();
        let (Some(label), Some(value)) = (label, value) else {
            continue;
        };

        let label = element_text(label).to_lowercase();
        if label.contains("total time") {
            fields.total_time = element_text(value);
        } else if label.contains("servings") {
            fields.servings = element_text(value);
        }
    }
}

/// Items of the first structured ingredient list only
fn parse_ingredients(root: ElementRef<'_>, selectors: &Selectors) -> Vec<String> {
    root.select(&selectors.ingredient_list)
        .next()
        .map(|list| {
            list.select(&selectors.ingredient_item)
                .map(stripped_text)
                .collect()
        })
        .unwrap_or_default()
}

/// Rows of the nutrition summary table.
///
/// The second cell names the nutrient and the first holds its amount, so a
/// row `["250 cal", "Calories"]` yields `Calories -> 250 cal`.
fn parse_nutrition(root: ElementRef<'_>, selectors: &Selectors) -> NutritionFacts {
    let mut facts = NutritionFacts::new();
    let Some(table) = root.select(&selectors.nutrition_table).next() else {
        return facts;
    };

    for row in table.select(&selectors.table_row) {
        let cells: Vec<String> = row
            .select(&selectors.table_cell)
            .map(stripped_text)
            .collect();
        if cells.len() >= 2 {
            facts.insert(cells[1].clone(), cells[0].clone());
        }
    }
    facts
}

fn strip_parens(text: &str) -> String {
    text.replace(['(', ')'], "")
}
