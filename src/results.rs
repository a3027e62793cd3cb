use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder written for any detail field the page did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// A cuisine category discovered on the directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "Country")]
    pub name: String,

    #[serde(rename = "Link")]
    pub link: String,
}

/// One recipe card found on a category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    /// Name of the category the card was found under
    #[serde(rename = "Country")]
    pub category: String,

    #[serde(rename = "Cuisine")]
    pub recipe_name: String,

    #[serde(rename = "Link")]
    pub link: String,
}

/// A recipe reference enriched with the fields parsed from its page.
///
/// The source reference is carried as-is; only the detail fields vary with
/// what the page offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: RecipeRef,

    #[serde(flatten)]
    pub details: RecipeFields,
}

/// Fields parsed out of a recipe page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeFields {
    #[serde(rename = "Total_Time")]
    pub total_time: String,

    #[serde(rename = "Servings")]
    pub servings: String,

    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,

    #[serde(rename = "Nutrition_Facts")]
    pub nutrition_facts: NutritionFacts,

    #[serde(rename = "Total_Rating")]
    pub total_rating: String,

    #[serde(rename = "Rating_Count")]
    pub rating_count: String,
}

impl Default for RecipeFields {
    fn default() -> Self {
        Self {
            total_time: NOT_AVAILABLE.to_string(),
            servings: NOT_AVAILABLE.to_string(),
            ingredients: Vec::new(),
            nutrition_facts: NutritionFacts::default(),
            total_rating: NOT_AVAILABLE.to_string(),
            rating_count: NOT_AVAILABLE.to_string(),
        }
    }
}

impl RecipeDetail {
    pub fn new(recipe: RecipeRef, details: RecipeFields) -> Self {
        Self { recipe, details }
    }

    /// Detail record with every parsed field left at its default
    pub fn unavailable(recipe: RecipeRef) -> Self {
        Self::new(recipe, RecipeFields::default())
    }
}

/// Nutrient name to amount, in page order with unique keys.
///
/// Serialized as a JSON object whose key order follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionFacts(Vec<(String, String)>);

impl NutritionFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `amount`; an existing key keeps its position and takes the new amount
    pub fn insert(&mut self, name: String, amount: String) {
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = amount,
            None => self.0.push((name, amount)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, amount)| amount.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for NutritionFacts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, amount) in &self.0 {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NutritionFacts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FactsVisitor;

        impl<'de> Visitor<'de> for FactsVisitor {
            type Value = NutritionFacts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of nutrient names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut facts = NutritionFacts::new();
                while let Some((name, amount)) = access.next_entry::<String, String>()? {
                    facts.insert(name, amount);
                }
                Ok(facts)
            }
        }

        deserializer.deserialize_map(FactsVisitor)
    }
}

/// A single item that could not be extracted, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    /// Identifies the item (recipe name, card index, URL)
    pub item: String,
    pub reason: String,
}

impl ExtractionFailure {
    pub fn new(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item, self.reason)
    }
}

/// Items extracted from one page plus the ones that had to be skipped
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub failures: Vec<ExtractionFailure>,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}
