//! Food catalog built while scanning a backup
//!
//! `food` records register a carbohydrate ratio under a lowercased name;
//! later `foodEaten` records consult the catalog to convert a weighed
//! portion into grams of carbohydrate. A food must therefore be defined
//! before the first entry that references it.

use std::collections::BTreeMap;

/// Catalog of food names and their carbohydrate content per 100g
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: BTreeMap<String, f64>,
}

impl FoodCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a food under its lowercased name
    ///
    /// Re-registering a name replaces the earlier ratio, matching the
    /// exporter's behavior when a food was edited in the app.
    pub fn register(&mut self, name: &str, carbs_per_100g: f64) {
        self.foods.insert(name.to_lowercase(), carbs_per_100g);
    }

    /// Carbohydrate grams per 100g for a food, if registered
    pub fn carbs_per_100g(&self, name: &str) -> Option<f64> {
        self.foods.get(&name.to_lowercase()).copied()
    }

    /// Grams of carbohydrate in `weight_g` grams of a food, if registered
    pub fn carbs_in(&self, name: &str, weight_g: f64) -> Option<f64> {
        self.carbs_per_100g(name)
            .map(|ratio| weight_g * ratio / 100.0)
    }

    /// Number of registered foods
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Iterate over registered foods in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.foods.iter().map(|(name, ratio)| (name.as_str(), *ratio))
    }
}
