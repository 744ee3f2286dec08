use std::ops::Deref;

use itertools::Itertools;
use tracing::warn;

use crate::database::error::StoreResult;
use crate::database::models::recipe_ingredient::IngredientAmount;

use super::cart_loader::CartLoader;

// One entry per distinct ingredient name, amounts summed, kept in the order
// names were first seen.
pub struct ShoppingList {
    inner: Vec<IngredientAmount>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn from_loader(loader: &impl CartLoader, user: i32) -> StoreResult<Self> {
        let mut list = Self::new();
        list.add_all(loader.load_cart_ingredients(user)?);
        Ok(list)
    }

    pub fn add(&mut self, entry: IngredientAmount) {
        match self
            .inner
            .iter()
            .position(|existing| existing.name == entry.name)
        {
            Some(index) => {
                let existing = &mut self.inner[index];
                // Same name is assumed to mean same unit; the first one wins.
                if existing.measurement_unit != entry.measurement_unit {
                    warn!(
                        name = %entry.name,
                        kept = %existing.measurement_unit,
                        dropped = %entry.measurement_unit,
                        "mismatched measurement units for ingredient"
                    );
                }
                existing.amount += entry.amount;
            }
            None => self.inner.push(entry),
        }
    }

    pub fn add_all(&mut self, entries: impl IntoIterator<Item = IngredientAmount>) {
        entries.into_iter().for_each(|entry| self.add(entry));
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .iter()
            .map(|entry| format!("{} - {} {}", entry.name, entry.amount, entry.measurement_unit))
            .collect()
    }

    pub fn to_text(&self) -> String {
        self.lines().into_iter().join("\n")
    }
}

impl Deref for ShoppingList {
    type Target = Vec<IngredientAmount>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::fmt::Debug for ShoppingList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, amount: i32, unit: &str) -> IngredientAmount {
        IngredientAmount::new(name.to_owned(), unit.to_owned(), amount)
    }

    #[test]
    fn empty_cart_gives_empty_list() {
        let list = ShoppingList::new();

        assert!(list.is_empty());
        assert!(list.lines().is_empty());
        assert_eq!(list.to_text(), "");
    }

    #[test]
    fn one_recipe_keeps_its_listed_order() {
        let mut list = ShoppingList::new();
        list.add_all([entry("flour", 200, "g"), entry("sugar", 100, "g")]);

        assert_eq!(list.lines(), vec!["flour - 200 g", "sugar - 100 g"]);
    }

    #[test]
    fn amounts_sum_across_recipes() {
        let mut list = ShoppingList::new();
        list.add_all([entry("flour", 200, "g")]);
        list.add_all([entry("flour", 50, "g")]);

        assert_eq!(list.lines(), vec!["flour - 250 g"]);
    }

    #[test]
    fn order_is_first_seen_across_the_whole_cart() {
        let mut list = ShoppingList::new();
        list.add_all([entry("sugar", 100, "g"), entry("milk", 250, "ml")]);
        list.add_all([entry("flour", 200, "g"), entry("sugar", 50, "g")]);

        assert_eq!(
            list.lines(),
            vec!["sugar - 150 g", "milk - 250 ml", "flour - 200 g"]
        );
    }

    #[test]
    fn mismatched_unit_keeps_the_first_seen() {
        let mut list = ShoppingList::new();
        list.add(entry("flour", 200, "g"));
        list.add(entry("flour", 1, "kg"));

        assert_eq!(list.lines(), vec!["flour - 201 g"]);
    }

    #[test]
    fn text_output_is_newline_separated() {
        let mut list = ShoppingList::new();
        list.add_all([entry("flour", 200, "g"), entry("sugar", 100, "g")]);

        assert_eq!(list.to_text(), "flour - 200 g\nsugar - 100 g");
    }

    struct FixedLoader {
        entries: Vec<IngredientAmount>,
    }

    impl CartLoader for FixedLoader {
        fn load_cart_ingredients(&self, _user: i32) -> StoreResult<Vec<IngredientAmount>> {
            Ok(self.entries.clone())
        }
    }

    #[test]
    fn list_builds_from_a_loader() {
        let loader = FixedLoader {
            entries: vec![
                entry("flour", 200, "g"),
                entry("sugar", 100, "g"),
                entry("flour", 50, "g"),
            ],
        };

        let list = ShoppingList::from_loader(&loader, 1).unwrap();

        assert_eq!(list.lines(), vec!["flour - 250 g", "sugar - 100 g"]);
    }
}
