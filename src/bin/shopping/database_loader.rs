use diesel::{
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};
use lombok::AllArgsConstructor;

use crate::database::error::StoreResult;
use crate::database::models::{cart_entry::CartEntry, recipe_ingredient::IngredientAmount};

use super::cart_loader::CartLoader;

#[derive(AllArgsConstructor)]
pub struct DatabaseLoader {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl CartLoader for DatabaseLoader {
    fn load_cart_ingredients(&self, user: i32) -> StoreResult<Vec<IngredientAmount>> {
        let mut connection = self.pool.get().unwrap();

        let mut entries = Vec::new();
        for recipe in CartEntry::recipes(&mut connection, user)? {
            for (ingredient, amount) in recipe.ingredient_rows(&mut connection)? {
                entries.push(IngredientAmount::new(
                    ingredient.name,
                    ingredient.measurement_unit,
                    amount,
                ));
            }
        }

        Ok(entries)
    }
}
