use crate::database::error::StoreResult;
use crate::database::models::recipe_ingredient::IngredientAmount;

// Supplies the ingredient-quantity pairs of every recipe in a user's cart,
// flattened, in cart order.
pub trait CartLoader {
    fn load_cart_ingredients(&self, user: i32) -> StoreResult<Vec<IngredientAmount>>;
}
