use diesel::prelude::*;
use lombok::AllArgsConstructor;

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::recipe_ingredients)]
pub struct NewRecipeIngredient {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub amount: i32,
}

// One ingredient line of a recipe with the ingredient row joined in.
#[derive(AllArgsConstructor, Debug, Clone, PartialEq, Eq)]
pub struct IngredientAmount {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}
