use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::StoreResult;

#[derive(Queryable, Selectable, AllArgsConstructor, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::database::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::ingredients)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn all(connection: &mut PgConnection) -> StoreResult<Vec<Ingredient>> {
        use crate::database::schema::ingredients;

        let rows = ingredients::table
            .select(Ingredient::as_select())
            .order(ingredients::name.asc())
            .load(connection)?;

        Ok(rows)
    }

    // Name search matches from the start of the name, case-insensitive.
    pub fn search(connection: &mut PgConnection, prefix: &str) -> StoreResult<Vec<Ingredient>> {
        use crate::database::schema::ingredients;

        let rows = ingredients::table
            .filter(ingredients::name.ilike(format!("{prefix}%")))
            .select(Ingredient::as_select())
            .order(ingredients::name.asc())
            .load(connection)?;

        Ok(rows)
    }
}
