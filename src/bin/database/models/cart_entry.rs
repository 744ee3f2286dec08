use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::StoreResult;
use crate::database::models::recipe::Recipe;
use crate::database::validators::{self, Conflict};

#[derive(Queryable, Selectable, AllArgsConstructor, Debug)]
#[diesel(table_name = crate::database::schema::cart_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartEntry {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
}

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::cart_entries)]
pub struct NewCartEntry {
    pub user_id: i32,
    pub recipe_id: i32,
}

impl CartEntry {
    pub fn add(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<CartEntry> {
        use crate::database::schema::cart_entries;

        Recipe::get(connection, recipe)?;
        validators::validate_unique(
            Self::pair_count(connection, user, recipe)?,
            Conflict::CartEntry,
        )?;

        let entry = diesel::insert_into(cart_entries::table)
            .values(NewCartEntry::new(user, recipe))
            .returning(CartEntry::as_returning())
            .get_result(connection)?;

        Ok(entry)
    }

    pub fn remove(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
        use crate::database::schema::cart_entries;

        diesel::delete(
            cart_entries::table
                .filter(cart_entries::user_id.eq(user))
                .filter(cart_entries::recipe_id.eq(recipe)),
        )
        .execute(connection)?;

        Ok(())
    }

    pub fn contains(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<bool> {
        Ok(Self::pair_count(connection, user, recipe)? > 0)
    }

    // The cart keeps the order recipes were added in; the serial entry id
    // carries that order.
    pub fn recipes(connection: &mut PgConnection, user: i32) -> StoreResult<Vec<Recipe>> {
        use crate::database::schema::{cart_entries, recipes};

        let rows = cart_entries::table
            .inner_join(recipes::table)
            .filter(cart_entries::user_id.eq(user))
            .order(cart_entries::id.asc())
            .select(Recipe::as_select())
            .load(connection)?;

        Ok(rows)
    }

    fn pair_count(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<i64> {
        use crate::database::schema::cart_entries;

        let count = cart_entries::table
            .filter(cart_entries::user_id.eq(user))
            .filter(cart_entries::recipe_id.eq(recipe))
            .count()
            .get_result(connection)?;

        Ok(count)
    }
}
