use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::StoreResult;
use crate::database::models::recipe::Recipe;
use crate::database::validators::{self, Conflict};

#[derive(Queryable, Selectable, Insertable, AllArgsConstructor, Debug)]
#[diesel(table_name = crate::database::schema::favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Favorite {
    pub user_id: i32,
    pub recipe_id: i32,
}

impl Favorite {
    pub fn add(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<Favorite> {
        use crate::database::schema::favorites;

        Recipe::get(connection, recipe)?;
        validators::validate_unique(
            Self::pair_count(connection, user, recipe)?,
            Conflict::Favorite,
        )?;

        let favorite = Favorite::new(user, recipe);
        diesel::insert_into(favorites::table)
            .values(&favorite)
            .execute(connection)?;

        Ok(favorite)
    }

    // Removing an absent favorite is a no-op, like the delete endpoint it
    // mirrors.
    pub fn remove(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
        use crate::database::schema::favorites;

        diesel::delete(
            favorites::table
                .filter(favorites::user_id.eq(user))
                .filter(favorites::recipe_id.eq(recipe)),
        )
        .execute(connection)?;

        Ok(())
    }

    pub fn contains(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<bool> {
        Ok(Self::pair_count(connection, user, recipe)? > 0)
    }

    fn pair_count(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<i64> {
        use crate::database::schema::favorites;

        let count = favorites::table
            .filter(favorites::user_id.eq(user))
            .filter(favorites::recipe_id.eq(recipe))
            .count()
            .get_result(connection)?;

        Ok(count)
    }
}
