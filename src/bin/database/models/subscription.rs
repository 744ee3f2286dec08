use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::StoreResult;
use crate::database::models::user::User;
use crate::database::validators::{self, Conflict};

#[derive(Queryable, Selectable, Insertable, AllArgsConstructor, Debug)]
#[diesel(table_name = crate::database::schema::subscriptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subscription {
    pub user_id: i32,
    pub author_id: i32,
}

impl Subscription {
    pub fn add(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<Subscription> {
        use crate::database::schema::subscriptions;

        validators::validate_subscription(user, author)?;
        User::get(connection, author)?;
        validators::validate_unique(
            Self::pair_count(connection, user, author)?,
            Conflict::Subscription,
        )?;

        let subscription = Subscription::new(user, author);
        diesel::insert_into(subscriptions::table)
            .values(&subscription)
            .execute(connection)?;

        Ok(subscription)
    }

    pub fn remove(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<()> {
        use crate::database::schema::subscriptions;

        diesel::delete(
            subscriptions::table
                .filter(subscriptions::user_id.eq(user))
                .filter(subscriptions::author_id.eq(author)),
        )
        .execute(connection)?;

        Ok(())
    }

    pub fn contains(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<bool> {
        Ok(Self::pair_count(connection, user, author)? > 0)
    }

    // Two foreign keys into users, so the join spells out its ON clause.
    pub fn authors(connection: &mut PgConnection, user: i32) -> StoreResult<Vec<User>> {
        use crate::database::schema::{subscriptions, users};

        let rows = subscriptions::table
            .inner_join(users::table.on(users::id.eq(subscriptions::author_id)))
            .filter(subscriptions::user_id.eq(user))
            .select(User::as_select())
            .order(users::id.asc())
            .load(connection)?;

        Ok(rows)
    }

    fn pair_count(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<i64> {
        use crate::database::schema::subscriptions;

        let count = subscriptions::table
            .filter(subscriptions::user_id.eq(user))
            .filter(subscriptions::author_id.eq(author))
            .count()
            .get_result(connection)?;

        Ok(count)
    }
}
