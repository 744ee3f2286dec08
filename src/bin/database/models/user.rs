use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::{StoreError, StoreResult};
use crate::database::validators;

#[derive(Queryable, Selectable, Identifiable, AllArgsConstructor, Debug, Clone)]
#[diesel(table_name = crate::database::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::users)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    // The email is the account key, so it has to be present and unused.
    pub fn create(connection: &mut PgConnection, new_user: NewUser) -> StoreResult<User> {
        use crate::database::schema::users;

        validators::validate_email(&new_user.email)?;
        if Self::by_email(connection, &new_user.email)?.is_some() {
            return Err(StoreError::EmailTaken(new_user.email));
        }

        let user = diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(connection)?;

        Ok(user)
    }

    pub fn get(connection: &mut PgConnection, user: i32) -> StoreResult<User> {
        use crate::database::schema::users;

        users::table
            .find(user)
            .select(User::as_select())
            .first(connection)
            .optional()?
            .ok_or(StoreError::NotFound {
                entity: "user",
                id: user,
            })
    }

    pub fn by_email(connection: &mut PgConnection, account: &str) -> StoreResult<Option<User>> {
        use crate::database::schema::users;

        let user = users::table
            .filter(users::email.eq(account))
            .select(User::as_select())
            .first(connection)
            .optional()?;

        Ok(user)
    }
}
