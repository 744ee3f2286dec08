use diesel::PgConnection;
use serde_json::json;

use crate::database::error::StoreResult;
use crate::database::models::user::{NewUser, User};

use super::print_json;

pub fn add(
    connection: &mut PgConnection,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
) -> StoreResult<()> {
    let user = User::create(
        connection,
        NewUser::new(email, username, first_name, last_name),
    )?;

    print_json(&json!({
        "id": user.id,
        "email": user.email,
        "username": user.username,
        "first_name": user.first_name,
        "last_name": user.last_name,
    }));
    Ok(())
}
