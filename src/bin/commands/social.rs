use diesel::prelude::*;
use serde_json::{json, Value};

use crate::database::error::StoreResult;
use crate::database::models::{
    favorite::Favorite, recipe::Recipe, subscription::Subscription, user::User,
};

use super::{print_json, recipes};

pub fn favorite(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
    Favorite::add(connection, user, recipe)?;
    let recipe = Recipe::get(connection, recipe)?;

    print_json(&recipes::summary(&recipe));
    Ok(())
}

pub fn unfavorite(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
    Favorite::remove(connection, user, recipe)?;

    println!("Removed recipe {recipe} from favorites");
    Ok(())
}

pub fn subscribe(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<()> {
    Subscription::add(connection, user, author)?;
    let author = User::get(connection, author)?;

    print_json(&author_entry(connection, user, &author, None)?);
    Ok(())
}

pub fn unsubscribe(connection: &mut PgConnection, user: i32, author: i32) -> StoreResult<()> {
    Subscription::remove(connection, user, author)?;

    println!("Unsubscribed from author {author}");
    Ok(())
}

pub fn subscriptions(
    connection: &mut PgConnection,
    user: i32,
    recipes_limit: Option<usize>,
) -> StoreResult<()> {
    let mut entries = Vec::new();
    for author in Subscription::authors(connection, user)? {
        entries.push(author_entry(connection, user, &author, recipes_limit)?);
    }

    print_json(&Value::Array(entries));
    Ok(())
}

// The subscription view: author profile plus their recipes, newest first.
fn author_entry(
    connection: &mut PgConnection,
    viewer: i32,
    author: &User,
    recipes_limit: Option<usize>,
) -> StoreResult<Value> {
    use crate::database::schema::recipes as recipes_table;

    let author_recipes: Vec<Recipe> = Recipe::belonging_to(author)
        .select(Recipe::as_select())
        .order(recipes_table::id.desc())
        .load(connection)?;

    let limit = recipes_limit.unwrap_or(author_recipes.len());

    Ok(json!({
        "email": author.email,
        "id": author.id,
        "username": author.username,
        "first_name": author.first_name,
        "last_name": author.last_name,
        "is_subscribed": Subscription::contains(connection, viewer, author.id)?,
        "recipes": author_recipes
            .iter()
            .take(limit)
            .map(recipes::summary)
            .collect::<Vec<_>>(),
        "recipes_count": author_recipes.len(),
    }))
}
