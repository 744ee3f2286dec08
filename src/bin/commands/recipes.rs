use std::fs;
use std::path::Path;

use diesel::PgConnection;
use serde_json::{from_str, json, Value};

use crate::database::error::StoreResult;
use crate::database::models::{
    cart_entry::CartEntry,
    favorite::Favorite,
    recipe::{Recipe, RecipeDraft, RecipeFilter},
    tag::Tag,
    user::User,
};

use super::{print_json, reference};

pub fn add(connection: &mut PgConnection, author: i32, file: &Path) -> StoreResult<()> {
    let draft = RecipeDraft::from_value(&read_json(file));
    let recipe = Recipe::create(connection, author, &draft)?;

    print_json(&detail(connection, &recipe, None)?);
    Ok(())
}

pub fn update(connection: &mut PgConnection, recipe: i32, file: &Path) -> StoreResult<()> {
    let draft = RecipeDraft::from_value(&read_json(file));
    let updated = Recipe::update(connection, recipe, &draft)?;

    print_json(&detail(connection, &updated, None)?);
    Ok(())
}

pub fn delete(connection: &mut PgConnection, recipe: i32) -> StoreResult<()> {
    Recipe::delete(connection, recipe)?;

    println!("Deleted recipe {recipe}");
    Ok(())
}

pub fn show(connection: &mut PgConnection, recipe: i32, viewer: Option<i32>) -> StoreResult<()> {
    let recipe = Recipe::get(connection, recipe)?;

    print_json(&detail(connection, &recipe, viewer)?);
    Ok(())
}

pub fn list(connection: &mut PgConnection, filter: &RecipeFilter) -> StoreResult<()> {
    if let Some(slug) = &filter.tag_slug {
        Tag::by_slug(connection, slug)?;
    }

    let entries: Vec<Value> = Recipe::filtered(connection, filter)?
        .iter()
        .map(summary)
        .collect();

    print_json(&Value::Array(entries));
    Ok(())
}

pub fn summary(recipe: &Recipe) -> Value {
    json!({
        "id": recipe.id,
        "name": recipe.name,
        "cooking_time": recipe.cooking_time,
        "image": recipe.image,
    })
}

pub fn detail(
    connection: &mut PgConnection,
    recipe: &Recipe,
    viewer: Option<i32>,
) -> StoreResult<Value> {
    let author = User::get(connection, recipe.author_id)?;

    let ingredients: Vec<Value> = recipe
        .ingredient_rows(connection)?
        .iter()
        .map(|(ingredient, amount)| {
            json!({
                "id": ingredient.id,
                "name": ingredient.name,
                "measurement_unit": ingredient.measurement_unit,
                "amount": amount,
            })
        })
        .collect();

    let tags: Vec<Value> = recipe
        .tags(connection)?
        .iter()
        .map(reference::tag_entry)
        .collect();

    let mut value = json!({
        "id": recipe.id,
        "author": {
            "id": author.id,
            "email": author.email,
            "username": author.username,
            "first_name": author.first_name,
            "last_name": author.last_name,
        },
        "name": recipe.name,
        "text": recipe.text,
        "image": recipe.image,
        "cooking_time": recipe.cooking_time,
        "ingredients": ingredients,
        "tags": tags,
    });

    if let Some(viewer) = viewer {
        value["is_favorited"] = Value::Bool(Favorite::contains(connection, viewer, recipe.id)?);
        value["is_in_shopping_cart"] =
            Value::Bool(CartEntry::contains(connection, viewer, recipe.id)?);
    }

    Ok(value)
}

fn read_json(file: &Path) -> Value {
    from_str(&fs::read_to_string(file).unwrap()).expect("Can't parse recipe file")
}
