use diesel::PgConnection;
use serde_json::{json, Value};

use crate::database::error::StoreResult;
use crate::database::models::{ingredient::Ingredient, tag::Tag};

use super::print_json;

pub fn ingredients(connection: &mut PgConnection, search: Option<&str>) -> StoreResult<()> {
    let rows = match search {
        Some(prefix) => Ingredient::search(connection, prefix)?,
        None => Ingredient::all(connection)?,
    };

    let entries: Vec<Value> = rows
        .iter()
        .map(|ingredient| {
            json!({
                "id": ingredient.id,
                "name": ingredient.name,
                "measurement_unit": ingredient.measurement_unit,
            })
        })
        .collect();

    print_json(&Value::Array(entries));
    Ok(())
}

pub fn tags(connection: &mut PgConnection) -> StoreResult<()> {
    let entries: Vec<Value> = Tag::all(connection)?.iter().map(tag_entry).collect();

    print_json(&Value::Array(entries));
    Ok(())
}

pub fn tag_entry(tag: &Tag) -> Value {
    json!({
        "id": tag.id,
        "name": tag.name,
        "color": tag.color,
        "slug": tag.slug,
    })
}
