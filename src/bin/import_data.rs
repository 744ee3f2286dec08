use std::fs;

use database::connection::establish_connection;
use diesel::{insert_into, PgConnection, QueryResult, RunQueryDsl};
use serde_json::{from_str, Value};

use crate::database::models::{ingredient::NewIngredient, tag::NewTag};

mod database;

fn main() {
    let mut connection = establish_connection();

    connection
        .build_transaction()
        .run(|connection| {
            fill_ingredients(connection);
            fill_tags(connection);

            QueryResult::Ok(())
        })
        .unwrap();
}

fn fill_ingredients(connection: &mut PgConnection) {
    use crate::database::schema::ingredients;

    println!("Starting fill_ingredients");

    fill_table("ingredients.json", connection, |v, connection| {
        let ingredient = v.as_object().unwrap();
        let ingredient = NewIngredient::new(
            ingredient["name"].as_str().unwrap().to_owned(),
            ingredient["measurement_unit"].as_str().unwrap().to_owned(),
        );

        insert_into(ingredients::table)
            .values(&ingredient)
            .execute(connection)
            .unwrap();
    });

    println!("End fill_ingredients");
}

fn fill_tags(connection: &mut PgConnection) {
    use crate::database::schema::tags;

    println!("Starting fill_tags");

    fill_table("tags.json", connection, |v, connection| {
        let tag = v.as_object().unwrap();
        let tag = NewTag::new(
            tag["name"].as_str().unwrap().to_owned(),
            tag["color"].as_str().unwrap().to_owned(),
            tag["slug"].as_str().unwrap().to_owned(),
        );

        insert_into(tags::table)
            .values(&tag)
            .execute(connection)
            .unwrap();
    });

    println!("End fill_tags");
}

fn fill_table<F: Fn(&Value, &mut PgConnection)>(
    json_file: &str,
    connection: &mut PgConnection,
    function: F,
) {
    let json: Value = from_str(&read_file(&("src/resources/json/".to_owned() + json_file)))
        .expect(&format!("Can't parse {json_file}"));
    let json = json.as_array().unwrap();

    for value in json {
        function(value, connection);
    }
}

fn read_file(file: &str) -> String {
    fs::read_to_string(file).unwrap()
}
