use serde_json::Value;

pub mod recipes;
pub mod reference;
pub mod shopping;
pub mod social;
pub mod users;

pub fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}
