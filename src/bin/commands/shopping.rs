use std::fs;
use std::path::Path;

use diesel::{
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};
use tracing::trace_span;

use crate::database::error::StoreResult;
use crate::database::models::{cart_entry::CartEntry, recipe::Recipe};
use crate::shopping::{database_loader::DatabaseLoader, shopping_list::ShoppingList};

use super::{print_json, recipes};

pub fn cart_add(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
    CartEntry::add(connection, user, recipe)?;
    let recipe = Recipe::get(connection, recipe)?;

    print_json(&recipes::summary(&recipe));
    Ok(())
}

pub fn cart_remove(connection: &mut PgConnection, user: i32, recipe: i32) -> StoreResult<()> {
    CartEntry::remove(connection, user, recipe)?;

    println!("Removed recipe {recipe} from the cart");
    Ok(())
}

pub fn shopping_list(
    pool: Pool<ConnectionManager<PgConnection>>,
    user: i32,
    output: &Path,
) -> StoreResult<()> {
    let span = trace_span!("building shopping list");
    let _guard = span.enter();

    let loader = DatabaseLoader::new(pool);
    let list = ShoppingList::from_loader(&loader, user)?;

    let mut text = list.to_text();
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(output, &text).unwrap();

    println!("Wrote {} ingredients to {}", list.len(), output.display());
    Ok(())
}
