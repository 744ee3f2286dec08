#![warn(clippy::all)]

mod commands;
mod database;
mod shopping;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use diesel::{
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

use crate::database::connection::establish_pooled_connection;
use crate::database::error::StoreResult;
use crate::database::models::recipe::RecipeFilter;

#[derive(Parser)]
#[command(name = "cookbook", about = "Recipe sharing backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a user account
    AddUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    /// Publish a recipe from a JSON file
    AddRecipe {
        #[arg(long)]
        author: i32,
        #[arg(long)]
        file: PathBuf,
    },
    /// Rewrite a recipe from a JSON file, replacing its ingredients and tags
    UpdateRecipe {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a recipe and everything referencing it
    DeleteRecipe {
        #[arg(long)]
        id: i32,
    },
    /// Print one recipe with its author, ingredients and tags
    ShowRecipe {
        #[arg(long)]
        id: i32,
        /// Include is_favorited / is_in_shopping_cart flags for this user
        #[arg(long)]
        user: Option<i32>,
    },
    /// List recipes, optionally filtered
    ListRecipes {
        #[arg(long)]
        author: Option<i32>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        favorited_by: Option<i32>,
        #[arg(long)]
        in_cart_of: Option<i32>,
    },
    /// Add a recipe to a user's favorites
    Favorite {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        recipe: i32,
    },
    /// Remove a recipe from a user's favorites
    Unfavorite {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        recipe: i32,
    },
    /// Put a recipe in a user's shopping cart
    CartAdd {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        recipe: i32,
    },
    /// Take a recipe out of a user's shopping cart
    CartRemove {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        recipe: i32,
    },
    /// Write the aggregated shopping list to a file
    ShoppingList {
        #[arg(long)]
        user: i32,
        #[arg(long, default_value = "shopping_list.txt")]
        output: PathBuf,
    },
    /// Subscribe a user to an author
    Subscribe {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        author: i32,
    },
    /// Unsubscribe a user from an author
    Unsubscribe {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        author: i32,
    },
    /// List a user's subscriptions with each author's recipes
    Subscriptions {
        #[arg(long)]
        user: i32,
        #[arg(long)]
        recipes_limit: Option<usize>,
    },
    /// List ingredients, optionally by name prefix
    Ingredients {
        #[arg(long)]
        search: Option<String>,
    },
    /// List tags
    Tags,
}

fn main() {
    let stdout_log = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::ACTIVE)
        .pretty();
    let _subscriber = Registry::default()
        .with(stdout_log)
        .with(LevelFilter::from_level(Level::INFO));

    tracing::subscriber::set_global_default(_subscriber).expect("Unable to set global subscriber");

    let cli = Cli::parse();
    let pool = establish_pooled_connection();

    if let Err(error) = run(cli.command, pool) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(command: Command, pool: Pool<ConnectionManager<PgConnection>>) -> StoreResult<()> {
    let mut connection = pool.get().unwrap();

    match command {
        Command::AddUser {
            email,
            username,
            first_name,
            last_name,
        } => commands::users::add(&mut connection, email, username, first_name, last_name),
        Command::AddRecipe { author, file } => {
            commands::recipes::add(&mut connection, author, &file)
        }
        Command::UpdateRecipe { id, file } => {
            commands::recipes::update(&mut connection, id, &file)
        }
        Command::DeleteRecipe { id } => commands::recipes::delete(&mut connection, id),
        Command::ShowRecipe { id, user } => commands::recipes::show(&mut connection, id, user),
        Command::ListRecipes {
            author,
            tag,
            favorited_by,
            in_cart_of,
        } => commands::recipes::list(
            &mut connection,
            &RecipeFilter::new(author, tag, favorited_by, in_cart_of),
        ),
        Command::Favorite { user, recipe } => {
            commands::social::favorite(&mut connection, user, recipe)
        }
        Command::Unfavorite { user, recipe } => {
            commands::social::unfavorite(&mut connection, user, recipe)
        }
        Command::CartAdd { user, recipe } => {
            commands::shopping::cart_add(&mut connection, user, recipe)
        }
        Command::CartRemove { user, recipe } => {
            commands::shopping::cart_remove(&mut connection, user, recipe)
        }
        Command::Subscribe { user, author } => {
            commands::social::subscribe(&mut connection, user, author)
        }
        Command::Unsubscribe { user, author } => {
            commands::social::unsubscribe(&mut connection, user, author)
        }
        Command::Subscriptions {
            user,
            recipes_limit,
        } => commands::social::subscriptions(&mut connection, user, recipes_limit),
        Command::Ingredients { search } => {
            commands::reference::ingredients(&mut connection, search.as_deref())
        }
        Command::ShoppingList { user, output } => {
            // The loader draws its own connection and the pool has one slot.
            drop(connection);
            commands::shopping::shopping_list(pool, user, &output)
        }
        Command::Tags => commands::reference::tags(&mut connection),
    }
}
