use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::Connection;
use dotenvy::dotenv;
use std::env;
use tracing::trace;

fn database_url() -> String {
    dotenv().expect("Failed to load .env file");
    env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

pub fn establish_pooled_connection() -> Pool<ConnectionManager<PgConnection>> {
    trace!("Creating connection pool");
    let manager = ConnectionManager::<PgConnection>::new(database_url());

    Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create pool.")
}

pub fn establish_connection() -> PgConnection {
    let database_url = database_url();
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}
