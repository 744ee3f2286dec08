use diesel::prelude::*;
use lombok::AllArgsConstructor;

use crate::database::error::{StoreError, StoreResult};

#[derive(Queryable, Selectable, AllArgsConstructor, Debug, Clone)]
#[diesel(table_name = crate::database::schema::tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::tags)]
pub struct NewTag {
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl Tag {
    pub fn all(connection: &mut PgConnection) -> StoreResult<Vec<Tag>> {
        use crate::database::schema::tags;

        let rows = tags::table
            .select(Tag::as_select())
            .order(tags::id.asc())
            .load(connection)?;

        Ok(rows)
    }

    pub fn by_slug(connection: &mut PgConnection, slug: &str) -> StoreResult<Tag> {
        use crate::database::schema::tags;

        tags::table
            .filter(tags::slug.eq(slug))
            .select(Tag::as_select())
            .first(connection)
            .optional()?
            .ok_or_else(|| StoreError::UnknownTagSlug(slug.to_owned()))
    }
}
