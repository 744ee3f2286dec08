use diesel::prelude::*;
use lombok::AllArgsConstructor;
use serde_json::Value;

use crate::database::error::{StoreError, StoreResult};
use crate::database::models::{
    ingredient::Ingredient, recipe_ingredient::NewRecipeIngredient, recipe_tag::RecipeTag,
    tag::Tag, user::User,
};
use crate::database::validators;

#[derive(Queryable, Selectable, Identifiable, Associations, AllArgsConstructor, Debug, Clone)]
#[diesel(table_name = crate::database::schema::recipes)]
#[diesel(belongs_to(User, foreign_key = author_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub author_id: i32,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

#[derive(Insertable, AllArgsConstructor)]
#[diesel(table_name = crate::database::schema::recipes)]
pub struct NewRecipe {
    pub author_id: i32,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

// Incoming recipe payload. The ingredient and tag id lists replace whatever
// the recipe had before.
#[derive(AllArgsConstructor, Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
    pub ingredients: Vec<(i32, i32)>,
    pub tags: Vec<i32>,
}

#[derive(AllArgsConstructor, Debug, Default)]
pub struct RecipeFilter {
    pub author: Option<i32>,
    pub tag_slug: Option<String>,
    pub favorited_by: Option<i32>,
    pub in_cart_of: Option<i32>,
}

impl RecipeDraft {
    pub fn from_value(value: &Value) -> Self {
        let recipe = value.as_object().unwrap();

        let ingredients = recipe["ingredients"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| {
                let entry = entry.as_object().unwrap();
                (
                    entry["id"].as_i64().unwrap() as i32,
                    entry["amount"].as_i64().unwrap() as i32,
                )
            })
            .collect();

        let tags = recipe["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tag| tag.as_i64().unwrap() as i32)
            .collect();

        Self::new(
            recipe["name"].as_str().unwrap().to_owned(),
            recipe["text"].as_str().unwrap().to_owned(),
            recipe
                .get("image")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
            recipe["cooking_time"].as_i64().unwrap() as i32,
            ingredients,
            tags,
        )
    }

    pub fn validate(&self) -> StoreResult<()> {
        validators::validate_cooking_time(self.cooking_time)?;
        for (_, amount) in &self.ingredients {
            validators::validate_amount(*amount)?;
        }
        Ok(())
    }
}

impl Recipe {
    pub fn create(
        connection: &mut PgConnection,
        author: i32,
        draft: &RecipeDraft,
    ) -> StoreResult<Recipe> {
        use crate::database::schema::recipes;

        draft.validate()?;
        User::get(connection, author)?;

        connection.build_transaction().run(|connection| {
            let recipe = diesel::insert_into(recipes::table)
                .values(NewRecipe::new(
                    author,
                    draft.name.clone(),
                    draft.text.clone(),
                    draft.image.clone(),
                    draft.cooking_time,
                ))
                .returning(Recipe::as_returning())
                .get_result(connection)?;

            Self::replace_associations(connection, recipe.id, draft)?;

            Ok(recipe)
        })
    }

    pub fn update(
        connection: &mut PgConnection,
        recipe: i32,
        draft: &RecipeDraft,
    ) -> StoreResult<Recipe> {
        use crate::database::schema::recipes;

        draft.validate()?;

        connection.build_transaction().run(|connection| {
            let updated = diesel::update(recipes::table.find(recipe))
                .set((
                    recipes::name.eq(&draft.name),
                    recipes::text.eq(&draft.text),
                    recipes::image.eq(draft.image.clone()),
                    recipes::cooking_time.eq(draft.cooking_time),
                ))
                .returning(Recipe::as_returning())
                .get_result(connection)
                .optional()?
                .ok_or(StoreError::NotFound {
                    entity: "recipe",
                    id: recipe,
                })?;

            Self::replace_associations(connection, updated.id, draft)?;

            Ok(updated)
        })
    }

    pub fn delete(connection: &mut PgConnection, recipe: i32) -> StoreResult<()> {
        use crate::database::schema::{
            cart_entries, favorites, recipe_ingredients, recipe_tags, recipes,
        };

        connection.build_transaction().run(|connection| {
            diesel::delete(
                recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe)),
            )
            .execute(connection)?;
            diesel::delete(recipe_tags::table.filter(recipe_tags::recipe_id.eq(recipe)))
                .execute(connection)?;
            diesel::delete(favorites::table.filter(favorites::recipe_id.eq(recipe)))
                .execute(connection)?;
            diesel::delete(cart_entries::table.filter(cart_entries::recipe_id.eq(recipe)))
                .execute(connection)?;

            let deleted = diesel::delete(recipes::table.find(recipe)).execute(connection)?;
            if deleted == 0 {
                return Err(StoreError::NotFound {
                    entity: "recipe",
                    id: recipe,
                });
            }

            Ok(())
        })
    }

    pub fn get(connection: &mut PgConnection, recipe: i32) -> StoreResult<Recipe> {
        use crate::database::schema::recipes;

        recipes::table
            .find(recipe)
            .select(Recipe::as_select())
            .first(connection)
            .optional()?
            .ok_or(StoreError::NotFound {
                entity: "recipe",
                id: recipe,
            })
    }

    // Newest first, matching how recipes are listed everywhere else.
    pub fn filtered(
        connection: &mut PgConnection,
        filter: &RecipeFilter,
    ) -> StoreResult<Vec<Recipe>> {
        use crate::database::schema::{cart_entries, favorites, recipe_tags, recipes, tags};

        let mut query = recipes::table
            .select(Recipe::as_select())
            .order(recipes::id.desc())
            .into_boxed();

        if let Some(author) = filter.author {
            query = query.filter(recipes::author_id.eq(author));
        }
        if let Some(slug) = &filter.tag_slug {
            let tagged = recipe_tags::table
                .inner_join(tags::table)
                .filter(tags::slug.eq(slug.clone()))
                .select(recipe_tags::recipe_id);
            query = query.filter(recipes::id.eq_any(tagged));
        }
        if let Some(user) = filter.favorited_by {
            let favorited = favorites::table
                .filter(favorites::user_id.eq(user))
                .select(favorites::recipe_id);
            query = query.filter(recipes::id.eq_any(favorited));
        }
        if let Some(user) = filter.in_cart_of {
            let in_cart = cart_entries::table
                .filter(cart_entries::user_id.eq(user))
                .select(cart_entries::recipe_id);
            query = query.filter(recipes::id.eq_any(in_cart));
        }

        Ok(query.load(connection)?)
    }

    pub fn tags(&self, connection: &mut PgConnection) -> StoreResult<Vec<Tag>> {
        use crate::database::schema::{recipe_tags, tags};

        let rows = recipe_tags::table
            .inner_join(tags::table)
            .filter(recipe_tags::recipe_id.eq(self.id))
            .select(Tag::as_select())
            .order(tags::id.asc())
            .load(connection)?;

        Ok(rows)
    }

    // In the order the ingredient list was written.
    pub fn ingredient_rows(
        &self,
        connection: &mut PgConnection,
    ) -> StoreResult<Vec<(Ingredient, i32)>> {
        use crate::database::schema::{ingredients, recipe_ingredients};

        let rows = recipe_ingredients::table
            .inner_join(ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq(self.id))
            .order(recipe_ingredients::id.asc())
            .select((Ingredient::as_select(), recipe_ingredients::amount))
            .load(connection)?;

        Ok(rows)
    }

    fn replace_associations(
        connection: &mut PgConnection,
        recipe: i32,
        draft: &RecipeDraft,
    ) -> StoreResult<()> {
        use crate::database::schema::{ingredients, recipe_ingredients, recipe_tags, tags};

        diesel::delete(recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe)))
            .execute(connection)?;
        diesel::delete(recipe_tags::table.filter(recipe_tags::recipe_id.eq(recipe)))
            .execute(connection)?;

        let ingredient_ids: Vec<i32> = draft.ingredients.iter().map(|(id, _)| *id).collect();
        let known: Vec<i32> = ingredients::table
            .filter(ingredients::id.eq_any(&ingredient_ids))
            .select(ingredients::id)
            .load(connection)?;
        if let Some(missing) = ingredient_ids.iter().copied().find(|id| !known.contains(id)) {
            return Err(StoreError::NotFound {
                entity: "ingredient",
                id: missing,
            });
        }

        let known: Vec<i32> = tags::table
            .filter(tags::id.eq_any(&draft.tags))
            .select(tags::id)
            .load(connection)?;
        if let Some(missing) = draft.tags.iter().copied().find(|id| !known.contains(id)) {
            return Err(StoreError::NotFound {
                entity: "tag",
                id: missing,
            });
        }

        let ingredient_rows: Vec<_> = draft
            .ingredients
            .iter()
            .map(|(ingredient, amount)| NewRecipeIngredient::new(recipe, *ingredient, *amount))
            .collect();
        diesel::insert_into(recipe_ingredients::table)
            .values(&ingredient_rows)
            .execute(connection)?;

        let tag_rows: Vec<_> = draft
            .tags
            .iter()
            .map(|tag| RecipeTag::new(recipe, *tag))
            .collect();
        diesel::insert_into(recipe_tags::table)
            .values(&tag_rows)
            .execute(connection)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft_value() -> Value {
        json!({
            "name": "Pancakes",
            "text": "Mix and fry.",
            "image": "media/recipes/pancakes.png",
            "cooking_time": 20,
            "ingredients": [
                {"id": 1, "amount": 200},
                {"id": 2, "amount": 100},
            ],
            "tags": [1, 3],
        })
    }

    #[test]
    fn draft_parses_fields_and_associations() {
        let draft = RecipeDraft::from_value(&draft_value());

        assert_eq!(draft.name, "Pancakes");
        assert_eq!(draft.cooking_time, 20);
        assert_eq!(draft.image.as_deref(), Some("media/recipes/pancakes.png"));
        assert_eq!(draft.ingredients, vec![(1, 200), (2, 100)]);
        assert_eq!(draft.tags, vec![1, 3]);
    }

    #[test]
    fn draft_image_is_optional() {
        let mut value = draft_value();
        value.as_object_mut().unwrap().remove("image");

        let draft = RecipeDraft::from_value(&value);

        assert_eq!(draft.image, None);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn zero_amount_fails_validation() {
        let mut draft = RecipeDraft::from_value(&draft_value());
        draft.ingredients[1].1 = 0;

        assert!(draft.validate().is_err());
    }

    #[test]
    fn zero_cooking_time_fails_validation() {
        let mut draft = RecipeDraft::from_value(&draft_value());
        draft.cooking_time = 0;

        assert!(draft.validate().is_err());
    }
}
