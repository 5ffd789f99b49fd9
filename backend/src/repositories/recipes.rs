//! Recipe repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub tags: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub calories: Option<i32>,
    pub protein_grams: Option<i32>,
    pub carbs_grams: Option<i32>,
    pub fat_grams: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a recipe
#[derive(Debug, Clone)]
pub struct CreateRecipe {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub tags: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub calories: Option<i32>,
    pub protein_grams: Option<i32>,
    pub carbs_grams: Option<i32>,
    pub fat_grams: Option<i32>,
}

/// Input for updating a recipe
///
/// `None` means "keep the stored value"; there is no way to clear a
/// populated column through an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipe {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub tags: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub calories: Option<i32>,
    pub protein_grams: Option<i32>,
    pub carbs_grams: Option<i32>,
    pub fat_grams: Option<i32>,
}

/// Recipe repository for database operations
pub struct RecipeRepository;

impl RecipeRepository {
    /// Create a new recipe
    pub async fn create(pool: &PgPool, input: CreateRecipe) -> Result<RecipeRecord> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            INSERT INTO recipes (
                user_id, title, description, cuisine, meal_type, tags,
                ingredients, instructions, calories, protein_grams,
                carbs_grams, fat_grams
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, user_id, title, description, cuisine, meal_type, tags,
                      ingredients, instructions, calories, protein_grams,
                      carbs_grams, fat_grams, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.cuisine)
        .bind(&input.meal_type)
        .bind(&input.tags)
        .bind(&input.ingredients)
        .bind(&input.instructions)
        .bind(input.calories)
        .bind(input.protein_grams)
        .bind(input.carbs_grams)
        .bind(input.fat_grams)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a recipe by ID, scoped to its owner
    pub async fn get_by_id(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, user_id, title, description, cuisine, meal_type, tags,
                   ingredients, instructions, calories, protein_grams,
                   carbs_grams, fat_grams, created_at, updated_at
            FROM recipes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get all recipes for a user
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecipeRecord>> {
        let records = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, user_id, title, description, cuisine, meal_type, tags,
                   ingredients, instructions, calories, protein_grams,
                   carbs_grams, fat_grams, created_at, updated_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a recipe, merging only the provided fields
    ///
    /// Returns `None` when no row matches (id, user_id).
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateRecipe,
    ) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            UPDATE recipes SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                cuisine = COALESCE($5, cuisine),
                meal_type = COALESCE($6, meal_type),
                tags = COALESCE($7, tags),
                ingredients = COALESCE($8, ingredients),
                instructions = COALESCE($9, instructions),
                calories = COALESCE($10, calories),
                protein_grams = COALESCE($11, protein_grams),
                carbs_grams = COALESCE($12, carbs_grams),
                fat_grams = COALESCE($13, fat_grams),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, cuisine, meal_type, tags,
                      ingredients, instructions, calories, protein_grams,
                      carbs_grams, fat_grams, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&updates.title)
        .bind(&updates.description)
        .bind(&updates.cuisine)
        .bind(&updates.meal_type)
        .bind(&updates.tags)
        .bind(&updates.ingredients)
        .bind(&updates.instructions)
        .bind(updates.calories)
        .bind(updates.protein_grams)
        .bind(updates.carbs_grams)
        .bind(updates.fat_grams)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a recipe
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"DELETE FROM recipes WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
