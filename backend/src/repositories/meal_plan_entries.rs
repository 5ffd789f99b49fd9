//! Meal plan entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Meal plan entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealPlanEntryRecord {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub meal_slot: String,
    pub recipe_id: Option<Uuid>,
    pub custom_title: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a meal plan entry
#[derive(Debug, Clone)]
pub struct CreateMealPlanEntry {
    pub meal_plan_id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub meal_slot: String,
    pub recipe_id: Option<Uuid>,
    pub custom_title: Option<String>,
    pub notes: Option<String>,
}

/// Input for replacing a meal plan entry
///
/// Unlike the recipe/meal-plan updates, this is a full overwrite: every
/// mutable column is set from the input, and an omitted optional clears
/// the stored value.
#[derive(Debug, Clone)]
pub struct ReplaceMealPlanEntry {
    pub meal_plan_id: Uuid,
    pub entry_date: NaiveDate,
    pub meal_slot: String,
    pub recipe_id: Option<Uuid>,
    pub custom_title: Option<String>,
    pub notes: Option<String>,
}

/// Meal plan entry repository for database operations
pub struct MealPlanEntryRepository;

impl MealPlanEntryRepository {
    /// Create a new meal plan entry
    pub async fn create(pool: &PgPool, input: CreateMealPlanEntry) -> Result<MealPlanEntryRecord> {
        let record = sqlx::query_as::<_, MealPlanEntryRecord>(
            r#"
            INSERT INTO meal_plan_entries (
                meal_plan_id, user_id, entry_date, meal_slot,
                recipe_id, custom_title, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, meal_plan_id, user_id, entry_date, meal_slot,
                      recipe_id, custom_title, notes, created_at
            "#,
        )
        .bind(input.meal_plan_id)
        .bind(input.user_id)
        .bind(input.entry_date)
        .bind(&input.meal_slot)
        .bind(input.recipe_id)
        .bind(&input.custom_title)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get an entry by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MealPlanEntryRecord>> {
        let record = sqlx::query_as::<_, MealPlanEntryRecord>(
            r#"
            SELECT id, meal_plan_id, user_id, entry_date, meal_slot,
                   recipe_id, custom_title, notes, created_at
            FROM meal_plan_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get all entries for a meal plan, scoped to its owner
    pub async fn get_by_plan(
        pool: &PgPool,
        meal_plan_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<MealPlanEntryRecord>> {
        let records = sqlx::query_as::<_, MealPlanEntryRecord>(
            r#"
            SELECT id, meal_plan_id, user_id, entry_date, meal_slot,
                   recipe_id, custom_title, notes, created_at
            FROM meal_plan_entries
            WHERE meal_plan_id = $1 AND user_id = $2
            ORDER BY entry_date ASC, created_at ASC
            "#,
        )
        .bind(meal_plan_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Replace every mutable field of an entry
    ///
    /// Returns `None` when no row matches (id, user_id).
    pub async fn replace(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        input: ReplaceMealPlanEntry,
    ) -> Result<Option<MealPlanEntryRecord>> {
        let record = sqlx::query_as::<_, MealPlanEntryRecord>(
            r#"
            UPDATE meal_plan_entries SET
                meal_plan_id = $3,
                entry_date = $4,
                meal_slot = $5,
                recipe_id = $6,
                custom_title = $7,
                notes = $8
            WHERE id = $1 AND user_id = $2
            RETURNING id, meal_plan_id, user_id, entry_date, meal_slot,
                      recipe_id, custom_title, notes, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(input.meal_plan_id)
        .bind(input.entry_date)
        .bind(&input.meal_slot)
        .bind(input.recipe_id)
        .bind(&input.custom_title)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"DELETE FROM meal_plan_entries WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
