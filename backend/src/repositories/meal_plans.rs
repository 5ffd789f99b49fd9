//! Meal plan repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Meal plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealPlanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a meal plan
#[derive(Debug, Clone, Default)]
pub struct CreateMealPlan {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Input for updating a meal plan; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateMealPlan {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Meal plan repository for database operations
pub struct MealPlanRepository;

impl MealPlanRepository {
    /// Create a new meal plan
    pub async fn create(pool: &PgPool, user_id: Uuid, input: CreateMealPlan) -> Result<MealPlanRecord> {
        let record = sqlx::query_as::<_, MealPlanRecord>(
            r#"
            INSERT INTO meal_plans (user_id, name, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a meal plan by ID, scoped to its owner
    ///
    /// A missing plan and a plan owned by someone else both come back as
    /// `None`; callers cannot tell the two apart.
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MealPlanRecord>> {
        let record = sqlx::query_as::<_, MealPlanRecord>(
            r#"
            SELECT id, user_id, name, start_date, end_date, created_at, updated_at
            FROM meal_plans
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get all meal plans for a user
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealPlanRecord>> {
        let records = sqlx::query_as::<_, MealPlanRecord>(
            r#"
            SELECT id, user_id, name, start_date, end_date, created_at, updated_at
            FROM meal_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a meal plan, merging only the provided fields
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateMealPlan,
    ) -> Result<Option<MealPlanRecord>> {
        let record = sqlx::query_as::<_, MealPlanRecord>(
            r#"
            UPDATE meal_plans SET
                name = COALESCE($3, name),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&updates.name)
        .bind(updates.start_date)
        .bind(updates.end_date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a meal plan
    ///
    /// Entries referencing the plan are left in place; they become
    /// unreachable through the entry-listing path once the plan is gone.
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"DELETE FROM meal_plans WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
