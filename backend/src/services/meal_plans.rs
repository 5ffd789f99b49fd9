//! Meal plan service for plan management
//!
//! Provides business logic for:
//! - Plan creation (every field optional)
//! - The ownership guard used by all plan mutations and entry operations
//! - Partial updates and owner-scoped deletion

use crate::error::ApiError;
use crate::repositories::meal_plans::{
    CreateMealPlan, MealPlanRecord, MealPlanRepository, UpdateMealPlan,
};
use chrono::{DateTime, NaiveDate, Utc};
use meal_planner_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Meal plan entry
#[derive(Debug, Clone)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a meal plan
#[derive(Debug, Clone, Default)]
pub struct CreateMealPlanInput {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Input for updating a meal plan; absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateMealPlanInput {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateMealPlanInput {
    /// Whether at least one field carries an update
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }
}

/// Meal plan service for business logic
pub struct MealPlanService;

impl MealPlanService {
    /// Create a new meal plan
    ///
    /// Start and end dates are stored as given; no ordering between the
    /// two is enforced.
    pub async fn create_plan(
        pool: &PgPool,
        user_id: Uuid,
        input: CreateMealPlanInput,
    ) -> Result<MealPlan, ApiError> {
        if let Some(ref name) = input.name {
            validation::validate_plan_name(name).map_err(ApiError::Validation)?;
        }

        let create_input = CreateMealPlan {
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
        };

        let record = MealPlanRepository::create(pool, user_id, create_input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::record_to_plan(record))
    }

    /// Ownership guard: fetch a plan only if it belongs to the caller
    ///
    /// A plan that does not exist and a plan owned by another user both
    /// surface as `NotFound`, so callers cannot probe for foreign ids.
    pub async fn ensure_owned(
        pool: &PgPool,
        plan_id: Uuid,
        user_id: Uuid,
    ) -> Result<MealPlanRecord, ApiError> {
        MealPlanRepository::get_by_id(pool, plan_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))
    }

    /// Get all meal plans for a user
    pub async fn get_plans(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealPlan>, ApiError> {
        let records = MealPlanRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::record_to_plan).collect())
    }

    /// Update a meal plan
    pub async fn update_plan(
        pool: &PgPool,
        user_id: Uuid,
        plan_id: Uuid,
        input: UpdateMealPlanInput,
    ) -> Result<MealPlan, ApiError> {
        if !input.has_changes() {
            return Err(ApiError::Validation(
                "At least one field must be provided to update".to_string(),
            ));
        }

        if let Some(ref name) = input.name {
            validation::validate_plan_name(name).map_err(ApiError::Validation)?;
        }

        Self::ensure_owned(pool, plan_id, user_id).await?;

        let updates = UpdateMealPlan {
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
        };

        let record = MealPlanRepository::update(pool, plan_id, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

        Ok(Self::record_to_plan(record))
    }

    /// Delete a meal plan, returning its id
    pub async fn delete_plan(
        pool: &PgPool,
        user_id: Uuid,
        plan_id: Uuid,
    ) -> Result<Uuid, ApiError> {
        Self::ensure_owned(pool, plan_id, user_id).await?;

        let deleted = MealPlanRepository::delete(pool, plan_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            // Plan vanished between the ownership check and the delete
            return Err(ApiError::NotFound("Meal plan not found".to_string()));
        }

        Ok(plan_id)
    }

    /// Convert database record to domain model
    fn record_to_plan(record: MealPlanRecord) -> MealPlan {
        MealPlan {
            id: record.id,
            name: record.name,
            start_date: record.start_date,
            end_date: record.end_date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
