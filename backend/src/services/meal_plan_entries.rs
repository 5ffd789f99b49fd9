//! Meal plan entry service
//!
//! Provides business logic for:
//! - Upsert: create when no id is given, full replace when one is
//! - Owner-scoped deletion and per-plan listing
//!
//! Every operation first checks that the referenced meal plan belongs to
//! the caller. The optional `recipe_id` is stored as given and is not
//! checked against the caller's recipes; an entry may point at any recipe
//! id, including another user's.

use crate::error::ApiError;
use crate::repositories::meal_plan_entries::{
    CreateMealPlanEntry, MealPlanEntryRecord, MealPlanEntryRepository, ReplaceMealPlanEntry,
};
use crate::services::meal_plans::MealPlanService;
use chrono::{DateTime, NaiveDate, Utc};
use meal_planner_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Meal plan entry
#[derive(Debug, Clone)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub entry_date: NaiveDate,
    pub meal_slot: String,
    pub recipe_id: Option<Uuid>,
    pub custom_title: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for the entry upsert
///
/// `id` decides the branch: present means replace, absent means create.
#[derive(Debug, Clone)]
pub struct UpsertMealPlanEntryInput {
    pub id: Option<Uuid>,
    pub meal_plan_id: Uuid,
    pub entry_date: NaiveDate,
    pub meal_slot: String,
    pub recipe_id: Option<Uuid>,
    pub custom_title: Option<String>,
    pub notes: Option<String>,
}

/// Meal plan entry service for business logic
pub struct MealPlanEntryService;

impl MealPlanEntryService {
    /// Create or replace an entry
    ///
    /// The replace branch overwrites every mutable field, so optionals
    /// omitted from the input are cleared rather than kept. Duplicate
    /// (date, slot) pairs within a plan are allowed; each upsert without
    /// an id makes a new entry.
    pub async fn upsert_entry(
        pool: &PgPool,
        user_id: Uuid,
        input: UpsertMealPlanEntryInput,
    ) -> Result<MealPlanEntry, ApiError> {
        validation::validate_meal_slot(&input.meal_slot).map_err(ApiError::Validation)?;

        MealPlanService::ensure_owned(pool, input.meal_plan_id, user_id).await?;

        let record = match input.id {
            Some(entry_id) => {
                // The entry itself must belong to the caller as well; an id
                // from another user's entry reads as missing.
                MealPlanEntryRepository::get_by_id(pool, entry_id, user_id)
                    .await
                    .map_err(ApiError::Internal)?
                    .ok_or_else(|| ApiError::NotFound("Meal plan entry not found".to_string()))?;

                let replace_input = ReplaceMealPlanEntry {
                    meal_plan_id: input.meal_plan_id,
                    entry_date: input.entry_date,
                    meal_slot: input.meal_slot,
                    recipe_id: input.recipe_id,
                    custom_title: input.custom_title,
                    notes: input.notes,
                };

                MealPlanEntryRepository::replace(pool, entry_id, user_id, replace_input)
                    .await
                    .map_err(ApiError::Internal)?
                    .ok_or_else(|| ApiError::NotFound("Meal plan entry not found".to_string()))?
            }
            None => {
                let create_input = CreateMealPlanEntry {
                    meal_plan_id: input.meal_plan_id,
                    user_id,
                    entry_date: input.entry_date,
                    meal_slot: input.meal_slot,
                    recipe_id: input.recipe_id,
                    custom_title: input.custom_title,
                    notes: input.notes,
                };

                MealPlanEntryRepository::create(pool, create_input)
                    .await
                    .map_err(ApiError::Internal)?
            }
        };

        Ok(Self::record_to_entry(record))
    }

    /// Delete an entry, returning its id
    pub async fn delete_entry(
        pool: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Uuid, ApiError> {
        let deleted = MealPlanEntryRepository::delete(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Meal plan entry not found".to_string()));
        }

        Ok(entry_id)
    }

    /// Get all entries for an owned meal plan
    pub async fn get_entries(
        pool: &PgPool,
        user_id: Uuid,
        meal_plan_id: Uuid,
    ) -> Result<Vec<MealPlanEntry>, ApiError> {
        MealPlanService::ensure_owned(pool, meal_plan_id, user_id).await?;

        let records = MealPlanEntryRepository::get_by_plan(pool, meal_plan_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::record_to_entry).collect())
    }

    /// Convert database record to domain model
    fn record_to_entry(record: MealPlanEntryRecord) -> MealPlanEntry {
        MealPlanEntry {
            id: record.id,
            meal_plan_id: record.meal_plan_id,
            entry_date: record.entry_date,
            meal_slot: record.meal_slot,
            recipe_id: record.recipe_id,
            custom_title: record.custom_title,
            notes: record.notes,
            created_at: record.created_at,
        }
    }
}
