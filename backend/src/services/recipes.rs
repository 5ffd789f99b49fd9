//! Recipe service for recipe management
//!
//! Provides business logic for:
//! - Recipe creation with nutrition field validation
//! - Partial updates (only provided fields overwrite stored values)
//! - Owner-scoped deletion and listing

use crate::error::ApiError;
use crate::repositories::recipes::{CreateRecipe, RecipeRepository, UpdateRecipe};
use chrono::{DateTime, Utc};
use meal_planner_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe entry
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
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
pub struct CreateRecipeInput {
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

/// Input for updating a recipe; absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
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

impl UpdateRecipeInput {
    /// Whether at least one field carries an update
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.cuisine.is_some()
            || self.meal_type.is_some()
            || self.tags.is_some()
            || self.ingredients.is_some()
            || self.instructions.is_some()
            || self.calories.is_some()
            || self.protein_grams.is_some()
            || self.carbs_grams.is_some()
            || self.fat_grams.is_some()
    }
}

/// Recipe service for business logic
pub struct RecipeService;

impl RecipeService {
    /// Create a new recipe
    pub async fn create_recipe(
        pool: &PgPool,
        user_id: Uuid,
        input: CreateRecipeInput,
    ) -> Result<Recipe, ApiError> {
        validation::validate_recipe_title(&input.title).map_err(ApiError::Validation)?;
        Self::validate_nutrition(
            input.calories,
            input.protein_grams,
            input.carbs_grams,
            input.fat_grams,
        )?;

        let create_input = CreateRecipe {
            user_id,
            title: input.title,
            description: input.description,
            cuisine: input.cuisine,
            meal_type: input.meal_type,
            tags: input.tags,
            ingredients: input.ingredients,
            instructions: input.instructions,
            calories: input.calories,
            protein_grams: input.protein_grams,
            carbs_grams: input.carbs_grams,
            fat_grams: input.fat_grams,
        };

        let record = RecipeRepository::create(pool, create_input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::record_to_recipe(record))
    }

    /// Get all recipes for a user
    pub async fn get_recipes(pool: &PgPool, user_id: Uuid) -> Result<Vec<Recipe>, ApiError> {
        let records = RecipeRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::record_to_recipe).collect())
    }

    /// Update a recipe
    ///
    /// Rejects the call before touching storage when no field is provided
    /// or a provided field fails validation.
    pub async fn update_recipe(
        pool: &PgPool,
        user_id: Uuid,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, ApiError> {
        if !input.has_changes() {
            return Err(ApiError::Validation(
                "At least one field must be provided to update".to_string(),
            ));
        }

        if let Some(ref title) = input.title {
            validation::validate_recipe_title(title).map_err(ApiError::Validation)?;
        }
        Self::validate_nutrition(
            input.calories,
            input.protein_grams,
            input.carbs_grams,
            input.fat_grams,
        )?;

        let updates = UpdateRecipe {
            title: input.title,
            description: input.description,
            cuisine: input.cuisine,
            meal_type: input.meal_type,
            tags: input.tags,
            ingredients: input.ingredients,
            instructions: input.instructions,
            calories: input.calories,
            protein_grams: input.protein_grams,
            carbs_grams: input.carbs_grams,
            fat_grams: input.fat_grams,
        };

        let record = RecipeRepository::update(pool, recipe_id, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

        Ok(Self::record_to_recipe(record))
    }

    /// Delete a recipe, returning its id
    pub async fn delete_recipe(
        pool: &PgPool,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Uuid, ApiError> {
        let deleted = RecipeRepository::delete(pool, recipe_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Recipe not found".to_string()));
        }

        Ok(recipe_id)
    }

    /// Validate the optional nutrition fields
    fn validate_nutrition(
        calories: Option<i32>,
        protein_grams: Option<i32>,
        carbs_grams: Option<i32>,
        fat_grams: Option<i32>,
    ) -> Result<(), ApiError> {
        if let Some(calories) = calories {
            validation::validate_calories(calories).map_err(ApiError::Validation)?;
        }
        for grams in [protein_grams, carbs_grams, fat_grams].into_iter().flatten() {
            validation::validate_macro_grams(grams).map_err(ApiError::Validation)?;
        }
        Ok(())
    }

    /// Convert database record to domain model
    fn record_to_recipe(record: crate::repositories::recipes::RecipeRecord) -> Recipe {
        Recipe {
            id: record.id,
            title: record.title,
            description: record.description,
            cuisine: record.cuisine,
            meal_type: record.meal_type,
            tags: record.tags,
            ingredients: record.ingredients,
            instructions: record.instructions,
            calories: record.calories,
            protein_grams: record.protein_grams,
            carbs_grams: record.carbs_grams,
            fat_grams: record.fat_grams,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
