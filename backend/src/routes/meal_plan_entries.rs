//! Meal plan entry API routes
//!
//! A single PUT endpoint serves both creation and replacement: the
//! request body's optional `id` picks the branch.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::meal_plan_entries::{MealPlanEntryService, UpsertMealPlanEntryInput};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Json, Router,
};
use meal_planner_shared::types::{
    ApiResponse, DeletedResponse, MealPlanEntryListResponse, MealPlanEntryResponse,
    UpsertMealPlanEntryRequest,
};

/// Create meal plan entry routes
pub fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/", put(upsert_entry))
        .route("/:id", delete(delete_entry))
}

/// PUT /api/v1/entries - Create or replace a meal plan entry
async fn upsert_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpsertMealPlanEntryRequest>,
) -> Result<Json<ApiResponse<MealPlanEntryResponse>>, ApiError> {
    let entry_id = req
        .id
        .as_deref()
        .map(uuid::Uuid::parse_str)
        .transpose()
        .map_err(|_| ApiError::Validation("Invalid entry ID".to_string()))?;

    let meal_plan_id = uuid::Uuid::parse_str(&req.meal_plan_id)
        .map_err(|_| ApiError::Validation("Invalid meal plan ID".to_string()))?;

    let recipe_id = req
        .recipe_id
        .as_deref()
        .map(uuid::Uuid::parse_str)
        .transpose()
        .map_err(|_| ApiError::Validation("Invalid recipe ID".to_string()))?;

    let input = UpsertMealPlanEntryInput {
        id: entry_id,
        meal_plan_id,
        entry_date: req.date,
        meal_slot: req.meal_slot,
        recipe_id,
        custom_title: req.custom_title,
        notes: req.notes,
    };

    let entry = MealPlanEntryService::upsert_entry(state.db(), auth.user_id, input).await?;

    Ok(Json(ApiResponse::new(to_response(entry))))
}

/// DELETE /api/v1/entries/:id - Delete a meal plan entry
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let entry_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid entry ID".to_string()))?;

    let deleted_id = MealPlanEntryService::delete_entry(state.db(), auth.user_id, entry_id).await?;

    Ok(Json(ApiResponse::new(DeletedResponse {
        id: deleted_id.to_string(),
    })))
}

/// GET /api/v1/meal-plans/:id/entries - List an owned plan's entries
pub async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MealPlanEntryListResponse>>, ApiError> {
    let meal_plan_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid meal plan ID".to_string()))?;

    let entries = MealPlanEntryService::get_entries(state.db(), auth.user_id, meal_plan_id).await?;

    let items: Vec<MealPlanEntryResponse> = entries.into_iter().map(to_response).collect();
    let total = items.len() as i64;

    Ok(Json(ApiResponse::new(MealPlanEntryListResponse {
        items,
        total,
    })))
}

/// Convert domain model to API response
fn to_response(entry: crate::services::meal_plan_entries::MealPlanEntry) -> MealPlanEntryResponse {
    MealPlanEntryResponse {
        id: entry.id.to_string(),
        meal_plan_id: entry.meal_plan_id.to_string(),
        date: entry.entry_date,
        meal_slot: entry.meal_slot,
        recipe_id: entry.recipe_id.map(|id| id.to_string()),
        custom_title: entry.custom_title,
        notes: entry.notes,
        created_at: entry.created_at,
    }
}
