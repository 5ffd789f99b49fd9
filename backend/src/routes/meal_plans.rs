//! Meal plan API routes
//!
//! Entry listing hangs off the plan resource because a plan id is
//! required to list entries at all.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::routes::meal_plan_entries::list_entries;
use crate::services::meal_plans::{CreateMealPlanInput, MealPlanService, UpdateMealPlanInput};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use meal_planner_shared::types::{
    ApiResponse, CreateMealPlanRequest, DeletedResponse, MealPlanListResponse, MealPlanResponse,
    UpdateMealPlanRequest,
};

/// Create meal plan routes
pub fn meal_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_meal_plan).get(list_meal_plans))
        .route("/:id", put(update_meal_plan).delete(delete_meal_plan))
        .route("/:id/entries", get(list_entries))
}

/// POST /api/v1/meal-plans - Create a new meal plan
async fn create_meal_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMealPlanRequest>,
) -> Result<Json<ApiResponse<MealPlanResponse>>, ApiError> {
    let input = CreateMealPlanInput {
        name: req.name,
        start_date: req.start_date,
        end_date: req.end_date,
    };

    let plan = MealPlanService::create_plan(state.db(), auth.user_id, input).await?;

    Ok(Json(ApiResponse::new(to_response(plan))))
}

/// GET /api/v1/meal-plans - List the caller's meal plans
async fn list_meal_plans(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MealPlanListResponse>>, ApiError> {
    let plans = MealPlanService::get_plans(state.db(), auth.user_id).await?;

    let items: Vec<MealPlanResponse> = plans.into_iter().map(to_response).collect();
    let total = items.len() as i64;

    Ok(Json(ApiResponse::new(MealPlanListResponse { items, total })))
}

/// PUT /api/v1/meal-plans/:id - Update a meal plan
async fn update_meal_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateMealPlanRequest>,
) -> Result<Json<ApiResponse<MealPlanResponse>>, ApiError> {
    let plan_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid meal plan ID".to_string()))?;

    let input = UpdateMealPlanInput {
        name: req.name,
        start_date: req.start_date,
        end_date: req.end_date,
    };

    let plan = MealPlanService::update_plan(state.db(), auth.user_id, plan_id, input).await?;

    Ok(Json(ApiResponse::new(to_response(plan))))
}

/// DELETE /api/v1/meal-plans/:id - Delete a meal plan
async fn delete_meal_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let plan_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid meal plan ID".to_string()))?;

    let deleted_id = MealPlanService::delete_plan(state.db(), auth.user_id, plan_id).await?;

    Ok(Json(ApiResponse::new(DeletedResponse {
        id: deleted_id.to_string(),
    })))
}

/// Convert domain model to API response
fn to_response(plan: crate::services::meal_plans::MealPlan) -> MealPlanResponse {
    MealPlanResponse {
        id: plan.id.to_string(),
        name: plan.name,
        start_date: plan.start_date,
        end_date: plan.end_date,
        created_at: plan.created_at,
        updated_at: plan.updated_at,
    }
}
