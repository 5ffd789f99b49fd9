//! Recipe API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::recipes::{CreateRecipeInput, RecipeService, UpdateRecipeInput};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use meal_planner_shared::types::{
    ApiResponse, CreateRecipeRequest, DeletedResponse, RecipeListResponse, RecipeResponse,
    UpdateRecipeRequest,
};

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_recipe).get(list_recipes))
        .route("/:id", put(update_recipe).delete(delete_recipe))
}

/// POST /api/v1/recipes - Create a new recipe
async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<Json<ApiResponse<RecipeResponse>>, ApiError> {
    let input = CreateRecipeInput {
        title: req.title,
        description: req.description,
        cuisine: req.cuisine,
        meal_type: req.meal_type,
        tags: req.tags,
        ingredients: req.ingredients,
        instructions: req.instructions,
        calories: req.calories,
        protein_grams: req.protein_grams,
        carbs_grams: req.carbs_grams,
        fat_grams: req.fat_grams,
    };

    let recipe = RecipeService::create_recipe(state.db(), auth.user_id, input).await?;

    Ok(Json(ApiResponse::new(to_response(recipe))))
}

/// GET /api/v1/recipes - List the caller's recipes
async fn list_recipes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<RecipeListResponse>>, ApiError> {
    let recipes = RecipeService::get_recipes(state.db(), auth.user_id).await?;

    let items: Vec<RecipeResponse> = recipes.into_iter().map(to_response).collect();
    let total = items.len() as i64;

    Ok(Json(ApiResponse::new(RecipeListResponse { items, total })))
}

/// PUT /api/v1/recipes/:id - Update a recipe
async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<ApiResponse<RecipeResponse>>, ApiError> {
    let recipe_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid recipe ID".to_string()))?;

    let input = UpdateRecipeInput {
        title: req.title,
        description: req.description,
        cuisine: req.cuisine,
        meal_type: req.meal_type,
        tags: req.tags,
        ingredients: req.ingredients,
        instructions: req.instructions,
        calories: req.calories,
        protein_grams: req.protein_grams,
        carbs_grams: req.carbs_grams,
        fat_grams: req.fat_grams,
    };

    let recipe = RecipeService::update_recipe(state.db(), auth.user_id, recipe_id, input).await?;

    Ok(Json(ApiResponse::new(to_response(recipe))))
}

/// DELETE /api/v1/recipes/:id - Delete a recipe
async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let recipe_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid recipe ID".to_string()))?;

    let deleted_id = RecipeService::delete_recipe(state.db(), auth.user_id, recipe_id).await?;

    Ok(Json(ApiResponse::new(DeletedResponse {
        id: deleted_id.to_string(),
    })))
}

/// Convert domain model to API response
fn to_response(recipe: crate::services::recipes::Recipe) -> RecipeResponse {
    RecipeResponse {
        id: recipe.id.to_string(),
        title: recipe.title,
        description: recipe.description,
        cuisine: recipe.cuisine,
        meal_type: recipe.meal_type,
        tags: recipe.tags,
        ingredients: recipe.ingredients,
        instructions: recipe.instructions,
        calories: recipe.calories,
        protein_grams: recipe.protein_grams,
        carbs_grams: recipe.carbs_grams,
        fat_grams: recipe.fat_grams,
        created_at: recipe.created_at,
        updated_at: recipe.updated_at,
    }
}
