//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope wrapping every data-bearing response
///
/// All CRUD operations respond with `{ "success": true, "data": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Recipe Types
// ============================================================================

/// Recipe creation request
///
/// Only `title` is required; the nutrition fields are per-serving integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<i32>,
}

/// Recipe update request
///
/// Every field is optional; a field left out keeps its stored value.
/// At least one field must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<i32>,
}

/// Recipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_grams: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub items: Vec<RecipeResponse>,
    pub total: i64,
}

// ============================================================================
// Meal Plan Types
// ============================================================================

/// Meal plan creation request (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMealPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Meal plan update request; at least one field must be present
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Meal plan response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Meal plan listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanListResponse {
    pub items: Vec<MealPlanResponse>,
    pub total: i64,
}

// ============================================================================
// Meal Plan Entry Types
// ============================================================================

/// Meal plan entry upsert request
///
/// When `id` is present the matching entry is replaced in full; omitted
/// optional fields are cleared, not kept. Without an `id` a new entry is
/// created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertMealPlanEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub meal_plan_id: String,
    pub date: NaiveDate,
    pub meal_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Meal plan entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanEntryResponse {
    pub id: String,
    pub meal_plan_id: String,
    pub date: NaiveDate,
    pub meal_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Meal plan entry listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanEntryListResponse {
    pub items: Vec<MealPlanEntryResponse>,
    pub total: i64,
}

/// Deletion acknowledgement carrying the deleted record's id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_sets_success() {
        let envelope = ApiResponse::new(DeletedResponse {
            id: "abc".to_string(),
        });
        assert!(envelope.success);
        assert_eq!(envelope.data.id, "abc");
    }

    #[test]
    fn test_update_recipe_request_omits_absent_fields() {
        let req = UpdateRecipeRequest {
            title: Some("Soup".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"title":"Soup"}"#);
    }

    #[test]
    fn test_upsert_request_roundtrip_without_id() {
        let json = r#"{
            "meal_plan_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "date": "2024-01-01",
            "meal_slot": "breakfast",
            "custom_title": "Oats"
        }"#;
        let req: UpsertMealPlanEntryRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert_eq!(req.meal_slot, "breakfast");
        assert_eq!(req.custom_title.as_deref(), Some("Oats"));
        assert!(req.notes.is_none());
    }
}
