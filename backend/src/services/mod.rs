//! Business logic services
//!
//! Validation and ownership checks live here; handlers stay thin.

pub mod meal_plan_entries;
pub mod meal_plans;
pub mod recipes;
pub mod user;

pub use meal_plan_entries::MealPlanEntryService;
pub use meal_plans::MealPlanService;
pub use recipes::RecipeService;
pub use user::UserService;
