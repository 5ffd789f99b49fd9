//! Database repositories
//!
//! Provides data access layer for database operations. Every query on a
//! user-owned table is scoped by `user_id`; there is no unscoped access
//! path to another user's rows.

pub mod meal_plan_entries;
pub mod meal_plans;
pub mod recipes;
pub mod user;

pub use meal_plan_entries::{
    CreateMealPlanEntry, MealPlanEntryRecord, MealPlanEntryRepository, ReplaceMealPlanEntry,
};
pub use meal_plans::{CreateMealPlan, MealPlanRecord, MealPlanRepository, UpdateMealPlan};
pub use recipes::{CreateRecipe, RecipeRecord, RecipeRepository, UpdateRecipe};
pub use user::UserRepository;
