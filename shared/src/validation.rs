//! Input validation functions
//!
//! This module provides validation utilities for user input. Every check
//! runs before any storage access.

/// Maximum length for short text fields (titles, names, slots)
const MAX_TITLE_LEN: usize = 200;

/// Validate a recipe title (required, non-empty)
pub fn validate_recipe_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > MAX_TITLE_LEN {
        return Err("Title too long".to_string());
    }
    Ok(())
}

/// Validate a meal plan name (optional, but non-empty when provided)
pub fn validate_plan_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > MAX_TITLE_LEN {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate a meal slot label (e.g. breakfast, lunch, dinner, snack)
///
/// Slots are free-form labels; only emptiness and length are enforced.
pub fn validate_meal_slot(slot: &str) -> Result<(), String> {
    if slot.trim().is_empty() {
        return Err("Meal slot cannot be empty".to_string());
    }
    if slot.len() > 100 {
        return Err("Meal slot too long".to_string());
    }
    Ok(())
}

/// Validate a calorie value (strictly positive)
pub fn validate_calories(calories: i32) -> Result<(), String> {
    if calories <= 0 {
        return Err("Calories must be positive".to_string());
    }
    if calories > 50_000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a macronutrient value in grams (non-negative)
pub fn validate_macro_grams(grams: i32) -> Result<(), String> {
    if grams < 0 {
        return Err("Macro grams cannot be negative".to_string());
    }
    if grams > 10_000 {
        return Err("Macro value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}
