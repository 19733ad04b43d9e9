use serde::{Deserialize, Serialize};
use skinsafe_core::domain::{
    conflict::value_objects::ConflictRuleSet,
    product::entities::{Product, RoutineProducts},
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Upper bound on products in one routine slot
pub const MAX_SLOT_PRODUCTS: usize = 50;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DetectConflictsRequest {
    #[validate(length(max = 50, message = "a routine slot holds at most 50 products"))]
    pub products: Vec<Product>,

    /// Rule table to use instead of the configured one
    #[serde(default)]
    pub rules: Option<ConflictRuleSet>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DetectRoutineConflictsRequest {
    #[serde(flatten)]
    #[validate(custom(function = "validate_routine_size"))]
    pub routine: RoutineProducts,
}

pub fn validate_routine_size(routine: &RoutineProducts) -> Result<(), ValidationError> {
    let oversized = [&routine.morning, &routine.evening, &routine.weekly]
        .iter()
        .any(|slot| slot.len() > MAX_SLOT_PRODUCTS);

    if oversized {
        let mut error = ValidationError::new("routine_size");
        error.message = Some("a routine slot holds at most 50 products".into());
        return Err(error);
    }

    Ok(())
}
