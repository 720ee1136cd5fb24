//! Cat domain model and validation rules.
//!
//! This module provides the central `Cat` type used throughout the service:
//!
//! - **Domain Model**: `Cat`, a record that has not been persisted yet (no id)
//! - **Validation**: field constraints expressed with `validator`, reported as a
//!   structured list of [`FieldViolation`]s
//! - **Identity**: [`CatIdentity`], the tuple of fields that must be unique
//!   across stored records
//! - **Interoperability**: conversions between API requests, responses and
//!   repository representations

mod request;
pub use request::*;

mod response;
pub use response::*;

mod repository;
pub use repository::*;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::constants::{CAT_NAME_REGEX, CAT_OWNER_REGEX};

/// Store-assigned identifier of a persisted cat.
pub type CatId = i64;

/// A validated cat record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Cat {
    #[validate(
        length(min = 1, max = 30, message = "name must be between 1 and 30 characters"),
        regex(
            path = *CAT_NAME_REGEX,
            message = "name must start with a word character followed by word or space characters"
        )
    )]
    pub name: String,
    pub birth_date: DateTime<Utc>,
    #[validate(
        length(min = 1, max = 30, message = "favoriteFood must be between 1 and 30 characters"),
        regex(
            path = *CAT_NAME_REGEX,
            message = "favoriteFood must start with a word character followed by word or space characters"
        )
    )]
    pub favorite_food: Option<String>,
    #[validate(
        length(max = 30, message = "owner must be at most 30 characters"),
        regex(
            path = *CAT_OWNER_REGEX,
            message = "owner must contain only word or space characters"
        )
    )]
    pub owner: Option<String>,
}

impl Cat {
    pub fn new(
        name: String,
        birth_date: DateTime<Utc>,
        favorite_food: Option<String>,
        owner: Option<String>,
    ) -> Self {
        Self {
            name,
            birth_date,
            favorite_food,
            owner,
        }
    }

    /// Checks every field constraint and reports all violations at once.
    pub fn validate(&self) -> Result<(), CatValidationError> {
        Validate::validate(self).map_err(CatValidationError::from)
    }

    pub fn identity(&self) -> CatIdentity {
        CatIdentity {
            birth_date: self.birth_date,
            name: self.name.clone(),
            owner: self.owner.clone(),
            favorite_food: self.favorite_food.clone(),
        }
    }
}

/// The fields two stored cats may never share all at once.
///
/// Absent optional values are equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatIdentity {
    pub birth_date: DateTime<Utc>,
    pub name: String,
    pub owner: Option<String>,
    pub favorite_food: Option<String>,
}

impl CatIdentity {
    /// Stable hex digest of the identity, used as a unique index key.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.birth_date.timestamp_millis().to_be_bytes());
        hash_field(&mut hasher, Some(&self.name));
        hash_field(&mut hasher, self.owner.as_deref());
        hash_field(&mut hasher, self.favorite_food.as_deref());
        format!("{:x}", hasher.finalize())
    }
}

// Length-prefixed so that ("ab", "c") and ("a", "bc") never collide.
fn hash_field(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(value) => {
            hasher.update([1u8]);
            hasher.update((value.len() as u64).to_be_bytes());
            hasher.update(value.as_bytes());
        }
        None => hasher.update([0u8]),
    }
}

/// A single broken field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// Field name as it appears in the JSON record.
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "required", format!("{} is required", field))
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid cat record: {}", describe_violations(.violations))]
pub struct CatValidationError {
    pub violations: Vec<FieldViolation>,
}

impl CatValidationError {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Self { violations }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for CatValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = json_field_name(&field.to_string());
                field_errors
                    .iter()
                    .map(|error| {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field));
                        FieldViolation::new(&field, &error.code, message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self::new(violations)
    }
}

fn json_field_name(field: &str) -> String {
    match field {
        "birth_date" => "birthDate".to_string(),
        "favorite_food" => "favoriteFood".to_string(),
        other => other.to_string(),
    }
}

/// Centralized conversion from CatValidationError to ApiError
impl From<CatValidationError> for crate::models::ApiError {
    fn from(error: CatValidationError) -> Self {
        crate::models::ApiError::BadRequest(error.to_string())
    }
}
