//! API request model for creating cats.
//!
//! Every field is optional at the deserialization layer so that a missing
//! `name` or `birthDate` surfaces as a field violation instead of an opaque
//! JSON error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Cat, CatValidationError, FieldViolation},
    utils::parse_iso_datetime,
};

/// Request structure for creating a new cat. The id is always assigned by the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CatCreateRequest {
    #[schema(example = "Mustache")]
    pub name: Option<String>,
    /// ISO-8601 date-time. A value without offset is read as UTC.
    #[schema(example = "2021-04-01T17:24:06.667")]
    pub birth_date: Option<String>,
    #[schema(example = "Chicken")]
    pub favorite_food: Option<String>,
    #[schema(example = "Amir")]
    pub owner: Option<String>,
}

impl TryFrom<CatCreateRequest> for Cat {
    type Error = CatValidationError;

    fn try_from(request: CatCreateRequest) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let birth_date = match request.birth_date.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push(FieldViolation::required("birthDate"));
                None
            }
            Some(raw) => match parse_iso_datetime(raw) {
                Ok(birth_date) => Some(birth_date),
                Err(err) => {
                    violations.push(FieldViolation::new("birthDate", "format", err.to_string()));
                    None
                }
            },
        };

        let name_missing = request.name.is_none();
        let candidate = Cat::new(
            request.name.unwrap_or_default(),
            birth_date.unwrap_or_default(),
            request.favorite_food,
            request.owner,
        );

        if let Err(err) = candidate.validate() {
            violations.extend(
                err.violations
                    .into_iter()
                    .filter(|v| !(name_missing && v.field == "name")),
            );
        }
        if name_missing {
            violations.push(FieldViolation::required("name"));
        }

        if violations.is_empty() {
            Ok(candidate)
        } else {
            Err(CatValidationError::new(violations))
        }
    }
}
