//! Outgoing representation of a persisted cat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CatId, CatRepoModel};

/// Response structure for cat API endpoints
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatResponse {
    #[schema(example = 1)]
    pub id: CatId,
    #[schema(example = "Mustache")]
    pub name: String,
    pub birth_date: DateTime<Utc>,
    #[schema(example = "Chicken")]
    pub favorite_food: Option<String>,
    #[schema(example = "Amir")]
    pub owner: Option<String>,
}

impl From<CatRepoModel> for CatResponse {
    fn from(model: CatRepoModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_date: model.birth_date,
            favorite_food: model.favorite_food,
            owner: model.owner,
        }
    }
}
