//! Storage representation of a persisted cat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Cat, CatId, CatIdentity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatRepoModel {
    pub id: CatId,
    pub name: String,
    pub birth_date: DateTime<Utc>,
    pub favorite_food: Option<String>,
    pub owner: Option<String>,
}

impl CatRepoModel {
    /// Attaches a store-assigned id to a validated cat.
    pub fn from_cat(id: CatId, cat: Cat) -> Self {
        Self {
            id,
            name: cat.name,
            birth_date: cat.birth_date,
            favorite_food: cat.favorite_food,
            owner: cat.owner,
        }
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

impl From<CatRepoModel> for Cat {
    fn from(model: CatRepoModel) -> Self {
        Cat::new(model.name, model.birth_date, model.favorite_food, model.owner)
    }
}
