//! Commercial excursion collection access (legacy parallel schema)

use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{Collection, Database};

use crate::{
    error::{is_duplicate_key, AppError, AppResult},
    models::commercial::CommercialExcursion,
};

#[derive(Clone)]
pub struct CommercialRepository {
    collection: Collection<CommercialExcursion>,
}

impl CommercialRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("commercial_excursions"),
        }
    }

    pub async fn insert(
        &self,
        mut commercial: CommercialExcursion,
    ) -> AppResult<CommercialExcursion> {
        commercial.created_at = Some(BsonDateTime::now());
        let result = self
            .collection
            .insert_one(&commercial, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Commercial excursion '{}'", commercial.slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        commercial.id = result.inserted_id.as_object_id();
        Ok(commercial)
    }

    pub async fn find_by_excursion(
        &self,
        excursion: ObjectId,
    ) -> AppResult<Option<CommercialExcursion>> {
        Ok(self
            .collection
            .find_one(doc! { "excursion": excursion }, None)
            .await?)
    }
}
