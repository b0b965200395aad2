//! Tourist collection access

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::tourist::Tourist,
};

#[derive(Clone)]
pub struct TouristsRepository {
    collection: Collection<Tourist>,
}

impl TouristsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("tourists"),
        }
    }

    pub async fn list_by_group(&self, group: ObjectId) -> AppResult<Vec<Tourist>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": 1 })
            .build();
        let cursor = self.collection.find(doc! { "group": group }, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Tourist> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tourist {} not found", id.to_hex())))
    }

    pub async fn insert(&self, mut tourist: Tourist) -> AppResult<Tourist> {
        tourist.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&tourist, None).await?;
        tourist.id = result.inserted_id.as_object_id();
        Ok(tourist)
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Tourist {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    /// Cascade helper: remove every tourist of a group
    pub async fn delete_by_group(&self, group: ObjectId) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "group": group }, None)
            .await?;
        Ok(result.deleted_count)
    }
}
