//! Reference data collection access (transports, guides, tickets, ...)

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::reference::{ReferenceData, ReferenceKind},
};

#[derive(Clone)]
pub struct ReferenceRepository {
    collection: Collection<ReferenceData>,
}

impl ReferenceRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reference_data"),
        }
    }

    pub async fn list_by_kind(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceData>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "kind": kind.as_str() }, options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get an entry of the expected kind; a wrong-kind id answers 404
    pub async fn get(&self, kind: ReferenceKind, id: ObjectId) -> AppResult<ReferenceData> {
        self.collection
            .find_one(doc! { "_id": id, "kind": kind.as_str() }, None)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} {} not found", kind.as_str(), id.to_hex()))
            })
    }

    pub async fn insert(&self, mut entry: ReferenceData) -> AppResult<ReferenceData> {
        entry.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&entry, None).await?;
        entry.id = result.inserted_id.as_object_id();
        Ok(entry)
    }

    pub async fn update(&self, kind: ReferenceKind, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(kind, id).await?;
            return Ok(());
        }
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "kind": kind.as_str() },
                doc! { "$set": set },
                None,
            )
            .await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                kind.as_str(),
                id.to_hex()
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, kind: ReferenceKind, id: ObjectId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id, "kind": kind.as_str() }, None)
            .await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                kind.as_str(),
                id.to_hex()
            )));
        }
        Ok(())
    }
}
