//! Group collection access

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::group::Group,
};

#[derive(Clone)]
pub struct GroupsRepository {
    collection: Collection<Group>,
}

impl GroupsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("groups"),
        }
    }

    /// List groups, optionally scoped to one excursion, earliest date first
    pub async fn list(&self, excursion: Option<ObjectId>) -> AppResult<Vec<Group>> {
        let filter = match excursion {
            Some(id) => doc! { "excursion": id },
            None => doc! {},
        };
        let options = FindOptions::builder()
            .sort(doc! { "date": 1, "time": 1 })
            .build();
        let cursor = self.collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Group> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id.to_hex())))
    }

    pub async fn insert(&self, mut group: Group) -> AppResult<Group> {
        group.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&group, None).await?;
        group.id = result.inserted_id.as_object_id();
        Ok(group)
    }

    /// Apply a partial $set; 404 when the group is absent
    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Group {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Group {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    /// Reserve seats with one conditional update: the filter only matches
    /// while `bookedSeats + seats` stays within `totalSeats`, so the
    /// counter cannot overshoot through concurrent tourist creation.
    pub async fn reserve_seats(&self, id: ObjectId, seats: i32) -> AppResult<()> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "$expr": { "$lte": [ { "$add": ["$bookedSeats", seats] }, "$totalSeats" ] },
                },
                doc! { "$inc": { "bookedSeats": seats } },
                None,
            )
            .await?;

        if updated.is_none() {
            // Distinguish a missing group from a full one
            self.get(id).await?;
            return Err(AppError::Validation("Group is full".to_string()));
        }
        Ok(())
    }

    /// Release previously reserved seats, clamped at zero
    pub async fn release_seats(&self, id: ObjectId, seats: i32) -> AppResult<()> {
        self.collection
            .update_one(
                doc! { "_id": id, "bookedSeats": { "$gte": seats } },
                doc! { "$inc": { "bookedSeats": -seats } },
                None,
            )
            .await?;
        Ok(())
    }
}
