//! Booking collection access

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingStatus},
};

#[derive(Clone)]
pub struct BookingsRepository {
    collection: Collection<Booking>,
}

impl BookingsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("bookings"),
        }
    }

    /// List bookings, optionally filtered by status, newest first
    pub async fn list(&self, status: Option<BookingStatus>) -> AppResult<Vec<Booking>> {
        let filter = match status {
            Some(s) => doc! { "status": mongodb::bson::to_bson(&s)? },
            None => doc! {},
        };
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let cursor = self.collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Booking> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id.to_hex())))
    }

    pub async fn insert(&self, mut booking: Booking) -> AppResult<Booking> {
        booking.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&booking, None).await?;
        booking.id = result.inserted_id.as_object_id();
        Ok(booking)
    }

    /// Apply a partial $set; 404 when the booking is absent
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
                "Booking {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Booking {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }
}
