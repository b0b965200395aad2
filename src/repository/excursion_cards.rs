//! Excursion card collection access

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{is_duplicate_key, AppError, AppResult},
    models::excursion_card::ExcursionCard,
};

#[derive(Clone)]
pub struct CardsRepository {
    collection: Collection<ExcursionCard>,
}

impl CardsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("excursion_cards"),
        }
    }

    /// List all cards, newest first
    pub async fn list(&self) -> AppResult<Vec<ExcursionCard>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<ExcursionCard> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Excursion {} not found", id.to_hex())))
    }

    /// Insert a card; duplicate commerce slug maps to the conflict error
    pub async fn insert(&self, mut card: ExcursionCard) -> AppResult<ExcursionCard> {
        card.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&card, None).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::AlreadyExists(format!("Excursion '{}'", card.commercial_slug))
            } else {
                AppError::Database(e)
            }
        })?;
        card.id = result.inserted_id.as_object_id();
        Ok(card)
    }

    /// Apply a partial $set; 404 when the card is absent
    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let slug = set.get_str("commercialSlug").unwrap_or_default().to_string();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Excursion '{}'", slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Excursion {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Excursion {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    /// Append gallery image URLs
    pub async fn push_images(&self, id: ObjectId, urls: &[String]) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$push": { "images": { "$each": urls } } },
                None,
            )
            .await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Excursion {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    /// Splice one image URL out of the stored array
    pub async fn pull_image(&self, id: ObjectId, url: &str) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$pull": { "images": url } },
                None,
            )
            .await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Excursion {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }
}
