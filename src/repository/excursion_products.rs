//! Excursion product collection access

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::excursion_product::ExcursionProduct,
};

#[derive(Clone)]
pub struct ProductsRepository {
    collection: Collection<ExcursionProduct>,
}

impl ProductsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("excursion_products"),
        }
    }

    /// List products, optionally scoped to one excursion card
    pub async fn list(&self, card_id: Option<ObjectId>) -> AppResult<Vec<ExcursionProduct>> {
        let filter = match card_id {
            Some(id) => doc! { "excursionCard._id": id },
            None => doc! {},
        };
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let cursor = self.collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<ExcursionProduct> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id.to_hex())))
    }

    pub async fn insert(&self, mut product: ExcursionProduct) -> AppResult<ExcursionProduct> {
        product.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&product, None).await?;
        product.id = result.inserted_id.as_object_id();
        Ok(product)
    }

    /// Apply a partial $set; 404 when the product is absent
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
                "Product {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Product {} not found",
                id.to_hex()
            )));
        }
        Ok(())
    }
}
