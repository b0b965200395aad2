//! Taxonomy collections access: categories, tags, filter groups/items.
//!
//! All four are slug-unique; inserts map duplicate-key violations to the
//! conflict error carrying the entity name.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{options::FindOptions, Collection, Database};

use crate::{
    error::{is_duplicate_key, AppError, AppResult},
    models::taxonomy::{Category, FilterGroup, FilterItem, Tag},
};

fn not_found(what: &str, id: ObjectId) -> AppError {
    AppError::NotFound(format!("{} {} not found", what, id.to_hex()))
}

#[derive(Clone)]
pub struct CategoriesRepository {
    collection: Collection<Category>,
}

impl CategoriesRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("categories"),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let options = FindOptions::builder().sort(doc! { "tagSort": 1 }).build();
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Category> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| not_found("Category", id))
    }

    /// Fetch the categories referenced by a card; dangling ids are skipped
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Category>> {
        let options = FindOptions::builder().sort(doc! { "tagSort": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } }, options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert(&self, mut category: Category) -> AppResult<Category> {
        category.created_at = Some(BsonDateTime::now());
        let result = self
            .collection
            .insert_one(&category, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Category '{}'", category.slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        category.id = result.inserted_id.as_object_id();
        Ok(category)
    }

    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let slug = set.get_str("slug").unwrap_or_default().to_string();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Category '{}'", slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        if result.matched_count == 0 {
            return Err(not_found("Category", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(not_found("Category", id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct TagsRepository {
    collection: Collection<Tag>,
}

impl TagsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("tags"),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        let options = FindOptions::builder().sort(doc! { "sort": 1 }).build();
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Active tags only, for the public filter sidebar
    pub async fn list_active(&self) -> AppResult<Vec<Tag>> {
        let options = FindOptions::builder().sort(doc! { "sort": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "isActive": true }, options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Tag> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| not_found("Tag", id))
    }

    /// Fetch the tags referenced by a card; dangling ids are skipped
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Tag>> {
        let options = FindOptions::builder().sort(doc! { "sort": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } }, options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert(&self, mut tag: Tag) -> AppResult<Tag> {
        tag.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&tag, None).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::AlreadyExists(format!("Tag '{}'", tag.slug))
            } else {
                AppError::Database(e)
            }
        })?;
        tag.id = result.inserted_id.as_object_id();
        Ok(tag)
    }

    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let slug = set.get_str("slug").unwrap_or_default().to_string();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Tag '{}'", slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        if result.matched_count == 0 {
            return Err(not_found("Tag", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(not_found("Tag", id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct FilterGroupsRepository {
    collection: Collection<FilterGroup>,
}

impl FilterGroupsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("filter_groups"),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<FilterGroup>> {
        let options = FindOptions::builder().sort(doc! { "sort": 1 }).build();
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<FilterGroup> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| not_found("Filter group", id))
    }

    pub async fn insert(&self, mut group: FilterGroup) -> AppResult<FilterGroup> {
        group.created_at = Some(BsonDateTime::now());
        let result = self
            .collection
            .insert_one(&group, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Filter group '{}'", group.slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        group.id = result.inserted_id.as_object_id();
        Ok(group)
    }

    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let slug = set.get_str("slug").unwrap_or_default().to_string();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Filter group '{}'", slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        if result.matched_count == 0 {
            return Err(not_found("Filter group", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(not_found("Filter group", id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct FilterItemsRepository {
    collection: Collection<FilterItem>,
}

impl FilterItemsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("filter_items"),
        }
    }

    /// List items, optionally scoped to one filter group
    pub async fn list(&self, group: Option<ObjectId>) -> AppResult<Vec<FilterItem>> {
        let filter = match group {
            Some(id) => doc! { "group": id },
            None => doc! {},
        };
        let options = FindOptions::builder().sort(doc! { "sort": 1 }).build();
        let cursor = self.collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<FilterItem> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(|| not_found("Filter item", id))
    }

    pub async fn insert(&self, mut item: FilterItem) -> AppResult<FilterItem> {
        item.created_at = Some(BsonDateTime::now());
        let result = self.collection.insert_one(&item, None).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::AlreadyExists(format!("Filter item '{}'", item.slug))
            } else {
                AppError::Database(e)
            }
        })?;
        item.id = result.inserted_id.as_object_id();
        Ok(item)
    }

    pub async fn update(&self, id: ObjectId, set: Document) -> AppResult<()> {
        if set.is_empty() {
            self.get(id).await?;
            return Ok(());
        }
        let slug = set.get_str("slug").unwrap_or_default().to_string();
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::AlreadyExists(format!("Filter item '{}'", slug))
                } else {
                    AppError::Database(e)
                }
            })?;
        if result.matched_count == 0 {
            return Err(not_found("Filter item", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(not_found("Filter item", id));
        }
        Ok(())
    }
}
