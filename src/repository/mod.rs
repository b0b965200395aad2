//! Repository layer for MongoDB operations.
//!
//! One sub-repository per collection, all sharing the single `Database`
//! handle created at startup. Slug uniqueness is enforced by unique
//! indexes created in [`Repository::ensure_indexes`].

pub mod bookings;
pub mod commercial;
pub mod excursion_cards;
pub mod excursion_products;
pub mod groups;
pub mod reference;
pub mod taxonomy;
pub mod tourists;

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::IndexOptions, Database, IndexModel};

use crate::error::{AppError, AppResult};

/// Main repository struct holding the database handle and sub-repositories
#[derive(Clone)]
pub struct Repository {
    pub db: Database,
    pub cards: excursion_cards::CardsRepository,
    pub products: excursion_products::ProductsRepository,
    pub commercial: commercial::CommercialRepository,
    pub categories: taxonomy::CategoriesRepository,
    pub tags: taxonomy::TagsRepository,
    pub filter_groups: taxonomy::FilterGroupsRepository,
    pub filter_items: taxonomy::FilterItemsRepository,
    pub groups: groups::GroupsRepository,
    pub tourists: tourists::TouristsRepository,
    pub bookings: bookings::BookingsRepository,
    pub reference: reference::ReferenceRepository,
}

impl Repository {
    /// Create a new repository over the given database handle
    pub fn new(db: Database) -> Self {
        Self {
            cards: excursion_cards::CardsRepository::new(&db),
            products: excursion_products::ProductsRepository::new(&db),
            commercial: commercial::CommercialRepository::new(&db),
            categories: taxonomy::CategoriesRepository::new(&db),
            tags: taxonomy::TagsRepository::new(&db),
            filter_groups: taxonomy::FilterGroupsRepository::new(&db),
            filter_items: taxonomy::FilterItemsRepository::new(&db),
            groups: groups::GroupsRepository::new(&db),
            tourists: tourists::TouristsRepository::new(&db),
            bookings: bookings::BookingsRepository::new(&db),
            reference: reference::ReferenceRepository::new(&db),
            db,
        }
    }

    /// Create the unique slug indexes. Called once at startup, after the
    /// connection is established and before the server accepts requests.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let unique = IndexOptions::builder().unique(true).build();

        for (collection, field) in [
            ("categories", "slug"),
            ("tags", "slug"),
            ("filter_groups", "slug"),
            ("filter_items", "slug"),
            ("excursion_cards", "commercialSlug"),
            ("commercial_excursions", "slug"),
        ] {
            let model = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(unique.clone())
                .build();
            self.db
                .collection::<mongodb::bson::Document>(collection)
                .create_index(model, None)
                .await?;
        }

        Ok(())
    }

    /// Ping the database; used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

/// Parse a hex identifier from a path or payload. Malformed ids answer
/// 400 before any store access.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::Validation(format!("Invalid identifier: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_id_rejects_malformed_input() {
        assert!(parse_object_id("not-an-id").is_err());
        assert!(parse_object_id("").is_err());
        assert!(parse_object_id("66a0c0ffee").is_err());
    }

    #[test]
    fn parse_object_id_accepts_hex_ids() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[tokio::test]
    async fn repository_keeps_the_database_handle() {
        // Client construction is lazy; no server is contacted here
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let repository = Repository::new(client.database("kupola-test"));
        assert_eq!(repository.db.name(), "kupola-test");
    }
}
