//! Catalog service: excursion cards, commercial products, and the reads
//! that stitch them together for the booking UI.

use mongodb::bson::{self, oid::ObjectId};

use crate::{
    error::AppResult,
    models::{
        commercial::{CommercialExcursion, CreateCommercial},
        excursion_card::{
            CreateExcursion, ExcursionCard, ExcursionCardDetail, ProductLink, UpdateExcursionCard,
        },
        excursion_product::{
            CardLink, CreateExcursionProduct, ExcursionProduct, UpdateExcursionProduct,
        },
    },
    repository::{parse_object_id, Repository},
    slug::unique_slug,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

fn parse_ids(ids: &[String]) -> AppResult<Vec<ObjectId>> {
    ids.iter().map(|s| parse_object_id(s)).collect()
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // Excursions (cards + composite create)
    // =========================================================================

    pub async fn list_excursions(&self) -> AppResult<Vec<ExcursionCard>> {
        self.repository.cards.list().await
    }

    pub async fn get_excursion(&self, id: &str) -> AppResult<ExcursionCard> {
        let id = parse_object_id(id)?;
        self.repository.cards.get(id).await
    }

    /// Create an excursion card, and the linked commercial document when a
    /// commercial block accompanies the request.
    ///
    /// The commerce slug combines the normalized title with a short random
    /// suffix, so creation never loops on uniqueness. There is no rollback:
    /// if the commercial insert fails the card stays persisted.
    pub async fn create_excursion(&self, data: CreateExcursion) -> AppResult<ExcursionCard> {
        let commercial_slug = unique_slug(&data.card.title);

        let product = match &data.card.product {
            Some(product_id) => {
                let product = self
                    .repository
                    .products
                    .get(parse_object_id(product_id)?)
                    .await?;
                product.id.map(|id| ProductLink {
                    id,
                    title: product.title.clone(),
                })
            }
            None => None,
        };

        let card = ExcursionCard {
            id: None,
            title: data.card.title,
            seo_title: data.card.seo_title,
            seo_description: data.card.seo_description,
            description: data.card.description,
            images: data.card.images,
            what_you_will_see: data.card.what_you_will_see,
            reviews: data.card.reviews,
            attractions: data.card.attractions,
            tags: parse_ids(&data.card.tags)?,
            categories: parse_ids(&data.card.categories)?,
            is_published: data.card.is_published.unwrap_or(true),
            commercial_slug: commercial_slug.clone(),
            product,
            created_at: None,
        };

        let card = self.repository.cards.insert(card).await?;

        if let Some(commercial) = data.commercial {
            self.create_commercial(commercial, commercial_slug, card.id)
                .await?;
        }

        Ok(card)
    }

    async fn create_commercial(
        &self,
        data: CreateCommercial,
        slug: String,
        excursion: Option<ObjectId>,
    ) -> AppResult<CommercialExcursion> {
        let commercial = CommercialExcursion {
            id: None,
            slug,
            excursion,
            schedule: data.schedule,
            meeting_point: data.meeting_point,
            duration: data.duration,
            prices: data.prices,
            additional_services: data.additional_services,
            promo_codes: data.promo_codes,
            created_at: None,
        };
        self.repository.commercial.insert(commercial).await
    }

    pub async fn update_excursion(&self, id: &str, data: UpdateExcursionCard) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let mut set = bson::to_document(&data)?;

        // Reference fields arrive as hex strings; store real ObjectIds
        if let Some(tags) = &data.tags {
            set.insert("tags", parse_ids(tags)?);
        }
        if let Some(categories) = &data.categories {
            set.insert("categories", parse_ids(categories)?);
        }
        if let Some(product_id) = &data.product {
            let product = self
                .repository
                .products
                .get(parse_object_id(product_id)?)
                .await?;
            if let Some(pid) = product.id {
                let link = ProductLink {
                    id: pid,
                    title: product.title,
                };
                set.insert("product", bson::to_bson(&link)?);
            }
        }

        self.repository.cards.update(id, set).await
    }

    pub async fn delete_excursion(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.repository.cards.delete(id).await
    }

    // =========================================================================
    // Populated reads
    // =========================================================================

    /// Card plus one level of population: linked product, categories, tags
    pub async fn card_detail(&self, id: &str) -> AppResult<ExcursionCardDetail> {
        let id = parse_object_id(id)?;
        let card = self.repository.cards.get(id).await?;

        let product = match &card.product {
            Some(link) => self.repository.products.get(link.id).await.ok(),
            None => None,
        };
        let categories = self
            .repository
            .categories
            .find_by_ids(&card.categories)
            .await?;
        let tags = self.repository.tags.find_by_ids(&card.tags).await?;

        Ok(ExcursionCardDetail {
            card,
            product,
            categories,
            tags,
        })
    }

    /// Products linked to an excursion card
    pub async fn excursion_products(&self, id: &str) -> AppResult<Vec<ExcursionProduct>> {
        let id = parse_object_id(id)?;
        self.repository.cards.get(id).await?;
        self.repository.products.list(Some(id)).await
    }

    /// Start times for an excursion: the linked product's start times, or
    /// the distinct times of the legacy commercial schedule as a fallback.
    pub async fn excursion_times(&self, id: &str) -> AppResult<Vec<String>> {
        let id = parse_object_id(id)?;
        let card = self.repository.cards.get(id).await?;

        if let Some(link) = &card.product {
            if let Ok(product) = self.repository.products.get(link.id).await {
                return Ok(product.start_times);
            }
        }

        let commercial = self.repository.commercial.find_by_excursion(id).await?;
        let mut times = Vec::new();
        if let Some(commercial) = commercial {
            for entry in commercial.schedule {
                if !times.contains(&entry.time) {
                    times.push(entry.time);
                }
            }
        }
        Ok(times)
    }

    // =========================================================================
    // Gallery images
    // =========================================================================

    pub async fn add_excursion_images(&self, id: &str, urls: Vec<String>) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.repository.cards.push_images(id, &urls).await
    }

    pub async fn remove_excursion_image(&self, id: &str, url: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.repository.cards.pull_image(id, url).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn list_products(
        &self,
        excursion: Option<String>,
    ) -> AppResult<Vec<ExcursionProduct>> {
        let card_id = match excursion {
            Some(id) => Some(parse_object_id(&id)?),
            None => None,
        };
        self.repository.products.list(card_id).await
    }

    pub async fn get_product(&self, id: &str) -> AppResult<ExcursionProduct> {
        let id = parse_object_id(id)?;
        self.repository.products.get(id).await
    }

    pub async fn create_product(
        &self,
        data: CreateExcursionProduct,
    ) -> AppResult<ExcursionProduct> {
        let excursion_card = match &data.excursion_card {
            Some(card_id) => {
                let card = self
                    .repository
                    .cards
                    .get(parse_object_id(card_id)?)
                    .await?;
                card.id.map(|id| CardLink {
                    id,
                    title: card.title.clone(),
                })
            }
            None => None,
        };

        let product = ExcursionProduct {
            id: None,
            title: data.title,
            excursion_card,
            services: data.services,
            date_ranges: data.date_ranges,
            start_times: data.start_times,
            meeting_points: data.meeting_points,
            tickets: data.tickets,
            payment_options: data.payment_options,
            additional_services: data.additional_services,
            group_templates: data.group_templates,
            is_published: data.is_published.unwrap_or(true),
            created_at: None,
        };

        self.repository.products.insert(product).await
    }

    pub async fn update_product(&self, id: &str, data: UpdateExcursionProduct) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let set = bson::to_document(&data)?;
        self.repository.products.update(id, set).await
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.repository.products.delete(id).await
    }
}
