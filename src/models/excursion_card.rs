//! Excursion card model: the public-facing descriptive record for a tour.

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::commercial::CreateCommercial;
use super::default_true;

/// Customer review embedded in a card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

/// Attraction highlighted on the card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Denormalized reference to the linked commercial product, cached on the
/// card so catalog reads avoid a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductLink {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub title: String,
}

/// Excursion card stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExcursionCard {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub what_you_will_see: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,

    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub tags: Vec<ObjectId>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub categories: Vec<ObjectId>,

    #[serde(default = "default_true")]
    pub is_published: bool,

    /// Unique commerce slug, generated with a random suffix on create
    pub commercial_slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<BsonDateTime>,
}

/// Card payload of the composite excursion create request.
/// Reference ids arrive as hex strings and are parsed by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExcursionCard {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub what_you_will_see: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub is_published: Option<bool>,
    /// Hex id of an existing ExcursionProduct to link and denormalize
    pub product: Option<String>,
}

/// Composite create request: the card plus an optional commercial block
/// persisted as a separate linked document.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExcursion {
    #[validate(nested)]
    pub card: CreateExcursionCard,
    pub commercial: Option<CreateCommercial>,
}

/// Populated card read for the booking UI: the card plus one level of
/// related documents.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExcursionCardDetail {
    pub card: ExcursionCard,
    pub product: Option<super::excursion_product::ExcursionProduct>,
    pub categories: Vec<super::taxonomy::Category>,
    pub tags: Vec<super::taxonomy::Tag>,
}

/// Partial update; only provided fields are written ($set semantics)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExcursionCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_you_will_see: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attractions: Option<Vec<Attraction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}
