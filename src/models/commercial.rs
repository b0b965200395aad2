//! Legacy commercial excursion schema.
//!
//! Runs in parallel with the embedded commercial fields on
//! `ExcursionProduct`; written only through the composite excursion
//! create and read as the fallback for start times.

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::excursion_product::AdditionalService;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationSpec {
    #[serde(default)]
    pub hours: i32,
    #[serde(default)]
    pub minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    #[serde(rename = "type")]
    pub price_type: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub code: String,
    pub discount: f64,
}

/// Commercial excursion stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommercialExcursion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    /// Unique commerce slug, shared with the excursion card
    pub slug: String,
    /// Back-reference to the excursion card this block was created with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub excursion: Option<ObjectId>,

    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationSpec>,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<BsonDateTime>,
}

/// Commercial block of the composite excursion create request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommercial {
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    pub meeting_point: Option<String>,
    pub duration: Option<DurationSpec>,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
}
