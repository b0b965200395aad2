//! Excursion product model: the sellable configuration of a tour.

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::default_true;

/// Service offered as part of the product price matrix
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductService {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<i32>,
    pub price: f64,
}

/// Availability window with explicitly excluded dates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub excluded_dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPoint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
}

/// Ticket kind sold for this product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_default: bool,
}

/// How the booking can be paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Full,
    Prepayment,
    Onsite,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    #[serde(rename = "type")]
    pub payment_type: PaymentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepayment_percent: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalService {
    pub name: String,
    pub price: f64,
}

/// Private-group template (min/max size at a fixed price)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupTemplate {
    pub min_size: i32,
    pub max_size: i32,
    pub price: f64,
}

/// Denormalized back-reference to the excursion card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardLink {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub title: String,
}

/// Excursion product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExcursionProduct {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excursion_card: Option<CardLink>,

    #[serde(default)]
    pub services: Vec<ProductService>,
    #[serde(default)]
    pub date_ranges: Vec<DateRange>,
    #[serde(default)]
    pub start_times: Vec<String>,
    #[serde(default)]
    pub meeting_points: Vec<MeetingPoint>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub payment_options: Vec<PaymentOption>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    #[serde(default)]
    pub group_templates: Vec<GroupTemplate>,

    #[serde(default = "default_true")]
    pub is_published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<BsonDateTime>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExcursionProduct {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Hex id of the excursion card this product belongs to
    pub excursion_card: Option<String>,
    #[serde(default)]
    pub services: Vec<ProductService>,
    #[serde(default)]
    pub date_ranges: Vec<DateRange>,
    #[serde(default)]
    pub start_times: Vec<String>,
    #[serde(default)]
    pub meeting_points: Vec<MeetingPoint>,
    #[validate(length(min = 1, message = "at least one ticket is required"))]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub payment_options: Vec<PaymentOption>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    #[serde(default)]
    pub group_templates: Vec<GroupTemplate>,
    pub is_published: Option<bool>,
}

/// Partial update; only provided fields are written ($set semantics)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExcursionProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ProductService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_ranges: Option<Vec<DateRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_times: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_points: Option<Vec<MeetingPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<Vec<PaymentOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_services: Option<Vec<AdditionalService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_templates: Option<Vec<GroupTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}
