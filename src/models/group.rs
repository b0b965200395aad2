//! Group model: a scheduled instance of a tour with a seat capacity.

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Group stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    pub total_seats: i32,
    #[serde(default)]
    pub booked_seats: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub transport: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub guide: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub ticket: Option<ObjectId>,

    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub status: GroupStatus,
    #[serde(default)]
    pub is_stopped: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub excursion: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<BsonDateTime>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
    pub place: Option<String>,
    #[validate(range(min = 1, message = "totalSeats must be positive"))]
    pub total_seats: i32,
    pub booked_seats: Option<i32>,
    pub transport: Option<String>,
    pub guide: Option<String>,
    pub ticket: Option<String>,
    pub food: Option<bool>,
    pub status: Option<GroupStatus>,
    pub is_stopped: Option<bool>,
    pub excursion: Option<String>,
}

/// Partial update; only provided fields are written ($set semantics).
/// Seat counters stay directly editable for admin corrections.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_seats: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GroupStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stopped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excursion: Option<String>,
}
