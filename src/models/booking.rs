//! Booking model: a customer-submitted ticket request, independent of
//! capacity confirmation.

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    New,
    Processed,
    Archived,
    Deleted,
}

/// Itemized ticket line on a booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingTicket {
    #[serde(rename = "type")]
    pub ticket_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub count: i32,
}

/// Booking stored in MongoDB. Carries either itemized `tickets` or the
/// legacy single `ticketType`/`ticketCount` pair, whichever the form sent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub full_name: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<BookingTicket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_count: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub excursion: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default)]
    pub status: BookingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<BsonDateTime>,
}

/// Public booking form payload. Persisted as-is with status `new`;
/// no capacity check against the referenced excursion.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(length(min = 1, message = "fullName is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub tickets: Option<Vec<BookingTicket>>,
    pub ticket_type: Option<String>,
    pub ticket_count: Option<i32>,
    pub payment_type: Option<String>,
    pub excursion: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub comment: Option<String>,
}

/// Partial update; the admin UI mostly flips `status`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<BookingTicket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

/// Public contact form payload, persisted as a `new` booking with the
/// message in `comment` (mail delivery happens outside this service)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_status_defaults_to_new() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "fullName": "Иван Иванов",
            "phone": "+7 900 000-00-00"
        }))
        .unwrap();
        assert_eq!(booking.status, BookingStatus::New);
    }

    #[test]
    fn booking_status_roundtrips_lowercase() {
        assert_eq!(
            serde_json::to_value(BookingStatus::Processed).unwrap(),
            serde_json::json!("processed")
        );
    }

    #[test]
    fn update_serializes_only_provided_fields() {
        let update = UpdateBooking {
            full_name: None,
            phone: None,
            tickets: None,
            ticket_type: None,
            ticket_count: None,
            payment_type: None,
            date: None,
            time: None,
            comment: None,
            status: Some(BookingStatus::Archived),
        };
        let doc = mongodb::bson::to_document(&update).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.contains_key("status"));
    }
}
