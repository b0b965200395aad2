//! Sales service: groups, tourists, booking intake, and the contact form.

use mongodb::bson::{self, oid::ObjectId};

use crate::{
    error::AppResult,
    models::{
        booking::{Booking, BookingStatus, ContactRequest, CreateBooking, UpdateBooking},
        group::{CreateGroup, Group, UpdateGroup},
        reference::{CreateReference, ReferenceData, ReferenceKind, UpdateReference},
        tourist::{CreateTourist, Tourist},
    },
    repository::{parse_object_id, Repository},
};

#[derive(Clone)]
pub struct SalesService {
    repository: Repository,
}

fn parse_optional_id(id: &Option<String>) -> AppResult<Option<ObjectId>> {
    match id {
        Some(s) => Ok(Some(parse_object_id(s)?)),
        None => Ok(None),
    }
}

impl SalesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // Groups
    // =========================================================================

    pub async fn list_groups(&self, excursion: Option<String>) -> AppResult<Vec<Group>> {
        let excursion = parse_optional_id(&excursion)?;
        self.repository.groups.list(excursion).await
    }

    pub async fn get_group(&self, id: &str) -> AppResult<Group> {
        self.repository.groups.get(parse_object_id(id)?).await
    }

    pub async fn create_group(&self, data: CreateGroup) -> AppResult<Group> {
        let group = Group {
            id: None,
            date: data.date,
            time: data.time,
            place: data.place,
            total_seats: data.total_seats,
            booked_seats: data.booked_seats.unwrap_or(0),
            transport: parse_optional_id(&data.transport)?,
            guide: parse_optional_id(&data.guide)?,
            ticket: parse_optional_id(&data.ticket)?,
            food: data.food.unwrap_or(false),
            status: data.status.unwrap_or_default(),
            is_stopped: data.is_stopped.unwrap_or(false),
            excursion: parse_optional_id(&data.excursion)?,
            created_at: None,
        };
        self.repository.groups.insert(group).await
    }

    pub async fn update_group(&self, id: &str, data: UpdateGroup) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let mut set = bson::to_document(&data)?;

        // Reference fields arrive as hex strings; store real ObjectIds
        if let Some(transport) = &data.transport {
            set.insert("transport", parse_object_id(transport)?);
        }
        if let Some(guide) = &data.guide {
            set.insert("guide", parse_object_id(guide)?);
        }
        if let Some(ticket) = &data.ticket {
            set.insert("ticket", parse_object_id(ticket)?);
        }
        if let Some(excursion) = &data.excursion {
            set.insert("excursion", parse_object_id(excursion)?);
        }

        self.repository.groups.update(id, set).await
    }

    /// Delete a group and cascade its tourists. A nonexistent group
    /// answers 404 before any tourist is touched.
    pub async fn delete_group(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.repository.groups.get(id).await?;

        let removed = self.repository.tourists.delete_by_group(id).await?;
        if removed > 0 {
            tracing::info!("Cascaded {} tourists of group {}", removed, id.to_hex());
        }
        self.repository.groups.delete(id).await
    }

    // =========================================================================
    // Tourists
    // =========================================================================

    pub async fn list_tourists(&self, group: &str) -> AppResult<Vec<Tourist>> {
        let group = parse_object_id(group)?;
        self.repository.groups.get(group).await?;
        self.repository.tourists.list_by_group(group).await
    }

    /// Add a tourist to a group, reserving one seat with a conditional
    /// update so concurrent additions cannot overshoot the capacity.
    pub async fn create_tourist(&self, group: &str, data: CreateTourist) -> AppResult<Tourist> {
        let group = parse_object_id(group)?;
        self.repository.groups.reserve_seats(group, 1).await?;

        let tourist = Tourist {
            id: None,
            name: data.name,
            phone: data.phone,
            email: data.email,
            tickets: data.tickets,
            is_child: data.is_child.unwrap_or(false),
            group,
            notes: data.notes,
            created_at: None,
        };

        match self.repository.tourists.insert(tourist).await {
            Ok(tourist) => Ok(tourist),
            Err(e) => {
                // Insert failed after the seat was taken; hand it back
                self.repository.groups.release_seats(group, 1).await?;
                Err(e)
            }
        }
    }

    pub async fn delete_tourist(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let tourist = self.repository.tourists.get(id).await?;
        self.repository.tourists.delete(id).await?;
        self.repository.groups.release_seats(tourist.group, 1).await
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    pub async fn list_bookings(&self, status: Option<BookingStatus>) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list(status).await
    }

    pub async fn get_booking(&self, id: &str) -> AppResult<Booking> {
        self.repository.bookings.get(parse_object_id(id)?).await
    }

    /// Public booking intake: persisted as-is with status `new`. No
    /// deduplication, no capacity check against the referenced excursion.
    pub async fn create_booking(&self, data: CreateBooking) -> AppResult<Booking> {
        let booking = Booking {
            id: None,
            full_name: data.full_name,
            phone: data.phone,
            tickets: data.tickets,
            ticket_type: data.ticket_type,
            ticket_count: data.ticket_count,
            payment_type: data.payment_type,
            excursion: parse_optional_id(&data.excursion)?,
            date: data.date,
            time: data.time,
            comment: data.comment,
            status: BookingStatus::New,
            created_at: None,
        };
        self.repository.bookings.insert(booking).await
    }

    pub async fn update_booking(&self, id: &str, data: UpdateBooking) -> AppResult<()> {
        let set = bson::to_document(&data)?;
        self.repository
            .bookings
            .update(parse_object_id(id)?, set)
            .await
    }

    pub async fn delete_booking(&self, id: &str) -> AppResult<()> {
        self.repository.bookings.delete(parse_object_id(id)?).await
    }

    // =========================================================================
    // Guides (reference data)
    // =========================================================================

    pub async fn list_guides(&self) -> AppResult<Vec<ReferenceData>> {
        self.repository
            .reference
            .list_by_kind(ReferenceKind::Guide)
            .await
    }

    pub async fn get_guide(&self, id: &str) -> AppResult<ReferenceData> {
        self.repository
            .reference
            .get(ReferenceKind::Guide, parse_object_id(id)?)
            .await
    }

    pub async fn create_guide(&self, data: CreateReference) -> AppResult<ReferenceData> {
        let entry = ReferenceData {
            id: None,
            kind: ReferenceKind::Guide,
            name: data.name,
            properties: data.properties.unwrap_or_default(),
            created_at: None,
        };
        self.repository.reference.insert(entry).await
    }

    pub async fn update_guide(&self, id: &str, data: UpdateReference) -> AppResult<()> {
        let set = bson::to_document(&data)?;
        self.repository
            .reference
            .update(ReferenceKind::Guide, parse_object_id(id)?, set)
            .await
    }

    pub async fn delete_guide(&self, id: &str) -> AppResult<()> {
        self.repository
            .reference
            .delete(ReferenceKind::Guide, parse_object_id(id)?)
            .await
    }

    /// Contact form: stored as a `new` booking carrying the message, so
    /// the back office sees it in the same inbox. Mail delivery happens
    /// outside this service.
    pub async fn create_contact(&self, data: ContactRequest) -> AppResult<Booking> {
        let booking = Booking {
            id: None,
            full_name: data.name,
            phone: data.phone,
            tickets: None,
            ticket_type: None,
            ticket_count: None,
            payment_type: None,
            excursion: None,
            date: None,
            time: None,
            comment: data.message,
            status: BookingStatus::New,
            created_at: None,
        };
        self.repository.bookings.insert(booking).await
    }
}
