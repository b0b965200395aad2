//! Data models for the Kupola server.
//!
//! Documents are stored one collection per entity, with camelCase field
//! names matching the wire shape the catalog and admin UIs consume.
//! Cross-entity references are `ObjectId`s plus, where reads need it, a
//! denormalized display field.

pub mod booking;
pub mod commercial;
pub mod excursion_card;
pub mod excursion_product;
pub mod group;
pub mod reference;
pub mod taxonomy;
pub mod tourist;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use commercial::CommercialExcursion;
pub use excursion_card::ExcursionCard;
pub use excursion_product::ExcursionProduct;
pub use group::{Group, GroupStatus};
pub use reference::{ReferenceData, ReferenceKind};
pub use taxonomy::{Category, FilterGroup, FilterItem, Tag};
pub use tourist::Tourist;

pub(crate) fn default_true() -> bool {
    true
}
