//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, bookings, categories, contact, excursion_cards, excursion_products, excursions, filters,
    groups, guides, health, tags, uploads,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kupola API",
        version = "1.2.0",
        description = "Tourism excursion booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::session,
        // Excursions
        excursions::list_excursions,
        excursions::get_excursion,
        excursions::create_excursion,
        excursions::update_excursion,
        excursions::delete_excursion,
        excursions::excursion_products,
        excursions::excursion_times,
        excursions::upload_excursion_images,
        excursions::remove_excursion_image,
        excursion_cards::card_detail,
        // Products
        excursion_products::list_products,
        excursion_products::get_product,
        excursion_products::create_product,
        excursion_products::update_product,
        excursion_products::delete_product,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Tags
        tags::list_tags,
        tags::get_tag,
        tags::create_tag,
        tags::update_tag,
        tags::delete_tag,
        // Filters
        filters::get_filters,
        filters::list_filter_groups,
        filters::get_filter_group,
        filters::create_filter_group,
        filters::update_filter_group,
        filters::delete_filter_group,
        filters::list_filter_items,
        filters::get_filter_item,
        filters::create_filter_item,
        filters::update_filter_item,
        filters::delete_filter_item,
        // Groups and tourists
        groups::list_groups,
        groups::get_group,
        groups::create_group,
        groups::update_group,
        groups::delete_group,
        groups::list_tourists,
        groups::create_tourist,
        groups::delete_tourist,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Guides
        guides::list_guides,
        guides::get_guide,
        guides::create_guide,
        guides::update_guide,
        guides::delete_guide,
        // Uploads and contact
        uploads::upload_image,
        contact::create_contact,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::SessionInfo,
            // Excursion cards
            crate::models::excursion_card::ExcursionCard,
            crate::models::excursion_card::ExcursionCardDetail,
            crate::models::excursion_card::CreateExcursion,
            crate::models::excursion_card::CreateExcursionCard,
            crate::models::excursion_card::UpdateExcursionCard,
            crate::models::excursion_card::Review,
            crate::models::excursion_card::Attraction,
            crate::models::excursion_card::ProductLink,
            excursions::UploadedImages,
            excursions::RemoveImageRequest,
            // Products
            crate::models::excursion_product::ExcursionProduct,
            crate::models::excursion_product::CreateExcursionProduct,
            crate::models::excursion_product::UpdateExcursionProduct,
            crate::models::excursion_product::ProductService,
            crate::models::excursion_product::DateRange,
            crate::models::excursion_product::GeoPoint,
            crate::models::excursion_product::MeetingPoint,
            crate::models::excursion_product::Ticket,
            crate::models::excursion_product::PaymentKind,
            crate::models::excursion_product::PaymentOption,
            crate::models::excursion_product::AdditionalService,
            crate::models::excursion_product::GroupTemplate,
            crate::models::excursion_product::CardLink,
            // Commercial
            crate::models::commercial::CommercialExcursion,
            crate::models::commercial::CreateCommercial,
            crate::models::commercial::ScheduleEntry,
            crate::models::commercial::DurationSpec,
            crate::models::commercial::PriceEntry,
            crate::models::commercial::PromoCode,
            // Taxonomy
            crate::models::taxonomy::Category,
            crate::models::taxonomy::CreateCategory,
            crate::models::taxonomy::UpdateCategory,
            crate::models::taxonomy::Tag,
            crate::models::taxonomy::CreateTag,
            crate::models::taxonomy::UpdateTag,
            crate::models::taxonomy::FilterGroup,
            crate::models::taxonomy::CreateFilterGroup,
            crate::models::taxonomy::UpdateFilterGroup,
            crate::models::taxonomy::FilterItem,
            crate::models::taxonomy::CreateFilterItem,
            crate::models::taxonomy::UpdateFilterItem,
            crate::models::taxonomy::FilterBlock,
            crate::models::taxonomy::FilterOption,
            // Groups and tourists
            crate::models::group::Group,
            crate::models::group::GroupStatus,
            crate::models::group::CreateGroup,
            crate::models::group::UpdateGroup,
            crate::models::tourist::Tourist,
            crate::models::tourist::TouristTicket,
            crate::models::tourist::CreateTourist,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::BookingTicket,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            crate::models::booking::ContactRequest,
            // Guides
            crate::models::reference::ReferenceData,
            crate::models::reference::ReferenceKind,
            crate::models::reference::CreateReference,
            crate::models::reference::UpdateReference,
            // Misc
            uploads::UploadResponse,
            health::HealthResponse,
            super::SuccessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin session endpoints"),
        (name = "excursions", description = "Excursion card management"),
        (name = "products", description = "Commercial product management"),
        (name = "categories", description = "Category management"),
        (name = "tags", description = "Tag management"),
        (name = "filters", description = "Catalog filter management"),
        (name = "groups", description = "Departure groups and tourists"),
        (name = "bookings", description = "Booking intake and processing"),
        (name = "guides", description = "Guide reference data"),
        (name = "uploads", description = "Image uploads"),
        (name = "contact", description = "Contact form")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
