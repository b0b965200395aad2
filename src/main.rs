//! Kupola Server - Tourism Excursion Booking System
//!
//! REST API backend for excursion catalog management and booking intake.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kupola_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{storage::HttpObjectStorage, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("kupola_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Kupola Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to MongoDB
    let client = mongodb::Client::with_uri_str(&config.database.url)
        .await
        .expect("Failed to connect to MongoDB");
    let database = client.database(&config.database.name);

    tracing::info!("Connected to database '{}'", config.database.name);

    // Create repository and ensure the unique slug indexes exist
    let repository = Repository::new(database);
    repository
        .ensure_indexes()
        .await
        .expect("Failed to create database indexes");

    tracing::info!("Database indexes ensured");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let object_storage = Arc::new(HttpObjectStorage::new(config.storage.clone()));
    let services = Services::new(repository, object_storage, &config.storage);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // The admin UI sends the session cookie cross-origin, so the origin is
    // mirrored instead of wildcarded and credentials are allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    // The default axum body ceiling sits below the configured image
    // limit; raise it so oversize rejection happens in the upload
    // service, with headroom for the multipart framing.
    let body_limit =
        DefaultBodyLimit::max(state.config.storage.max_image_bytes as usize + 1024 * 1024);

    let api_routes = Router::new()
        // Excursions
        .route("/excursions", get(api::excursions::list_excursions))
        .route("/excursions", post(api::excursions::create_excursion))
        .route("/excursions/:id", get(api::excursions::get_excursion))
        .route("/excursions/:id", put(api::excursions::update_excursion))
        .route("/excursions/:id", delete(api::excursions::delete_excursion))
        .route(
            "/excursions/:id/products",
            get(api::excursions::excursion_products),
        )
        .route("/excursions/:id/times", get(api::excursions::excursion_times))
        .route(
            "/excursions/:id/images",
            post(api::excursions::upload_excursion_images),
        )
        .route(
            "/excursions/:id/images",
            delete(api::excursions::remove_excursion_image),
        )
        .route("/excursion-cards/:id", get(api::excursion_cards::card_detail))
        // Products
        .route(
            "/excursion-products",
            get(api::excursion_products::list_products),
        )
        .route(
            "/excursion-products",
            post(api::excursion_products::create_product),
        )
        .route(
            "/excursion-products/:id",
            get(api::excursion_products::get_product),
        )
        .route(
            "/excursion-products/:id",
            put(api::excursion_products::update_product),
        )
        .route(
            "/excursion-products/:id",
            delete(api::excursion_products::delete_product),
        )
        // Categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories", post(api::categories::create_category))
        .route("/categories/:id", get(api::categories::get_category))
        .route("/categories/:id", put(api::categories::update_category))
        .route("/categories/:id", delete(api::categories::delete_category))
        // Tags
        .route("/tags", get(api::tags::list_tags))
        .route("/tags", post(api::tags::create_tag))
        .route("/tags/:id", get(api::tags::get_tag))
        .route("/tags/:id", put(api::tags::update_tag))
        .route("/tags/:id", delete(api::tags::delete_tag))
        // Filters
        .route("/filters", get(api::filters::get_filters))
        .route("/filter-groups", get(api::filters::list_filter_groups))
        .route("/filter-groups", post(api::filters::create_filter_group))
        .route("/filter-groups/:id", get(api::filters::get_filter_group))
        .route("/filter-groups/:id", put(api::filters::update_filter_group))
        .route(
            "/filter-groups/:id",
            delete(api::filters::delete_filter_group),
        )
        .route("/filter-items", get(api::filters::list_filter_items))
        .route("/filter-items", post(api::filters::create_filter_item))
        .route("/filter-items/:id", get(api::filters::get_filter_item))
        .route("/filter-items/:id", put(api::filters::update_filter_item))
        .route(
            "/filter-items/:id",
            delete(api::filters::delete_filter_item),
        )
        // Groups and tourists
        .route("/groups", get(api::groups::list_groups))
        .route("/groups", post(api::groups::create_group))
        .route("/groups/:id", get(api::groups::get_group))
        .route("/groups/:id", put(api::groups::update_group))
        .route("/groups/:id", delete(api::groups::delete_group))
        .route("/groups/:id/tourists", get(api::groups::list_tourists))
        .route("/groups/:id/tourists", post(api::groups::create_tourist))
        .route("/tourists/:id", delete(api::groups::delete_tourist))
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id", put(api::bookings::update_booking))
        .route("/bookings/:id", delete(api::bookings::delete_booking))
        // Guides
        .route("/guides", get(api::guides::list_guides))
        .route("/guides", post(api::guides::create_guide))
        .route("/guides/:id", get(api::guides::get_guide))
        .route("/guides/:id", put(api::guides::update_guide))
        .route("/guides/:id", delete(api::guides::delete_guide))
        // Uploads and contact
        .route("/upload", post(api::uploads::upload_image))
        .route("/contact", post(api::contact::create_contact))
        .layer(body_limit);

    let admin_routes = Router::new()
        .route("/login", post(api::auth::login))
        .route("/logout", post(api::auth::logout))
        .route("/session", get(api::auth::session));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::admin_boundary,
        ))
        .with_state(state)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use kupola_server::config::{
        AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, StorageConfig,
    };
    use tower::ServiceExt;

    async fn test_state() -> AppState {
        // Client construction is lazy; nothing here contacts a server
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
            storage: StorageConfig::default(),
        };
        let repository = Repository::new(client.database("kupola-test"));
        let object_storage = Arc::new(HttpObjectStorage::new(config.storage.clone()));
        let services = Services::new(repository, object_storage, &config.storage);
        AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }

    fn multipart_image(bytes: usize) -> Request<Body> {
        let boundary = "kupola-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"big.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                boundary
            )
            .as_bytes(),
        );
        body.extend(std::iter::repeat(0u8).take(bytes));
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_body_limit_covers_the_image_ceiling() {
        // A 3 MB image sits under the 5 MB ceiling and must reach the
        // upload service instead of being cut off by the extractor.
        let app = create_router(test_state().await);
        let response = app
            .oneshot(multipart_image(3 * 1024 * 1024))
            .await
            .unwrap();

        assert_ne!(response.status(), StatusCode::BAD_REQUEST);
        assert_ne!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn oversize_upload_is_rejected_by_validation() {
        // Past the ceiling the size check answers 400, not a transport
        // error from the body limit.
        let app = create_router(test_state().await);
        let response = app
            .oneshot(multipart_image(6 * 1024 * 1024 - 2048))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
