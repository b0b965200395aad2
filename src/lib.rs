//! Kupola Tourism Excursion Booking Platform
//!
//! A Rust implementation of the Kupola excursion booking server,
//! providing a REST JSON API for the public catalog, booking intake,
//! and the administrative back office.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod slug;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
