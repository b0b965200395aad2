//! Business logic services

pub mod catalog;
pub mod sales;
pub mod storage;
pub mod taxonomy;
pub mod uploads;

use std::sync::Arc;

use crate::{config::StorageConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub taxonomy: taxonomy::TaxonomyService,
    pub sales: sales::SalesService,
    pub uploads: uploads::UploadService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository and object store
    pub fn new(
        repository: Repository,
        object_storage: Arc<dyn storage::ObjectStorage>,
        storage_config: &StorageConfig,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            taxonomy: taxonomy::TaxonomyService::new(repository.clone()),
            sales: sales::SalesService::new(repository.clone()),
            uploads: uploads::UploadService::new(object_storage, storage_config.max_image_bytes),
            repository,
        }
    }
}
