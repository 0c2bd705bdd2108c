use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::ListPackagesUseCase;

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_packages: Arc<dyn ListPackagesUseCase + Send + Sync>,
}
