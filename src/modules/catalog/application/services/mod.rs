pub mod list_packages_service;
pub mod seed_catalog_service;

pub use list_packages_service::ListPackagesService;
pub use seed_catalog_service::SeedCatalogService;
