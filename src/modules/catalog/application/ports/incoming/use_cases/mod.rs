pub mod list_packages;
pub mod seed_catalog;

pub use list_packages::{ListPackagesError, ListPackagesUseCase};
pub use seed_catalog::{SeedCatalogError, SeedCatalogUseCase, SeedOutcome};
