pub mod package_query;
pub mod package_repository;

pub use package_query::{PackageQuery, PackageQueryError};
pub use package_repository::{PackageRepository, PackageRepositoryError};
