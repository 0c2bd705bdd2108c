pub mod catalog_cache;
pub mod package_query_postgres;
pub mod package_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_cache::CatalogCache;
pub use package_query_postgres::PackageQueryPostgres;
pub use package_repository_postgres::PackageRepositoryPostgres;
