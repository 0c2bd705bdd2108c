pub mod order_code_generator;
pub mod order_query;
pub mod order_repository;

pub use order_code_generator::OrderCodeGenerator;
pub use order_query::{OrderQuery, OrderQueryError};
pub use order_repository::{OrderRepository, OrderRepositoryError};
