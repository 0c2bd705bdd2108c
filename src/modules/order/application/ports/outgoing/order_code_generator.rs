use crate::order::application::domain::OrderCode;

pub trait OrderCodeGenerator: Send + Sync {
    fn next_code(&self) -> OrderCode;
}
