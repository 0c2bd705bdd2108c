use serde::Serialize;
use utoipa::ToSchema;

/// A purchasable catalog entry. Prices are whole taka.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Package {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "UID Top-up (BD)")]
    pub category: String,
    #[schema(example = "25 Diamond")]
    pub name: String,
    #[schema(example = 30)]
    pub price: i64,
    /// Zero for memberships and airdrops.
    #[schema(example = 25)]
    pub diamonds: i32,
}

/// A package that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPackage {
    pub category: String,
    pub name: String,
    pub price: i64,
    pub diamonds: i32,
}

impl NewPackage {
    pub fn new(category: &str, name: &str, price: i64, diamonds: i32) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            price,
            diamonds,
        }
    }
}
