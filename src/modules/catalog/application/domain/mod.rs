pub mod package;
pub mod price_list;

pub use package::{NewPackage, Package};
pub use price_list::bd_price_list;
