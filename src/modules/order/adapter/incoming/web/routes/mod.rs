mod admin_orders;
mod guest_history;
mod list_user_orders;
mod place_order;
mod track_order;
mod update_status;

pub use admin_orders::*;
pub use guest_history::*;
pub use list_user_orders::*;
pub use place_order::*;
pub use track_order::*;
pub use update_status::*;
