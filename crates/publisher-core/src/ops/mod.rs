pub mod content_item_ops;
pub mod edition_ops;
pub mod local_service_ops;
pub mod projection;
pub mod store;

pub use projection::{editions_in_order, latest_edition};
pub use store::Store;
