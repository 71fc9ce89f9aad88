mod activity;
mod activity_catalog;
mod delete_target;
mod error;
mod message;

pub use activity::Activity;
pub use activity_catalog::{ActivityCatalog, CatalogEntry};
pub use delete_target::{DeleteTarget, DELETE_CONTROL_CLASS, DELETE_CONTROL_SELECTOR};
pub use error::ApiError;
pub use message::{Message, MessageKind, MessageSlot};
