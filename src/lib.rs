#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod handler;
pub mod markup;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::handler::HttpBackend;
    pub use crate::handler::{ActivitiesBackend, ActivitiesController, BoardView, CatalogState};
    pub use crate::model::Activity;
    pub use crate::model::ActivityCatalog;
    pub use crate::model::ApiError;
    pub use crate::model::CatalogEntry;
    pub use crate::model::DeleteTarget;
    pub use crate::model::Message;
    pub use crate::model::MessageKind;
    pub use crate::model::MessageSlot;
}
