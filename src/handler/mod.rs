mod backend;
mod controller;
mod endpoints;

#[cfg(feature = "yew")]
mod http_backend;

pub use backend::{interpret_catalog, interpret_mutation, ActivitiesBackend};
pub use controller::{ActivitiesController, BoardView, CatalogState};
pub use endpoints::Endpoints;

#[cfg(feature = "yew")]
pub use http_backend::HttpBackend;
