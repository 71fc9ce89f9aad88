use super::ActivitiesBackend;
use crate::model::{ActivityCatalog, ApiError, DeleteTarget, Message};

/// What the activities list currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

/// The surface the controller drives: the list, the message display and the
/// signup form.
pub trait BoardView {
    fn render(&self, state: CatalogState);
    fn show_message(&self, message: Message);
    fn clear_form(&self);
}

struct FailureTexts {
    /// Non-2xx response without a usable detail.
    rejected: &'static str,
    /// The request or its body never arrived intact.
    failed: &'static str,
    action: &'static str,
}

const SIGNUP_FAILURE: FailureTexts = FailureTexts {
    rejected: "An error occurred",
    failed: "Failed to sign up. Please try again.",
    action: "signing up",
};

const UNREGISTER_FAILURE: FailureTexts = FailureTexts {
    rejected: "Failed to remove participant",
    failed: "Failed to remove participant. Please try again.",
    action: "unregistering participant",
};

/// Runs the fetch-and-render cycle and the two mutations.
///
/// Every successful mutation is followed by a full re-fetch; failures never
/// re-fetch and are never retried.
pub struct ActivitiesController<B> {
    backend: B,
}

impl<B> ActivitiesController<B>
where
    B: ActivitiesBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn load_catalog(&self) -> CatalogState {
        match self.backend.fetch_catalog().await {
            Ok(catalog) => {
                log::debug!("Loaded {} activities", catalog.len());
                CatalogState::Loaded(catalog)
            }
            Err(err) => {
                log::error!("Error fetching activities: {}", err);
                CatalogState::Failed
            }
        }
    }

    pub async fn refresh<V>(&self, view: &V)
    where
        V: BoardView + ?Sized,
    {
        view.render(self.load_catalog().await);
    }

    pub async fn signup<V>(&self, activity: &str, email: &str, view: &V)
    where
        V: BoardView + ?Sized,
    {
        match self.backend.signup(activity, email).await {
            Ok(confirmation) => {
                log::info!("Signed up {} for {}", email, activity);
                view.show_message(Message::success(confirmation));
                view.clear_form();
                self.refresh(view).await;
            }
            Err(err) => view.show_message(failure_message(&err, &SIGNUP_FAILURE)),
        }
    }

    pub async fn unregister<V>(&self, target: &DeleteTarget, view: &V)
    where
        V: BoardView + ?Sized,
    {
        match self.backend.unregister(&target.activity, &target.email).await {
            Ok(confirmation) => {
                log::info!("Unregistered {} from {}", target.email, target.activity);
                view.show_message(Message::success(confirmation));
                self.refresh(view).await;
            }
            Err(err) => view.show_message(failure_message(&err, &UNREGISTER_FAILURE)),
        }
    }
}

fn failure_message(err: &ApiError, texts: &FailureTexts) -> Message {
    match err {
        ApiError::Status {
            detail: Some(detail),
            ..
        } => Message::error(detail.clone()),
        ApiError::Status { detail: None, .. } => {
            log::error!("Error {}: {}", texts.action, err);
            Message::error(texts.rejected)
        }
        ApiError::Network(_) | ApiError::Decode(_) => {
            log::error!("Error {}: {}", texts.action, err);
            Message::error(texts.failed)
        }
    }
}
