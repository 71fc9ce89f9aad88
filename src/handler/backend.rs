use crate::model::{ActivityCatalog, ApiError};
use async_trait::async_trait;
use serde::Deserialize;

/// The HTTP backend that owns activities and rosters.
#[async_trait(?Send)]
pub trait ActivitiesBackend {
    /// `GET /activities`
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`. Returns the
    /// backend's confirmation text.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`. Returns the
    /// backend's confirmation text.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct MutationBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Interprets the status and body of a signup or unregister response.
///
/// A body that is not a JSON object is a decode error whatever the status.
/// Only a non-empty string `detail` is passed on; anything else is dropped so
/// the caller falls back to its own text.
pub fn interpret_mutation(status: u16, body: &str) -> Result<String, ApiError> {
    let body: MutationBody = serde_json::from_str(body)?;
    if (200..300).contains(&status) {
        Ok(body.message.unwrap_or_default())
    } else {
        let detail = body
            .detail
            .and_then(|detail| detail.as_str().map(str::to_string))
            .filter(|detail| !detail.is_empty());
        Err(ApiError::Status { status, detail })
    }
}

/// Interprets the status and body of `GET /activities`.
pub fn interpret_catalog(status: u16, body: &str) -> Result<ActivityCatalog, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            detail: None,
        });
    }
    Ok(serde_json::from_str(body)?)
}
