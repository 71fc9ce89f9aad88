use super::backend::{interpret_catalog, interpret_mutation, ActivitiesBackend};
use super::Endpoints;
use crate::config::Config;
use crate::model::{ActivityCatalog, ApiError};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// [`ActivitiesBackend`] over the browser's fetch API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoints: Endpoints::new(config.api_base_url.clone()),
        }
    }

    async fn read(response: Response) -> Result<(u16, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ActivitiesBackend for HttpBackend {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.endpoints.activities();
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let (status, body) = Self::read(response).await?;
        interpret_catalog(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.endpoints.signup(activity, email);
        log::debug!("POST {}", url);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let (status, body) = Self::read(response).await?;
        interpret_mutation(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.endpoints.unregister(activity, email);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let (status, body) = Self::read(response).await?;
        interpret_mutation(status, &body)
    }
}
