use urlencoding::encode;

/// Builds backend URLs. Activity names and emails are percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn activities(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    pub fn signup(&self, activity: &str, email: &str) -> String {
        self.participant_action(activity, "signup", email)
    }

    pub fn unregister(&self, activity: &str, email: &str) -> String {
        self.participant_action(activity, "unregister", email)
    }

    fn participant_action(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            encode(activity),
            action,
            encode(email)
        )
    }
}
