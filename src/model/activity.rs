use serde::{Deserialize, Serialize};

/// Details of a single activity as delivered by the backend.
///
/// The activity's name is not part of this struct; it is the key under which
/// the activity appears in the [`ActivityCatalog`](super::ActivityCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in registration order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Activity {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity. Negative when the backend reports an overbooked roster.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spots_left_counts_registered_participants() {
        let activity = Activity::new("Weekly chess", "Fri 3pm", 12)
            .with_participant("a@x.com")
            .with_participant("b@x.com");

        assert_eq!(activity.spots_left(), 10);
        assert!(activity.has_participants());
    }

    #[test]
    fn spots_left_is_zero_when_full() {
        let activity = Activity::new("Weekly chess", "Fri 3pm", 1).with_participant("a@x.com");
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn spots_left_goes_negative_when_overbooked() {
        let activity = Activity::new("Weekly chess", "Fri 3pm", 0).with_participant("a@x.com");
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn deserialize_backend_shape() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "description": "Weekly chess",
                "schedule": "Fri 3pm",
                "max_participants": 2,
                "participants": ["a@x.com"]
            }"#,
        )
        .unwrap();

        assert_eq!(activity.max_participants, 2);
        assert_eq!(activity.participants, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn deserialize_rejects_missing_participants() {
        let result: Result<Activity, _> = serde_json::from_str(
            r#"{"description": "d", "schedule": "s", "max_participants": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_negative_capacity() {
        let result: Result<Activity, _> = serde_json::from_str(
            r#"{"description": "d", "schedule": "s", "max_participants": -1, "participants": []}"#,
        );
        assert!(result.is_err());
    }
}
