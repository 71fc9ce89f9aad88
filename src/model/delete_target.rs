/// Class marking a participant's delete control.
pub const DELETE_CONTROL_CLASS: &str = "delete-participant";
pub const DELETE_CONTROL_SELECTOR: &str = ".delete-participant";

/// The participant a delete control acts on, read from its `data-email` and
/// `data-activity` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteTarget {
    pub email: String,
    pub activity: String,
}

impl DeleteTarget {
    /// Resolves a target from the control's data attributes. Missing or empty
    /// values yield `None`.
    pub fn from_data(email: Option<String>, activity: Option<String>) -> Option<Self> {
        let email = email.filter(|email| !email.is_empty())?;
        let activity = activity.filter(|activity| !activity.is_empty())?;
        Some(DeleteTarget { email, activity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_when_both_attributes_present() {
        let target = DeleteTarget::from_data(
            Some("a@x.com".to_string()),
            Some("Chess Club".to_string()),
        );
        assert_eq!(
            target,
            Some(DeleteTarget {
                email: "a@x.com".to_string(),
                activity: "Chess Club".to_string(),
            })
        );
    }

    #[test]
    fn missing_email_is_ignored() {
        assert!(DeleteTarget::from_data(None, Some("Chess Club".to_string())).is_none());
    }

    #[test]
    fn missing_activity_is_ignored() {
        assert!(DeleteTarget::from_data(Some("a@x.com".to_string()), None).is_none());
    }

    #[test]
    fn empty_attributes_are_ignored() {
        assert!(DeleteTarget::from_data(Some(String::new()), Some("Chess Club".to_string())).is_none());
        assert!(DeleteTarget::from_data(Some("a@x.com".to_string()), Some(String::new())).is_none());
    }
}
