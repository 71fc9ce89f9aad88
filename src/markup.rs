//! Markup for the activities list and the activity selector.
//!
//! Everything here is a pure function of the catalog, so rendering the same
//! catalog twice produces the same bytes. Backend-supplied strings are
//! escaped before they reach the markup, both in text and in attributes.

use crate::model::{Activity, ActivityCatalog, CatalogEntry, DELETE_CONTROL_CLASS};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Escapes the characters that could open markup or break out of a quoted
/// attribute.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inner markup of one activity card.
pub fn activity_card_html(entry: &CatalogEntry) -> String {
    let activity = &entry.activity;
    let name = escape_html(&entry.name);

    let mut html = format!("<h4>{}</h4>", name);
    html.push_str(&format!("<p>{}</p>", escape_html(&activity.description)));
    html.push_str(&format!(
        "<p><strong>Schedule:</strong> {}</p>",
        escape_html(&activity.schedule)
    ));
    html.push_str(&format!(
        "<p><strong>Availability:</strong> {} spots left</p>",
        activity.spots_left()
    ));
    html.push_str(&participants_html(&name, activity));
    html
}

fn participants_html(escaped_activity: &str, activity: &Activity) -> String {
    let mut html = String::from(r#"<div class="participants"><strong>Participants:</strong>"#);
    if activity.has_participants() {
        html.push_str(r#"<ul class="participants-list">"#);
        for participant in &activity.participants {
            let email = escape_html(participant);
            html.push_str(&format!(
                r#"<li><span class="participant-email">{email}</span><button class="{class}" data-email="{email}" data-activity="{activity}" title="Remove participant">🗑️</button></li>"#,
                email = email,
                class = DELETE_CONTROL_CLASS,
                activity = escaped_activity,
            ));
        }
        html.push_str("</ul>");
    } else {
        html.push_str(&format!(
            r#"<p class="no-participants">{}</p>"#,
            NO_PARTICIPANTS_TEXT
        ));
    }
    html.push_str("</div>");
    html
}

/// Markup for every card in catalog order.
pub fn activities_html(catalog: &ActivityCatalog) -> Vec<String> {
    catalog
        .get_activities()
        .iter()
        .map(activity_card_html)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options for the activity selector: the placeholder first, then one per
/// activity with value and label both set to its name.
pub fn select_options(catalog: &ActivityCatalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(catalog.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_catalog() -> ActivityCatalog {
        serde_json::from_str(
            r#"{"Chess Club": {
                "description": "Weekly chess",
                "schedule": "Fri 3pm",
                "max_participants": 2,
                "participants": ["a@x.com"]
            }}"#,
        )
        .unwrap()
    }

    fn entry(name: &str, activity: Activity) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            activity,
        }
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn chess_club_card() {
        let catalog = chess_catalog();
        let html = activity_card_html(&catalog.get_activities()[0]);

        assert!(html.contains("<h4>Chess Club</h4>"));
        assert!(html.contains("<p>Weekly chess</p>"));
        assert!(html.contains("<strong>Schedule:</strong> Fri 3pm"));
        assert!(html.contains("1 spots left"));
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains(r#"<span class="participant-email">a@x.com</span>"#));
        assert!(html.contains(r#"data-email="a@x.com" data-activity="Chess Club""#));
        assert!(!html.contains(NO_PARTICIPANTS_TEXT));
    }

    #[test]
    fn full_activity_still_shows_zero_spots() {
        let activity = Activity::new("d", "s", 1).with_participant("a@x.com");
        let html = activity_card_html(&entry("Full", activity));
        assert!(html.contains("<strong>Availability:</strong> 0 spots left"));
    }

    #[test]
    fn empty_roster_renders_placeholder_only() {
        let html = activity_card_html(&entry("Empty", Activity::new("d", "s", 10)));

        assert!(html.contains(r#"<p class="no-participants">No participants yet.</p>"#));
        assert!(!html.contains(DELETE_CONTROL_CLASS));
        assert!(!html.contains("<ul"));
        assert!(html.contains("10 spots left"));
    }

    #[test]
    fn backend_strings_are_escaped() {
        let hostile = r#"<script>alert("x")</script> & 'y'"#;
        let activity = Activity::new(hostile, hostile, 3).with_participant(hostile);
        let html = activity_card_html(&entry(hostile, activity));

        assert!(!html.contains("<script>"));
        assert!(!html.contains(r#""x""#));
        assert!(!html.contains("'y'"));
        assert!(!html.contains(" & "));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#039;y&#039;"));
        assert!(html.contains(
            r#"data-email="&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#039;y&#039;""#
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut catalog = chess_catalog();
        catalog.add_activity(
            "Gym <Class>",
            Activity::new("Exercise", "Mon 2pm", 30).with_participant("b@x.com"),
        );

        assert_eq!(activities_html(&catalog), activities_html(&catalog));
        assert_eq!(select_options(&catalog), select_options(&catalog));
    }

    #[test]
    fn cards_follow_catalog_order() {
        let mut catalog = ActivityCatalog::new();
        catalog.add_activity("Zumba", Activity::new("d", "s", 1));
        catalog.add_activity("Art", Activity::new("d", "s", 1));

        let cards = activities_html(&catalog);
        assert_eq!(cards.len(), 2);
        assert!(cards[0].starts_with("<h4>Zumba</h4>"));
        assert!(cards[1].starts_with("<h4>Art</h4>"));
    }

    #[test]
    fn select_options_start_with_placeholder() {
        let options = select_options(&chess_catalog());

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, SELECT_PLACEHOLDER);
        assert_eq!(options[1].value, "Chess Club");
        assert_eq!(options[1].label, "Chess Club");
    }

    #[test]
    fn select_options_for_empty_catalog() {
        let options = select_options(&ActivityCatalog::new());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, SELECT_PLACEHOLDER);
    }
}
