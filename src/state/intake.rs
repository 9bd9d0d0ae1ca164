//! Form Intake
//!
//! Validates raw form field values and constructs records. Intake never
//! mutates a store; callers insert the returned record and the feed
//! rebuilds from the snapshot.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::records::{local_timestamp, Appliance, NewsItem, Post, WeatherAlert};
use super::store::IdGen;

/// Wire format of the `datetime-local` input.
const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Validation failures, surfaced to the user as toasts.
///
/// One generic message per class; which field failed is deliberately
/// not reported.
#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    /// A required field was empty after trimming.
    #[error("Please fill all fields")]
    MissingField,

    /// Appliance fields failed the numeric constraints.
    #[error("Please fill valid appliance details")]
    InvalidAppliance,

    /// The validity window could not be parsed.
    #[error("Please enter a valid expiry time")]
    InvalidExpiry,
}

fn required(value: &str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(IntakeError::MissingField)
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_expiry(raw: &str) -> Result<NaiveDateTime, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingField);
    }
    NaiveDateTime::parse_from_str(trimmed, EXPIRY_FORMAT).map_err(|_| IntakeError::InvalidExpiry)
}

/// Builds an alert post from raw form fields.
pub fn post(
    title: &str,
    message: &str,
    priority: &str,
    ids: &IdGen,
) -> Result<Post, IntakeError> {
    Ok(Post {
        id: ids.next_id(),
        title: required(title)?,
        message: required(message)?,
        priority: required(priority)?,
        posted_at: local_timestamp(),
    })
}

/// Builds a weather alert from raw form fields. The expiry arrives in
/// the `datetime-local` wire format.
pub fn weather_alert(
    title: &str,
    kind: &str,
    severity: &str,
    message: &str,
    valid_until: &str,
    ids: &IdGen,
) -> Result<WeatherAlert, IntakeError> {
    Ok(WeatherAlert {
        id: ids.next_id(),
        title: required(title)?,
        kind: required(kind)?,
        severity: required(severity)?,
        message: required(message)?,
        valid_until: parse_expiry(valid_until)?,
        sent_at: local_timestamp(),
    })
}

/// Builds a news article from raw form fields.
pub fn news(
    title: &str,
    content: &str,
    category: &str,
    ids: &IdGen,
) -> Result<NewsItem, IntakeError> {
    Ok(NewsItem {
        id: ids.next_id(),
        title: required(title)?,
        content: required(content)?,
        category: required(category)?,
        published_at: local_timestamp(),
    })
}

/// Builds an appliance row from raw form fields.
///
/// Watts must be strictly positive and hours non-negative; any failure,
/// including a missing name, reports the appliance wording.
pub fn appliance(
    name: &str,
    watts: &str,
    hours: &str,
    ids: &IdGen,
) -> Result<Appliance, IntakeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(IntakeError::InvalidAppliance);
    }

    let watts: f64 = watts
        .trim()
        .parse()
        .map_err(|_| IntakeError::InvalidAppliance)?;
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| IntakeError::InvalidAppliance)?;

    // NaN fails both comparisons, so it is rejected here as well
    if !(watts > 0.0) || !(hours >= 0.0) {
        return Err(IntakeError::InvalidAppliance);
    }

    Ok(Appliance {
        id: ids.next_id(),
        name: name.to_string(),
        watts,
        hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::badge_label;
    use crate::state::store::RecordStore;

    #[test]
    fn posting_then_deleting_a_peak_load_alert() {
        let ids = IdGen::new();
        let mut store = RecordStore::new();

        let alert = post("Peak Load", "Grid load is high tonight.", "high", &ids).unwrap();
        let id = alert.id;
        store.insert_front(alert);

        assert_eq!(store.len(), 1);
        assert!(id > 0);
        assert_eq!(badge_label(&store.all()[0].priority), "HIGH");

        assert!(store.delete_by_id(id));
        assert!(store.is_empty());
    }

    #[test]
    fn post_intake_builds_a_complete_record() {
        let ids = IdGen::new();
        let post = post("Peak Load", "Grid load is high tonight.", "high", &ids).unwrap();

        assert!(post.id > 0);
        assert_eq!(post.title, "Peak Load");
        assert_eq!(post.priority, "high");
        assert!(!post.posted_at.is_empty());
    }

    #[test]
    fn whitespace_only_fields_reject_like_empty_ones() {
        let ids = IdGen::new();
        assert_eq!(
            post("   ", "msg", "high", &ids),
            Err(IntakeError::MissingField)
        );
        assert_eq!(
            post("title", "\t\n", "high", &ids),
            Err(IntakeError::MissingField)
        );
        assert_eq!(post("title", "msg", "", &ids), Err(IntakeError::MissingField));
    }

    #[test]
    fn intake_trims_surrounding_whitespace() {
        let ids = IdGen::new();
        let item = news("  Outage notice  ", "Short one.", "maintenance", &ids).unwrap();
        assert_eq!(item.title, "Outage notice");
    }

    #[test]
    fn appliance_watts_boundary() {
        let ids = IdGen::new();
        assert_eq!(
            appliance("Fan", "0", "8", &ids),
            Err(IntakeError::InvalidAppliance)
        );
        assert!(appliance("Fan", "0.01", "8", &ids).is_ok());
    }

    #[test]
    fn appliance_hours_boundary() {
        let ids = IdGen::new();
        assert_eq!(
            appliance("Fan", "75", "-0.01", &ids),
            Err(IntakeError::InvalidAppliance)
        );
        assert!(appliance("Fan", "75", "0", &ids).is_ok());
    }

    #[test]
    fn appliance_rejects_non_numeric_input() {
        let ids = IdGen::new();
        assert_eq!(
            appliance("Fan", "many", "8", &ids),
            Err(IntakeError::InvalidAppliance)
        );
        assert_eq!(
            appliance("Fan", "NaN", "8", &ids),
            Err(IntakeError::InvalidAppliance)
        );
    }

    #[test]
    fn appliance_missing_name_uses_the_appliance_wording() {
        let ids = IdGen::new();
        assert_eq!(
            appliance("  ", "75", "8", &ids),
            Err(IntakeError::InvalidAppliance)
        );
    }

    #[test]
    fn weather_alert_parses_the_datetime_local_format() {
        let ids = IdGen::new();
        let alert = weather_alert(
            "Thunderstorm Warning",
            "thunderstorm",
            "warning",
            "Storms tonight.",
            "2031-05-01T18:30",
            &ids,
        )
        .unwrap();

        assert_eq!(alert.valid_until.format("%Y-%m-%d %H:%M").to_string(), "2031-05-01 18:30");
    }

    #[test]
    fn weather_alert_rejects_a_garbled_expiry() {
        let ids = IdGen::new();
        assert_eq!(
            weather_alert("t", "snow", "advisory", "m", "next tuesday", &ids),
            Err(IntakeError::InvalidExpiry)
        );
        assert_eq!(
            weather_alert("t", "snow", "advisory", "m", "   ", &ids),
            Err(IntakeError::MissingField)
        );
    }

    #[test]
    fn error_messages_match_the_toast_copy() {
        assert_eq!(IntakeError::MissingField.to_string(), "Please fill all fields");
        assert_eq!(
            IntakeError::InvalidAppliance.to_string(),
            "Please fill valid appliance details"
        );
    }
}
