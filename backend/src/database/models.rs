//! Rust structs that represent database table mappings.
//!
//! These models define the `user_profiles` row and the request bodies that
//! feed it. JSON field casing is UPPERCASE to match the wire format the
//! original clients expect; the `rename_all` attribute on each type is the
//! single place that casing is configured.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `user_profiles`, keyed by `user_name`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "UPPERCASE")]
pub struct UserProfile {
    pub user_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub member_since: Option<NaiveDate>,
}

/// POST body. Only `user_name` is required; every other column may be left
/// null at creation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct NewProfile {
    pub user_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub member_since: Option<NaiveDate>,
}

/// PUT body. A field is updated iff it is present in the JSON body; presence
/// is tracked explicitly through `Option`, so falsy-but-valid values such as
/// `AGE: 0` still count as updates. A JSON `null` reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub member_since: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_uppercase_fields() {
        let profile = UserProfile {
            user_name: "alice".into(),
            display_name: Some("Alice".into()),
            description: None,
            gender: None,
            age: Some(30),
            country: None,
            theme: None,
            member_since: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["USER_NAME"], "alice");
        assert_eq!(json["DISPLAY_NAME"], "Alice");
        assert_eq!(json["AGE"], 30);
        assert!(json["COUNTRY"].is_null());
    }

    #[test]
    fn new_profile_requires_user_name() {
        let err = serde_json::from_str::<NewProfile>(r#"{"DISPLAY_NAME": "Alice"}"#);
        assert!(err.is_err());

        let minimal: NewProfile = serde_json::from_str(r#"{"USER_NAME": "alice"}"#).unwrap();
        assert_eq!(minimal.user_name, "alice");
        assert_eq!(minimal.display_name, None);
    }

    #[test]
    fn update_tracks_presence_not_truthiness() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"AGE": 0}"#).unwrap();
        assert_eq!(update.age, Some(0));
        assert_eq!(update.display_name, None);
    }

    #[test]
    fn update_parses_dates() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"MEMBER_SINCE": "2016-03-01"}"#).unwrap();
        assert_eq!(
            update.member_since,
            Some(NaiveDate::from_ymd_opt(2016, 3, 1).unwrap())
        );
    }
}
