//! Frontend Models
//!
//! Data structures matching the task service's JSON bodies.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

/// Token issued by signup/login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user_id: i64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Default, Serialize)]
pub struct TaskChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

/// The service emits naive ISO-8601 timestamps; RFC 3339 with an offset is
/// accepted too and normalised to UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_task_from_service_json() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "title": "Buy milk",
            "description": "",
            "completed": false,
            "created_at": "2026-02-01T09:30:15.123456",
            "updated_at": "2026-02-01T10:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.user_id, 3);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.created_at.day(), 1);
        assert_eq!(task.updated_at.hour(), 10);
    }

    #[test]
    fn test_task_accepts_offset_timestamps_and_missing_description() {
        let json = r#"{
            "id": 1,
            "user_id": 1,
            "title": "t",
            "completed": true,
            "created_at": "2026-02-01T09:30:00+02:00",
            "updated_at": "2026-02-01T09:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.created_at.hour(), 7);
        assert_eq!(task.updated_at.hour(), 9);
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        let json = r#"{"id":1,"user_id":1,"title":"t","completed":false,
            "created_at":"yesterday","updated_at":"yesterday"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_auth_response_defaults_token_type() {
        let auth: AuthResponse = serde_json::from_str(r#"{"access_token":"abc","user_id":5}"#).unwrap();
        assert_eq!(auth.token_type, "bearer");
        assert_eq!(auth.user_id, 5);
    }

    #[test]
    fn test_task_changes_omits_absent_fields() {
        let changes = TaskChanges { title: Some("New"), description: None };
        assert_eq!(serde_json::to_string(&changes).unwrap(), r#"{"title":"New"}"#);
    }
}
