use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a todo item.
/// Corresponds to the `todo_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "todo_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// Not done yet. Every todo starts here.
    Pending,
    /// Done.
    Completed,
}

/// Input structure for creating a todo.
/// Status is not part of the input: new todos always start `pending`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// The title of the todo. Required, 1 to 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// An optional free-text description.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Body of the status transition endpoint. Any value outside the
/// `TodoStatus` enum is rejected at deserialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: TodoStatus,
}

/// Represents a todo entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Unique identifier (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    /// The owning account. Immutable; todos are never reassigned.
    pub user_id: Uuid,
    /// Creation timestamp; listing orders by this, most recent first.
    pub created_at: DateTime<Utc>,
}

/// Pagination parameters for listing todos.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of a user's todos.
///
/// Offset-based: stable only while no concurrent writes shift the offsets
/// between page fetches.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPage {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_input_validation() {
        let valid_input = TodoInput {
            title: "Buy milk".to_string(),
            description: Some("Semi-skimmed".to_string()),
        };
        assert!(valid_input.validate().is_ok());

        let empty_title = TodoInput {
            title: "".to_string(),
            description: None,
        };
        assert!(empty_title.validate().is_err(), "empty title must fail");

        let long_title = TodoInput {
            title: "a".repeat(201),
            description: None,
        };
        assert!(long_title.validate().is_err(), "overly long title must fail");

        let long_description = TodoInput {
            title: "Valid title".to_string(),
            description: Some("b".repeat(1001)),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TodoStatus::Completed).unwrap(),
            "\"completed\""
        );

        // Anything outside the enum must be rejected, which is what turns a
        // bogus PATCH body into a 400.
        assert!(serde_json::from_str::<StatusUpdate>(r#"{"status":"bogus"}"#).is_err());
        assert!(serde_json::from_str::<StatusUpdate>(r#"{"status":"completed"}"#).is_ok());
    }

    #[test]
    fn test_page_serialization_shape() {
        let page = TodoPage {
            page: 1,
            limit: 10,
            total: 0,
            total_pages: 1,
            data: vec![],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 10);
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
