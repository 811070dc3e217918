//! Task Endpoints
//!
//! Listing is parameterized by board, sort key and status filter; the
//! server does the sorting and filtering.

use gloo_net::http::Request;
use serde::Serialize;

use super::{bearer, decode_json, expect_ok, ApiError, BASE_URL};
use crate::models::{SortKey, StatusFilter, Task};

/// Query parameters for listing tasks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskQuery {
    pub board_id: u32,
    pub sort_by: SortKey,
    pub status: StatusFilter,
}

impl TaskQuery {
    /// Query pairs in the order the server documents them. The sort and
    /// status parameters are omitted when left at their defaults.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("board_id", self.board_id.to_string())];
        if self.sort_by != SortKey::Created {
            pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        }
        if self.status != StatusFilter::All {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub board_id: u32,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: Option<&'a str>,
    pub priority: Option<&'a str>,
}

#[derive(Serialize)]
struct CompletedArgs {
    completed: bool,
}

#[derive(Serialize)]
struct StatusArgs<'a> {
    status: &'a str,
}

pub async fn list_tasks(token: &str, query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
    let pairs = query.to_pairs();
    let response = Request::get(&format!("{BASE_URL}/tasks"))
        .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    decode_json(response).await
}

pub async fn create_task(token: &str, args: &CreateTaskArgs<'_>) -> Result<(), ApiError> {
    let response = Request::post(&format!("{BASE_URL}/tasks"))
        .header("Authorization", &bearer(token))
        .json(args)?
        .send()
        .await?;
    expect_ok(response).await
}

pub async fn set_task_completed(token: &str, id: u32, completed: bool) -> Result<(), ApiError> {
    let response = Request::put(&format!("{BASE_URL}/tasks/{id}"))
        .header("Authorization", &bearer(token))
        .json(&CompletedArgs { completed })?
        .send()
        .await?;
    expect_ok(response).await
}

pub async fn set_task_status(token: &str, id: u32, status: &str) -> Result<(), ApiError> {
    let response = Request::put(&format!("{BASE_URL}/tasks/{id}"))
        .header("Authorization", &bearer(token))
        .json(&StatusArgs { status })?
        .send()
        .await?;
    expect_ok(response).await
}

pub async fn delete_task(token: &str, id: u32) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{BASE_URL}/tasks/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    expect_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_with_filter() {
        let query = TaskQuery {
            board_id: 5,
            sort_by: SortKey::DueDate,
            status: StatusFilter::Pending,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("board_id", "5".to_string()),
                ("sort_by", "due_date".to_string()),
                ("status", "pending".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_without_filter() {
        let query = TaskQuery {
            board_id: 2,
            sort_by: SortKey::Priority,
            status: StatusFilter::All,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("board_id", "2".to_string()),
                ("sort_by", "priority".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_default_order() {
        let query = TaskQuery {
            board_id: 7,
            sort_by: SortKey::Created,
            status: StatusFilter::All,
        };
        // Creation order sends neither sort_by nor status
        assert_eq!(query.to_pairs(), vec![("board_id", "7".to_string())]);
    }

    #[test]
    fn test_create_task_body_nulls_empty_optionals() {
        let args = CreateTaskArgs {
            board_id: 3,
            title: "A",
            description: None,
            due_date: Some("2024-01-01"),
            priority: None,
        };
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "board_id": 3,
                "title": "A",
                "description": null,
                "due_date": "2024-01-01",
                "priority": null,
            })
        );
    }
}
