//! Task Operations
//!
//! Every call takes the session explicitly: its user id forms the path and
//! its token authorizes the request.

use super::{ApiClient, ApiError, Method};
use crate::models::{NewTask, Task, TaskChanges};
use crate::session::Session;

fn tasks_path(session: &Session) -> String {
    format!("/api/{}/tasks", session.user_id)
}

fn task_path(session: &Session, task_id: i64) -> String {
    format!("/api/{}/tasks/{}", session.user_id, task_id)
}

pub async fn list_tasks(api: &ApiClient, session: &Session) -> Result<Vec<Task>, ApiError> {
    api.fetch_json(Method::Get, &tasks_path(session), None::<&()>, Some(&session.token))
        .await
}

pub async fn create_task(
    api: &ApiClient,
    session: &Session,
    title: &str,
    description: &str,
) -> Result<Task, ApiError> {
    let body = NewTask { title, description };
    api.fetch_json(Method::Post, &tasks_path(session), Some(&body), Some(&session.token))
        .await
}

pub async fn update_task(
    api: &ApiClient,
    session: &Session,
    task_id: i64,
    changes: &TaskChanges<'_>,
) -> Result<Task, ApiError> {
    api.fetch_json(Method::Put, &task_path(session, task_id), Some(changes), Some(&session.token))
        .await
}

pub async fn delete_task(api: &ApiClient, session: &Session, task_id: i64) -> Result<(), ApiError> {
    api.fetch_empty(Method::Delete, &task_path(session, task_id), Some(&session.token))
        .await
}

pub async fn toggle_complete(api: &ApiClient, session: &Session, task_id: i64) -> Result<Task, ApiError> {
    let path = format!("{}/complete", task_path(session, task_id));
    api.fetch_json(Method::Patch, &path, None::<&()>, Some(&session.token))
        .await
}
