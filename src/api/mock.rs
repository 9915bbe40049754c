//! Recording transport for tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiError, HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
/// Once the queue is empty it answers 200 with an empty JSON list.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `"METHOD path"` for each request, with the base URL stripped
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| {
                let path = r.url.splitn(4, '/').nth(3).unwrap_or("");
                format!("{} /{}", r.method.as_str(), path)
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(HttpResponse {
            status: 200,
            body: "[]".to_string(),
        }))
    }
}

/// JSON for a task as the service renders it
pub fn task_json(id: i64, user_id: i64, title: &str, completed: bool) -> String {
    serde_json::json!({
        "id": id,
        "user_id": user_id,
        "title": title,
        "description": "",
        "completed": completed,
        "created_at": "2026-03-01T08:00:00.000000",
        "updated_at": "2026-03-01T08:00:00.000000",
    })
    .to_string()
}

pub fn task_list_json(tasks: &[(i64, &str, bool)], user_id: i64) -> String {
    let items: Vec<String> = tasks
        .iter()
        .map(|(id, title, done)| task_json(*id, user_id, title, *done))
        .collect();
    format!("[{}]", items.join(","))
}
