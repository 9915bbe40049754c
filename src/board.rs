//! Task Board
//!
//! What the tasks page does, independent of rendering: gate on the session,
//! validate drafts, and resynchronize the whole list after every mutation.

use crate::api::{self, ApiClient, ApiError};
use crate::models::{Task, TaskChanges};
use crate::routes::Route;
use crate::session::{Session, SessionStore};

/// Shown when the list itself cannot be loaded
pub const LOAD_FAILED: &str = "Failed to load tasks";

/// Outcome of the mount-time session check
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Redirect(Route),
    Proceed(Session),
}

pub fn check_session(sessions: &SessionStore) -> Gate {
    match sessions.load() {
        Some(session) => Gate::Proceed(session),
        None => Gate::Redirect(Route::Login),
    }
}

/// A validated title/description pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    /// Trims both fields. `None` when the title is blank.
    pub fn new(title: &str, description: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }
}

/// A mutation the board can apply
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(TaskDraft),
    Update(i64, TaskDraft),
    Delete(i64),
    Toggle(i64),
}

/// Task operations bound to one session
#[derive(Clone)]
pub struct TaskBoard {
    api: ApiClient,
    session: Session,
}

impl TaskBoard {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn fetch(&self) -> Result<Vec<Task>, ApiError> {
        api::list_tasks(&self.api, &self.session).await
    }

    /// Apply one mutation, then refetch the full list
    pub async fn apply(&self, mutation: Mutation) -> Result<Vec<Task>, ApiError> {
        self.mutate(&mutation).await?;
        self.fetch().await
    }

    async fn mutate(&self, mutation: &Mutation) -> Result<(), ApiError> {
        let (api, session) = (&self.api, &self.session);
        match mutation {
            Mutation::Create(draft) => {
                api::create_task(api, session, &draft.title, &draft.description).await?;
            }
            Mutation::Update(id, draft) => {
                let changes = TaskChanges {
                    title: Some(&draft.title),
                    description: Some(&draft.description),
                };
                api::update_task(api, session, *id, &changes).await?;
            }
            Mutation::Delete(id) => api::delete_task(api, session, *id).await?,
            Mutation::Toggle(id) => {
                api::toggle_complete(api, session, *id).await?;
            }
        }
        Ok(())
    }
}

/// (pending, done)
pub fn counts(tasks: &[Task]) -> (usize, usize) {
    let done = tasks.iter().filter(|t| t.completed).count();
    (tasks.len() - done, done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{task_json, task_list_json, MockTransport};
    use crate::session::MemoryStore;
    use futures::executor::block_on;

    fn board(mock: &MockTransport) -> TaskBoard {
        let api = ApiClient::new("http://api.test", mock.clone());
        TaskBoard::new(api, Session { token: "jwt".to_string(), user_id: 4 })
    }

    #[test]
    fn test_gate_without_session_redirects_before_any_request() {
        let mock = MockTransport::new();
        let sessions = SessionStore::new(MemoryStore::default());

        assert_eq!(check_session(&sessions), Gate::Redirect(Route::Login));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_gate_with_half_session_redirects() {
        let backend = MemoryStore::default();
        let sessions = SessionStore::new(backend.clone());
        sessions.save("jwt", 4);
        crate::session::KeyValueStore::remove(&backend, "todo_user_id");
        assert_eq!(check_session(&sessions), Gate::Redirect(Route::Login));
    }

    #[test]
    fn test_gate_with_session_proceeds() {
        let sessions = SessionStore::new(MemoryStore::default());
        sessions.save("jwt", 4);
        assert_eq!(
            check_session(&sessions),
            Gate::Proceed(Session { token: "jwt".to_string(), user_id: 4 })
        );
    }

    #[test]
    fn test_draft_trims() {
        let draft = TaskDraft::new("  Buy milk  ", "").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "");
        assert_eq!(TaskDraft::new("a", "  b \n").unwrap().description, "b");
    }

    #[test]
    fn test_blank_draft_is_rejected() {
        assert_eq!(TaskDraft::new("", "desc"), None);
        assert_eq!(TaskDraft::new(" \t\n ", ""), None);
    }

    #[test]
    fn test_create_sends_trimmed_title_then_refetches() {
        let mock = MockTransport::new();
        mock.respond(201, &task_json(1, 4, "Buy milk", false));
        mock.respond(200, &task_list_json(&[(1, "Buy milk", false)], 4));

        let draft = TaskDraft::new("  Buy milk  ", "").unwrap();
        let tasks = block_on(board(&mock).apply(Mutation::Create(draft))).unwrap();

        assert_eq!(mock.calls(), vec!["POST /api/4/tasks", "GET /api/4/tasks"]);
        let body: serde_json::Value = serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[test]
    fn test_every_mutation_is_followed_by_a_fresh_fetch() {
        let draft = TaskDraft::new("x", "").unwrap();
        let cases = vec![
            (Mutation::Update(3, draft), "PUT /api/4/tasks/3"),
            (Mutation::Delete(3), "DELETE /api/4/tasks/3"),
            (Mutation::Toggle(3), "PATCH /api/4/tasks/3/complete"),
        ];

        for (mutation, expected) in cases {
            let mock = MockTransport::new();
            let before = block_on(board(&mock).fetch()).unwrap();
            assert!(before.is_empty());

            match &mutation {
                Mutation::Delete(_) => mock.respond(204, ""),
                _ => mock.respond(200, &task_json(3, 4, "x", true)),
            };
            mock.respond(200, &task_list_json(&[(3, "x", true)], 4));

            let after = block_on(board(&mock).apply(mutation)).unwrap();
            assert_eq!(after.len(), 1);
            assert_eq!(mock.calls(), vec!["GET /api/4/tasks", expected, "GET /api/4/tasks"]);
        }
    }

    #[test]
    fn test_toggle_task_seven_patches_once() {
        let mock = MockTransport::new();
        mock.respond(200, &task_json(7, 4, "t", true));

        block_on(board(&mock).apply(Mutation::Toggle(7))).unwrap();

        let patches: Vec<String> = mock.calls().into_iter().filter(|c| c.starts_with("PATCH")).collect();
        assert_eq!(patches, vec!["PATCH /api/4/tasks/7/complete"]);
        assert_eq!(mock.calls().len(), 2);
    }

    #[test]
    fn test_failed_mutation_skips_refetch() {
        let mock = MockTransport::new();
        mock.respond(404, r#"{"detail":"Task not found"}"#);

        let err = block_on(board(&mock).apply(Mutation::Delete(9))).unwrap_err();
        assert_eq!(err.to_string(), "Task not found");
        assert_eq!(mock.calls(), vec!["DELETE /api/4/tasks/9"]);
    }

    #[test]
    fn test_counts() {
        let tasks: Vec<Task> = serde_json::from_str(&task_list_json(&[(1, "a", true), (2, "b", false), (3, "c", false)], 1)).unwrap();
        assert_eq!(counts(&tasks), (2, 1));
        assert_eq!(counts(&[]), (0, 0));
    }
}
