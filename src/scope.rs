//! View Scope
//!
//! Async work tied to the lifetime of a view. When the view is torn down the
//! scope aborts whatever is still pending, so late responses never land in
//! state that no longer exists.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Default)]
pub struct ViewScope {
    /// Handles of work still in flight, keyed by run id
    handles: Arc<Mutex<HashMap<u64, AbortHandle>>>,
    next_id: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that cancels itself when the current reactive owner is cleaned up
    pub fn for_current_view() -> Self {
        let scope = Self::new();
        let on_teardown = scope.clone();
        leptos::prelude::on_cleanup(move || on_teardown.cancel());
        scope
    }

    /// Run `fut` unless the scope is cancelled first; `None` means it was.
    pub fn run<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if self.is_cancelled() {
            handle.abort();
        } else if let Ok(mut handles) = self.handles.lock() {
            handles.insert(id, handle);
        }
        let guarded = Abortable::new(fut, registration);
        let handles = self.handles.clone();
        async move {
            let output = guarded.await.ok();
            if let Ok(mut handles) = handles.lock() {
                handles.remove(&id);
            }
            output
        }
    }

    /// Spawn `fut` on the browser event loop under this scope
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let guarded = self.run(fut);
        leptos::task::spawn_local(async move {
            if guarded.await.is_none() {
                log::debug!("discarded result of a torn-down view");
            }
        });
    }

    pub fn cancel(&self) {
        self.closed.store(true, Ordering::SeqCst);
        if let Ok(mut handles) = self.handles.lock() {
            for (_, handle) in handles.drain() {
                handle.abort();
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
