//! HTTP API and embedded chat page

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across handlers
///
/// There is one session per process. The lock is held for the whole of a
/// send, so user actions run one at a time.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
