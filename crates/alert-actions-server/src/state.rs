use std::path::PathBuf;

/// Shared application state passed to all route handlers.
///
/// Only the root is shared; config and data files are re-read per request.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
