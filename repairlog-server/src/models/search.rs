//! List/search query parameters

use serde::Deserialize;

/// Query string of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The search term, if one was given. An empty `q` means "list all".
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}
