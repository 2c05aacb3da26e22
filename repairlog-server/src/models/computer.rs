//! Add-computer form input

use serde::Deserialize;

/// Body of `POST /add`. All three keys must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct NewComputer {
    pub name: String,
    pub specs: String,
    pub software: String,
}

impl NewComputer {
    /// Installed software, or `None` when the field was left blank.
    pub fn software(&self) -> Option<&str> {
        let trimmed = self.software.trim();
        (!trimmed.is_empty()).then_some(self.software.as_str())
    }
}
