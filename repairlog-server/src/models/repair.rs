//! Add-repair form input

use serde::Deserialize;

/// Body of `POST /computer/{id}/add_repair`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRepair {
    pub detail: String,
}
