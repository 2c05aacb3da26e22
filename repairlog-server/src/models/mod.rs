//! Request inputs decoded from forms and query strings
//!
//! Only presence is checked: a missing field is rejected by the extractor,
//! an empty one is accepted as-is.

pub mod computer;
pub mod repair;
pub mod search;

pub use computer::NewComputer;
pub use repair::NewRepair;
pub use search::SearchParams;
