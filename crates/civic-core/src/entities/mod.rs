//! Entity structs for civic issue reports.
//!
//! `Issue` is the persisted record; `IssueDraft` is what the form input
//! source hands over on submission. Both derive `Serialize`, `Deserialize`,
//! and `JsonSchema`.

mod draft;
mod issue;

pub use draft::IssueDraft;
pub use issue::Issue;
