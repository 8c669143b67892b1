//! # civic-store
//!
//! Owns the in-memory issue collection and mediates every read and write to
//! the persistence boundary.
//!
//! ## Architecture
//!
//! - [`KeyValueSlot`] is the persistence boundary: one slot under a fixed key
//!   holding the JSON array of issues. [`FileSlot`] keeps it in a file,
//!   [`MemorySlot`] in process memory.
//! - [`IssueStore`] holds the newest-first collection. Every mutation writes
//!   the full collection back to the slot; there are no partial updates.
//! - [`IssueQuery`] is the search + status filter applied by list views.
//!
//! Reads never fail: a missing, unreadable or malformed slot value loads as
//! an empty collection. A malformed value is moved aside first (a `.bak` file
//! for [`FileSlot`]) so later writes cannot destroy it; a value that can be
//! neither read nor moved is left alone and writes are refused. Writes do
//! fail, and the error reaches the caller.

pub mod error;
pub mod query;
pub mod slot;
pub mod store;

pub use error::{SlotError, StoreError};
pub use query::IssueQuery;
pub use slot::{FileSlot, KeyValueSlot, MemorySlot, DEFAULT_SLOT_KEY};
pub use store::{load_issues, IssueStore};
