//! The issue store: an owned, newest-first collection backed by one slot.

use chrono::{DateTime, Utc};

use civic_core::entities::{Issue, IssueDraft};
use civic_core::enums::IssueStatus;
use civic_core::ids::{issue_timestamp, next_issue_id};
use civic_core::seed::sample_issues;

use crate::error::{SlotError, StoreError};
use crate::query::IssueQuery;
use crate::slot::KeyValueSlot;

/// What a slot held when it was read.
enum SlotContents {
    Missing,
    Issues(Vec<Issue>),
    Unreadable(SlotError),
    Malformed(serde_json::Error),
}

fn read_contents<S: KeyValueSlot + ?Sized>(slot: &S) -> SlotContents {
    match slot.read() {
        Ok(None) => SlotContents::Missing,
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Issue>>(&raw) {
            Ok(issues) => SlotContents::Issues(issues),
            Err(error) => SlotContents::Malformed(error),
        },
        Err(error) => SlotContents::Unreadable(error),
    }
}

/// Read the persisted collection from `slot`.
///
/// Returns an empty collection when nothing is stored, when the slot cannot
/// be read, or when the stored value is not a valid issue array. Failures are
/// logged, never returned. The slot itself is not touched.
pub fn load_issues<S: KeyValueSlot + ?Sized>(slot: &S) -> Vec<Issue> {
    match read_contents(slot) {
        SlotContents::Missing => {
            tracing::debug!(key = slot.key(), "slot is empty; starting with no issues");
            Vec::new()
        }
        SlotContents::Issues(issues) => {
            tracing::debug!(key = slot.key(), count = issues.len(), "loaded issues");
            issues
        }
        SlotContents::Unreadable(error) => {
            tracing::warn!(key = slot.key(), %error, "failed to read issue slot; starting empty");
            Vec::new()
        }
        SlotContents::Malformed(error) => {
            tracing::warn!(key = slot.key(), %error, "stored issues are malformed; starting empty");
            Vec::new()
        }
    }
}

/// Owns the issue collection and every write to its slot.
///
/// The collection is ordered newest-first and the slot always receives a full
/// snapshot of it. A stored value that fails to parse is moved aside before
/// the store may write; if that is impossible, or the slot could not be read
/// at all, every write is refused with [`StoreError::Protected`].
#[derive(Debug)]
pub struct IssueStore<S> {
    slot: S,
    issues: Vec<Issue>,
    set_aside: Option<String>,
    protected: bool,
}

impl<S: KeyValueSlot> IssueStore<S> {
    /// Open a store over `slot`, loading whatever it currently holds.
    pub fn load(mut slot: S) -> Self {
        let mut set_aside = None;
        let mut protected = false;

        let issues = match read_contents(&slot) {
            SlotContents::Missing => Vec::new(),
            SlotContents::Issues(issues) => {
                tracing::debug!(key = slot.key(), count = issues.len(), "loaded issues");
                issues
            }
            SlotContents::Unreadable(error) => {
                tracing::warn!(
                    key = slot.key(),
                    %error,
                    "failed to read issue slot; starting empty and leaving it untouched"
                );
                protected = true;
                Vec::new()
            }
            SlotContents::Malformed(error) => {
                match slot.set_aside() {
                    Ok(backup) => {
                        tracing::warn!(
                            key = slot.key(),
                            %error,
                            backup = backup.as_deref().unwrap_or("-"),
                            "stored issues are malformed; moved them aside and starting empty"
                        );
                        set_aside = backup;
                    }
                    Err(backup_error) => {
                        tracing::warn!(
                            key = slot.key(),
                            %error,
                            %backup_error,
                            "stored issues are malformed and could not be moved aside; \
                             starting empty and leaving them untouched"
                        );
                        protected = true;
                    }
                }
                Vec::new()
            }
        };

        Self {
            slot,
            issues,
            set_aside,
            protected,
        }
    }

    /// Where an unparseable stored value was moved during [`load`](Self::load).
    #[must_use]
    pub fn set_aside_location(&self) -> Option<&str> {
        self.set_aside.as_deref()
    }

    /// Whether writes are refused to protect an unreadable stored value.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        self.protected
    }

    /// The whole collection, newest first.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Populate an empty collection with the sample issues and persist them.
    ///
    /// Returns `true` if seeding happened; the caller should re-render.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the seeded collection cannot be persisted. The
    /// samples stay in memory.
    pub fn seed_if_empty(&mut self) -> Result<bool, StoreError> {
        self.seed_if_empty_at(Utc::now())
    }

    /// [`seed_if_empty`](Self::seed_if_empty) with an explicit clock.
    ///
    /// # Errors
    ///
    /// See [`seed_if_empty`](Self::seed_if_empty).
    pub fn seed_if_empty_at(&mut self, now: DateTime<Utc>) -> Result<bool, StoreError> {
        if !self.issues.is_empty() {
            return Ok(false);
        }

        self.issues = sample_issues(now);
        tracing::info!(count = self.issues.len(), "seeded sample issues");
        self.persist()?;
        Ok(true)
    }

    /// Record a new report and persist the collection.
    ///
    /// The issue gets a fresh ID, status `pending`, and the current time. It
    /// is placed at the front of the collection. Fields are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if persisting fails. The new issue is kept
    /// at index 0 of the in-memory collection regardless.
    pub fn create(&mut self, draft: IssueDraft) -> Result<Issue, StoreError> {
        self.create_at(draft, Utc::now())
    }

    /// [`create`](Self::create) with an explicit clock.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_at(&mut self, draft: IssueDraft, now: DateTime<Utc>) -> Result<Issue, StoreError> {
        let id = next_issue_id(now, |candidate| self.get(candidate).is_some());
        let issue = Issue {
            id,
            issue_type: draft.issue_type,
            description: draft.description,
            location: draft.location,
            priority: draft.priority,
            status: IssueStatus::Pending,
            date: issue_timestamp(now),
            photo: draft.photo,
        };

        self.issues.insert(0, issue.clone());
        tracing::debug!(id = %issue.id, issue_type = %issue.issue_type, "issue created");

        self.persist()?;
        Ok(issue)
    }

    /// Issues matching `query`, in collection order.
    #[must_use]
    pub fn query(&self, query: &IssueQuery) -> Vec<&Issue> {
        query.apply(&self.issues)
    }

    /// Overwrite the slot with the full collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the slot write fails, or
    /// `StoreError::Protected` if the slot holds a value that must not be
    /// overwritten.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        if self.protected {
            return Err(StoreError::Protected {
                key: self.slot.key().to_string(),
            });
        }

        let value = serde_json::to_string(&self.issues)?;
        self.slot
            .write(&value)
            .map_err(|source| StoreError::Write {
                key: self.slot.key().to_string(),
                source,
            })?;
        tracing::debug!(
            key = self.slot.key(),
            count = self.issues.len(),
            bytes = value.len(),
            "persisted issues"
        );
        Ok(())
    }

    /// Give back the slot, dropping the in-memory collection.
    pub fn into_slot(self) -> S {
        self.slot
    }
}
