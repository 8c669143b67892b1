//! The key-value persistence boundary.
//!
//! A slot holds exactly one string value under a fixed key. The store reads it
//! once at startup and overwrites it whole on every mutation.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::SlotError;

pub use civic_core::DEFAULT_STORAGE_KEY as DEFAULT_SLOT_KEY;

/// A single key-value storage location.
pub trait KeyValueSlot {
    /// The key this slot is addressed by.
    fn key(&self) -> &str;

    /// Current value, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the backing storage cannot be read.
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Replace the stored value in a single call.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the value cannot be stored, including when it
    /// exceeds the slot's quota.
    fn write(&mut self, value: &str) -> Result<(), SlotError>;

    /// Move the stored value out of the way, leaving the slot empty.
    ///
    /// Used before the first write over a value the store could not parse, so
    /// the write cannot destroy it. Returns where the value now lives, or
    /// `None` if the slot was already empty.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the value could not be moved. The slot is left
    /// as it was.
    fn set_aside(&mut self) -> Result<Option<String>, SlotError>;
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for Box<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> Result<Option<String>, SlotError> {
        (**self).read()
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        (**self).write(value)
    }

    fn set_aside(&mut self) -> Result<Option<String>, SlotError> {
        (**self).set_aside()
    }
}

/// Reject values larger than `limit` bytes. A limit of `None` means unbounded.
fn check_quota(key: &str, value: &str, limit: Option<usize>) -> Result<(), SlotError> {
    match limit {
        Some(limit) if value.len() > limit => Err(SlotError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
