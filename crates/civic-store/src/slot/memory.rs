use crate::error::SlotError;

use super::{check_quota, KeyValueSlot, DEFAULT_SLOT_KEY};

/// A slot held in process memory.
///
/// Useful for tests and for sessions that should not touch disk. An optional
/// quota mimics the storage limits of a browser origin.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    value: Option<String>,
    quota_bytes: Option<usize>,
    set_aside: Vec<String>,
}

impl MemorySlot {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            quota_bytes: None,
            set_aside: Vec::new(),
        }
    }

    /// Start with `value` already stored.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Refuse writes larger than `bytes`.
    #[must_use]
    pub const fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// The stored value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Values moved out by [`KeyValueSlot::set_aside`], oldest first.
    #[must_use]
    pub fn set_aside_values(&self) -> &[String] {
        &self.set_aside
    }

    /// Drop the stored value, as if storage had been cleared externally.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_KEY)
    }
}

impl KeyValueSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        check_quota(&self.key, value, self.quota_bytes)?;
        self.value = Some(value.to_string());
        Ok(())
    }

    fn set_aside(&mut self) -> Result<Option<String>, SlotError> {
        let Some(value) = self.value.take() else {
            return Ok(None);
        };
        self.set_aside.push(value);
        Ok(Some(format!("{}.bak.{}", self.key, self.set_aside.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot = MemorySlot::default();
        assert_eq!(slot.key(), "civicIssues");
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn write_replaces_value() {
        let mut slot = MemorySlot::new("k").with_value("old");
        slot.write("new").unwrap();
        assert_eq!(slot.value(), Some("new"));
    }

    #[test]
    fn quota_rejects_oversized_value_and_keeps_old_one() {
        let mut slot = MemorySlot::new("k").with_value("[]").with_quota(4);
        let err = slot.write("[1,2,3]").unwrap_err();
        assert!(matches!(
            err,
            SlotError::QuotaExceeded {
                size: 7,
                limit: 4,
                ..
            }
        ));
        assert_eq!(slot.value(), Some("[]"));
    }

    #[test]
    fn set_aside_keeps_value_and_empties_slot() {
        let mut slot = MemorySlot::new("k").with_value("[oops");
        assert_eq!(slot.set_aside().unwrap().as_deref(), Some("k.bak.1"));
        assert_eq!(slot.value(), None);
        assert_eq!(slot.set_aside_values(), ["[oops".to_string()]);
        assert_eq!(slot.set_aside().unwrap(), None);
    }

    #[test]
    fn clear_drops_value() {
        let mut slot = MemorySlot::default().with_value("[]");
        slot.clear();
        assert_eq!(slot.read().unwrap(), None);
    }
}
