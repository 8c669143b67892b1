use civic_config::CivicConfig;
use civic_store::{FileSlot, IssueStore, KeyValueSlot};

/// Application state owned for the lifetime of one invocation.
///
/// Holds the only issue collection; command handlers borrow it mutably one
/// event at a time.
pub struct AppContext {
    pub store: IssueStore<Box<dyn KeyValueSlot>>,
    pub config: CivicConfig,
}

impl AppContext {
    /// Open the configured slot and load the collection from it.
    pub fn init(config: CivicConfig) -> Self {
        let slot = FileSlot::new(config.storage.resolved_data_dir(), config.storage.key.as_str())
            .with_quota(config.storage.quota_bytes);
        let path = slot.path();
        tracing::debug!(path = %path.display(), "opening issue store");
        Self::with_slot(config, Box::new(slot))
    }

    /// Build a context over an arbitrary slot.
    pub fn with_slot(config: CivicConfig, slot: Box<dyn KeyValueSlot>) -> Self {
        Self {
            store: IssueStore::load(slot),
            config,
        }
    }

    /// Seed sample issues into an empty collection.
    pub fn seed_on_startup(&mut self) -> anyhow::Result<bool> {
        let seeded = self.store.seed_if_empty()?;
        if seeded {
            tracing::info!("collection was empty; sample issues added");
        }
        Ok(seeded)
    }

    /// Startup seeding ahead of one event, when `general.seed_sample_data` is on.
    ///
    /// If the samples cannot be saved, an event that `saves` fails here. Other
    /// events log the failure and carry on with the samples held in memory.
    pub fn seed_before_event(&mut self, saves: bool) -> anyhow::Result<()> {
        if !self.config.general.seed_sample_data {
            return Ok(());
        }

        match self.seed_on_startup() {
            Ok(_) => Ok(()),
            Err(error) if saves => Err(error.context("failed to store sample issues")),
            Err(error) => {
                let reason = format!("{error:#}");
                tracing::warn!(error = %reason, "sample issues could not be saved; showing them from memory");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use civic_config::CivicConfig;
    use civic_store::MemorySlot;

    use super::AppContext;

    /// Context over an empty in-memory slot.
    pub fn memory_context() -> AppContext {
        AppContext::with_slot(CivicConfig::default(), Box::new(MemorySlot::default()))
    }

    /// Context over an in-memory slot already holding the sample issues.
    pub fn seeded_context() -> AppContext {
        let mut ctx = memory_context();
        ctx.seed_on_startup().expect("memory slot should accept samples");
        ctx
    }
}
