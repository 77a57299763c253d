use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use tale_core::entry::EntryPatch;
use tale_core::ids::EntryId;
use tale_core::ports::EntryStorePort;

/// Use case for editing an existing journal entry.
pub struct UpdateEntry {
    store: Arc<dyn EntryStorePort>,
}

impl UpdateEntry {
    pub fn from_arc(store: Arc<dyn EntryStorePort>) -> Self {
        Self { store }
    }

    /// Normalizes the patch and applies it. Content may not become blank;
    /// a rejected update leaves the stored entry unchanged.
    #[tracing::instrument(
        name = "usecase.update_entry.execute",
        skip(self, patch),
        fields(entry_id = %id)
    )]
    pub async fn execute(&self, id: &EntryId, patch: EntryPatch) -> Result<()> {
        let patch = patch.validate()?;

        self.store
            .update(id, patch)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to update entry: {}", e))?;

        info!(entry_id = %id, "Journal entry updated");
        Ok(())
    }
}
