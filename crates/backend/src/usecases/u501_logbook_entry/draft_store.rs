use contracts::domain::a001_vessel::VesselId;
use contracts::usecases::u501_logbook_entry::LogbookDraft;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Сохранённые черновики ("Simpan Draft"), по одному на судно
#[derive(Debug, Default)]
pub struct DraftStore {
    drafts: RwLock<HashMap<VesselId, LogbookDraft>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сохранить снимок, заменив предыдущий черновик судна
    pub async fn save(&self, snapshot: LogbookDraft) {
        self.drafts
            .write()
            .await
            .insert(snapshot.vessel_id(), snapshot);
    }

    pub async fn load(&self, vessel_id: VesselId) -> Option<LogbookDraft> {
        self.drafts.read().await.get(&vessel_id).cloned()
    }

    pub async fn remove(&self, vessel_id: VesselId) -> bool {
        self.drafts.write().await.remove(&vessel_id).is_some()
    }
}
