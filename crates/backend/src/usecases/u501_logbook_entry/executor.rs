use super::draft_store::DraftStore;
use crate::shared::collaborators::LogbookGateway;
use chrono::{DateTime, Utc};
use contracts::domain::a001_vessel::Vessel;
use contracts::domain::a002_logbook::LogbookId;
use contracts::domain::common::AggregateRoot;
use contracts::shared::WorkflowError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_logbook_entry::{LogbookDraft, LogbookEntry};
use std::sync::Arc;

/// Executor для UseCase ввода логбука оператором судна
pub struct LogbookEntryExecutor {
    gateway: Arc<dyn LogbookGateway>,
    drafts: Arc<DraftStore>,
}

impl LogbookEntryExecutor {
    pub fn new(gateway: Arc<dyn LogbookGateway>, drafts: Arc<DraftStore>) -> Self {
        Self { gateway, drafts }
    }

    /// Открыть черновик судна: сохранённый снимок или пустой бланк
    pub async fn open_draft(&self, vessel: &Vessel) -> LogbookDraft {
        match self.drafts.load(vessel.id()).await {
            Some(draft) => {
                tracing::debug!("Restored saved draft for {}", vessel.name);
                draft
            }
            None => LogbookDraft::new(vessel.id(), vessel.name.clone(), vessel.captain.clone()),
        }
    }

    /// Сохранить черновик; в очередь проверки ничего не попадает
    pub async fn save_draft(&self, draft: &mut LogbookDraft) -> DateTime<Utc> {
        let at = Utc::now();
        let snapshot = draft.save_draft(at);
        tracing::info!(
            "Draft saved for {}: {} entries, {} photos",
            snapshot.vessel_name(),
            snapshot.entry_count(),
            snapshot.photo_count()
        );
        self.drafts.save(snapshot).await;
        at
    }

    /// Отправить черновик в DKP
    ///
    /// Черновик очищается только после того, как шлюз принял логбук.
    pub async fn submit_draft(&self, draft: &mut LogbookDraft) -> Result<LogbookId, WorkflowError> {
        let submission = draft.to_submission()?;
        let vessel_id = submission.vessel_id;
        let total = submission.total_quantity();

        let id = self.gateway.submit_logbook(submission).await.map_err(|e| {
            tracing::error!("Logbook submission failed for {}: {}", draft.vessel_name(), e);
            WorkflowError::from(e)
        })?;

        draft.clear();
        self.drafts.remove(vessel_id).await;
        tracing::info!(
            "{}: logbook {} submitted, total catch {}",
            LogbookEntry::full_name(),
            id,
            total
        );
        Ok(id)
    }
}
