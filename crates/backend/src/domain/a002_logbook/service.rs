use super::repository::LogbookRepository;
use crate::shared::collaborators::{DecisionRecorder, LogbookGateway};
use chrono::{DateTime, Utc};
use contracts::domain::a002_logbook::{
    filter_logbooks, Logbook, LogbookId, LogbookListQuery, LogbookStatus, ReviewDecision,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::WorkflowError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Счётчики карточек над очередью проверки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogbookStatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub revision: usize,
}

/// Проверка логбуков в DKP: утверждение, отклонение, возврат на доработку
///
/// Переход выполняется над копией; решение передаётся в журнал решений,
/// и только после его подтверждения копия сохраняется.
pub struct LogbookReviewService {
    repository: LogbookRepository,
    recorder: Arc<dyn DecisionRecorder>,
    decision_lock: Mutex<()>,
}

impl LogbookReviewService {
    pub fn new(repository: LogbookRepository, recorder: Arc<dyn DecisionRecorder>) -> Self {
        Self {
            repository,
            recorder,
            decision_lock: Mutex::new(()),
        }
    }

    pub async fn approve(&self, id: LogbookId) -> Result<Logbook, WorkflowError> {
        self.decide(id, |logbook, at| logbook.approve(at)).await
    }

    pub async fn reject(&self, id: LogbookId, reason: &str) -> Result<Logbook, WorkflowError> {
        self.decide(id, |logbook, at| logbook.reject(reason, at))
            .await
    }

    pub async fn request_revision(
        &self,
        id: LogbookId,
        notes: &str,
    ) -> Result<Logbook, WorkflowError> {
        self.decide(id, |logbook, at| logbook.request_revision(notes, at))
            .await
    }

    async fn decide<F>(&self, id: LogbookId, transition: F) -> Result<Logbook, WorkflowError>
    where
        F: FnOnce(&mut Logbook, DateTime<Utc>) -> Result<ReviewDecision, WorkflowError>,
    {
        let _guard = self.decision_lock.lock().await;

        let mut logbook = self
            .repository
            .get_by_id(id)
            .await
            .ok_or_else(|| WorkflowError::not_found("logbook", id))?;

        let decision = match transition(&mut logbook, Utc::now()) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!("Decision on {} rejected: {}", logbook.code(), e);
                return Err(e);
            }
        };

        if let Err(e) = self.recorder.record_decision(id, &decision).await {
            tracing::error!("Failed to record decision for {}: {}", logbook.code(), e);
            return Err(e.into());
        }

        if !self.repository.update(logbook.clone()).await {
            return Err(WorkflowError::not_found("logbook", id));
        }
        tracing::info!("Logbook {} -> {}", logbook.code(), logbook.status);
        Ok(logbook)
    }

    /// Список с фильтром по строке поиска и статусу
    pub async fn list(&self, query: &LogbookListQuery) -> Vec<Logbook> {
        let logbooks = self.repository.list_all().await;
        filter_logbooks(&logbooks, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn list_all(&self) -> Vec<Logbook> {
        self.repository.list_all().await
    }

    pub async fn get(&self, id: LogbookId) -> Result<Logbook, WorkflowError> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or_else(|| WorkflowError::not_found("logbook", id))
    }

    pub async fn pending_count(&self) -> usize {
        self.repository
            .list_all()
            .await
            .iter()
            .filter(|l| l.is_pending())
            .count()
    }

    pub async fn status_counts(&self) -> LogbookStatusCounts {
        let mut counts = LogbookStatusCounts::default();
        for logbook in self.repository.list_all().await {
            match logbook.status {
                LogbookStatus::Pending => counts.pending += 1,
                LogbookStatus::Approved => counts.approved += 1,
                LogbookStatus::Rejected => counts.rejected += 1,
                LogbookStatus::Revision => counts.revision += 1,
            }
        }
        counts
    }

    /// Забрать из шлюза ещё неизвестные логбуки очереди проверки
    ///
    /// Шлюз решений не видит и продолжает отдавать рассмотренные логбуки
    /// как `pending`. Уже известные id пропускаются, поэтому локальный
    /// статус после решения не перезаписывается.
    pub async fn sync_pending(&self, gateway: &dyn LogbookGateway) -> Result<usize, WorkflowError> {
        let pending = gateway.list_pending().await.map_err(|e| {
            tracing::error!("Failed to fetch pending logbooks: {}", e);
            WorkflowError::from(e)
        })?;
        let imported = self.repository.insert_missing(pending).await;
        if imported > 0 {
            tracing::info!("Imported {} pending logbooks", imported);
        }
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collaborators::{InMemoryDecisionLog, InMemoryLogbookGateway};
    use crate::shared::data::fixtures;

    fn service() -> (LogbookReviewService, Arc<InMemoryDecisionLog>) {
        let log = Arc::new(InMemoryDecisionLog::new());
        let repository = LogbookRepository::new(fixtures::pending_logbooks().unwrap());
        (LogbookReviewService::new(repository, log.clone()), log)
    }

    #[tokio::test]
    async fn test_approve_pending_logbook() {
        let (service, log) = service();
        let logbook = service.approve(LogbookId(1)).await.unwrap();
        assert_eq!(logbook.status, LogbookStatus::Approved);
        assert!(logbook.reviewed_at.is_some());
        assert_eq!(service.get(LogbookId(1)).await.unwrap().status, LogbookStatus::Approved);
        assert_eq!(service.pending_count().await, 2);
        assert_eq!(log.records().await[0].decision, ReviewDecision::Approved);
    }

    #[tokio::test]
    async fn test_second_decision_is_invalid_transition() {
        let (service, log) = service();
        service.approve(LogbookId(1)).await.unwrap();
        let err = service.reject(LogbookId(1), "late").await.unwrap_err();
        assert_eq!(
            err,
            WorkflowError::InvalidStateTransition {
                from: "approved".into(),
                to: "rejected".into(),
            }
        );
        assert_eq!(service.get(LogbookId(1)).await.unwrap().status, LogbookStatus::Approved);
        assert_eq!(log.records().await.len(), 1);
    }

    #[tokio::test]
    async fn test_reject_requires_reason() {
        let (service, log) = service();
        let err = service.reject(LogbookId(2), "   ").await.unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidInput(_)));
        let logbook = service.get(LogbookId(2)).await.unwrap();
        assert_eq!(logbook.status, LogbookStatus::Pending);
        assert!(logbook.rejection_reason.is_none());
        assert!(log.records().await.is_empty());

        let logbook = service
            .reject(LogbookId(2), "  Foto tidak jelas ")
            .await
            .unwrap();
        assert_eq!(logbook.rejection_reason.as_deref(), Some("Foto tidak jelas"));
        assert_eq!(
            log.records().await[0].decision,
            ReviewDecision::Rejected {
                reason: "Foto tidak jelas".into()
            }
        );
    }

    #[tokio::test]
    async fn test_request_revision_stores_notes() {
        let (service, _) = service();
        let logbook = service
            .request_revision(LogbookId(3), "Lengkapi koordinat")
            .await
            .unwrap();
        assert_eq!(logbook.status, LogbookStatus::Revision);
        assert_eq!(logbook.revision_notes.as_deref(), Some("Lengkapi koordinat"));
        assert!(logbook.rejection_reason.is_none());
    }

    #[tokio::test]
    async fn test_status_counts_follow_decisions() {
        let (service, _) = service();
        assert_eq!(
            service.status_counts().await,
            LogbookStatusCounts {
                pending: 3,
                ..Default::default()
            }
        );

        service.approve(LogbookId(1)).await.unwrap();
        service.reject(LogbookId(2), "Foto tidak jelas").await.unwrap();
        service
            .request_revision(LogbookId(3), "Lengkapi koordinat")
            .await
            .unwrap();
        assert_eq!(
            service.status_counts().await,
            LogbookStatusCounts {
                pending: 0,
                approved: 1,
                rejected: 1,
                revision: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_logbook() {
        let (service, _) = service();
        let err = service.approve(LogbookId(42)).await.unwrap_err();
        assert_eq!(err, WorkflowError::not_found("logbook", 42));
    }

    #[tokio::test]
    async fn test_recorder_failure_keeps_status() {
        let (service, log) = service();
        log.set_available(false);
        let err = service.approve(LogbookId(1)).await.unwrap_err();
        assert!(matches!(err, WorkflowError::CollaboratorUnavailable(_)));
        assert_eq!(service.get(LogbookId(1)).await.unwrap().status, LogbookStatus::Pending);

        log.set_available(true);
        service.approve(LogbookId(1)).await.unwrap();
        assert_eq!(service.pending_count().await, 2);
    }

    #[tokio::test]
    async fn test_list_filters_commute() {
        let (service, _) = service();
        service.approve(LogbookId(1)).await.unwrap();
        let query = LogbookListQuery::default()
            .with_search("JAYA")
            .with_status(LogbookStatus::Pending);
        let codes: Vec<String> = service
            .list(&query)
            .await
            .iter()
            .map(|l| l.code().to_string())
            .collect();
        // "Agus Wijaya" тоже содержит "jaya"
        assert_eq!(codes, vec!["LB-0002", "LB-0003"]);
        assert_eq!(service.list(&LogbookListQuery::default()).await.len(), 3);
    }

    #[tokio::test]
    async fn test_sync_pending_imports_new_logbooks_once() {
        let log = Arc::new(InMemoryDecisionLog::new());
        let service = LogbookReviewService::new(LogbookRepository::default(), log);
        let gateway = InMemoryLogbookGateway::with_logbooks(fixtures::logbooks().unwrap());

        assert_eq!(service.sync_pending(&gateway).await.unwrap(), 3);
        assert_eq!(service.sync_pending(&gateway).await.unwrap(), 0);

        let id = gateway
            .submit_logbook(fixtures::sample_submission().unwrap())
            .await
            .unwrap();
        assert_eq!(id, LogbookId(7));
        assert_eq!(service.sync_pending(&gateway).await.unwrap(), 1);
        assert_eq!(service.pending_count().await, 4);

        gateway.set_available(false);
        let err = service.sync_pending(&gateway).await.unwrap_err();
        assert!(matches!(err, WorkflowError::CollaboratorUnavailable(_)));
    }

    #[tokio::test]
    async fn test_sync_does_not_reopen_decided_logbook() {
        let log = Arc::new(InMemoryDecisionLog::new());
        let service = LogbookReviewService::new(LogbookRepository::default(), log);
        let gateway = InMemoryLogbookGateway::with_logbooks(fixtures::logbooks().unwrap());
        service.sync_pending(&gateway).await.unwrap();

        service.approve(LogbookId(1)).await.unwrap();
        assert_eq!(gateway.list_pending().await.unwrap().len(), 3);
        assert_eq!(service.sync_pending(&gateway).await.unwrap(), 0);
        assert_eq!(service.get(LogbookId(1)).await.unwrap().status, LogbookStatus::Approved);
        assert_eq!(service.status_counts().await.pending, 2);

        gateway.set_available(false);
        let err = service.sync_pending(&gateway).await.unwrap_err();
        assert!(matches!(err, WorkflowError::CollaboratorUnavailable(_)));
    }
}
