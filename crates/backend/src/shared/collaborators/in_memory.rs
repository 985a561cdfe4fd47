use super::{CollaboratorError, DecisionRecorder, LogbookGateway};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::domain::a002_logbook::{Logbook, LogbookId, LogbookSubmission, ReviewDecision};
use contracts::domain::common::{AggregateId, AggregateRoot};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct GatewayState {
    last_id: Option<LogbookId>,
    logbooks: Vec<Logbook>,
}

/// Шлюз приёма логбуков в памяти процесса
#[derive(Debug)]
pub struct InMemoryLogbookGateway {
    state: Mutex<GatewayState>,
    available: AtomicBool,
}

impl Default for InMemoryLogbookGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogbookGateway {
    pub fn new() -> Self {
        Self::with_logbooks(Vec::new())
    }

    /// Шлюз с уже принятыми логбуками; новые id продолжают нумерацию
    pub fn with_logbooks(logbooks: Vec<Logbook>) -> Self {
        let last_id = logbooks.iter().map(|l| l.id()).max();
        Self {
            state: Mutex::new(GatewayState { last_id, logbooks }),
            available: AtomicBool::new(true),
        }
    }

    /// Имитация отказа: при `false` все вызовы возвращают `Unavailable`
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn received(&self) -> Vec<Logbook> {
        self.state.lock().await.logbooks.clone()
    }

    fn ensure_available(&self) -> Result<(), CollaboratorError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CollaboratorError::Unavailable("logbook gateway is offline".into()))
        }
    }
}

#[async_trait]
impl LogbookGateway for InMemoryLogbookGateway {
    async fn submit_logbook(
        &self,
        submission: LogbookSubmission,
    ) -> Result<LogbookId, CollaboratorError> {
        self.ensure_available()?;
        let mut state = self.state.lock().await;
        let id = state
            .last_id
            .map(|id| id.next())
            .unwrap_or(LogbookId(1));
        let logbook = Logbook::from_submission(id, submission, Utc::now());
        tracing::info!(
            "Logbook {} received from {}: {} entries",
            logbook.code(),
            logbook.vessel_name,
            logbook.entries.len()
        );
        state.logbooks.push(logbook);
        state.last_id = Some(id);
        Ok(id)
    }

    async fn list_pending(&self) -> Result<Vec<Logbook>, CollaboratorError> {
        self.ensure_available()?;
        let state = self.state.lock().await;
        Ok(state
            .logbooks
            .iter()
            .filter(|l| l.is_pending())
            .cloned()
            .collect())
    }
}

/// Запись журнала решений
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRecord {
    pub logbook_id: LogbookId,
    pub decision: ReviewDecision,
    pub recorded_at: DateTime<Utc>,
}

/// Журнал решений в памяти процесса
#[derive(Debug)]
pub struct InMemoryDecisionLog {
    records: Mutex<Vec<DecisionRecord>>,
    available: AtomicBool,
}

impl Default for InMemoryDecisionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDecisionLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn records(&self) -> Vec<DecisionRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl DecisionRecorder for InMemoryDecisionLog {
    async fn record_decision(
        &self,
        id: LogbookId,
        decision: &ReviewDecision,
    ) -> Result<(), CollaboratorError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(CollaboratorError::Unavailable("decision log is offline".into()));
        }
        self.records.lock().await.push(DecisionRecord {
            logbook_id: id,
            decision: decision.clone(),
            recorded_at: Utc::now(),
        });
        tracing::debug!("Decision {:?} recorded for logbook {}", decision.target_status(), id);
        Ok(())
    }
}
