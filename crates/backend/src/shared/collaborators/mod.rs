//! Внешние участники процесса: приём логбуков, журнал решений, выгрузка отчётов

pub mod csv_exporter;
pub mod in_memory;

pub use csv_exporter::CsvReportExporter;
pub use in_memory::{InMemoryDecisionLog, InMemoryLogbookGateway};

use async_trait::async_trait;
use contracts::dashboards::d400_catch_report::{CatchReport, ExportFormat, ExportRequest};
use contracts::domain::a002_logbook::{Logbook, LogbookId, LogbookSubmission, ReviewDecision};
use contracts::shared::WorkflowError;
use std::path::PathBuf;
use thiserror::Error;

/// Ошибки внешних участников
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CollaboratorError> for WorkflowError {
    fn from(err: CollaboratorError) -> Self {
        WorkflowError::CollaboratorUnavailable(err.to_string())
    }
}

/// Приём отправленных логбуков и выдача очереди на проверку
#[async_trait]
pub trait LogbookGateway: Send + Sync {
    /// Принять логбук; идентификатор назначает шлюз
    async fn submit_logbook(
        &self,
        submission: LogbookSubmission,
    ) -> Result<LogbookId, CollaboratorError>;

    /// Логбуки в статусе `pending`
    async fn list_pending(&self) -> Result<Vec<Logbook>, CollaboratorError>;
}

/// Фиксация решений проверяющего
#[async_trait]
pub trait DecisionRecorder: Send + Sync {
    async fn record_decision(
        &self,
        id: LogbookId,
        decision: &ReviewDecision,
    ) -> Result<(), CollaboratorError>;
}

/// Готовый файл выгрузки
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: Vec<u8>,
    /// Путь на диске, если файл был записан
    pub path: Option<PathBuf>,
}

/// Выгрузка отчёта в документ
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export_report(
        &self,
        request: &ExportRequest,
        report: &CatchReport,
    ) -> Result<ExportedFile, CollaboratorError>;
}
