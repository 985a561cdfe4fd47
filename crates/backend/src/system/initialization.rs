use crate::dashboards::d400_catch_report::CatchReportService;
use crate::dashboards::d401_overview::OverviewService;
use crate::domain::a001_vessel::{VesselRepository, VesselService};
use crate::domain::a002_logbook::{LogbookRepository, LogbookReviewService};
use crate::shared::collaborators::{
    CsvReportExporter, InMemoryDecisionLog, InMemoryLogbookGateway,
};
use crate::shared::config::{get_export_dir, Config};
use crate::shared::data::fixtures;
use crate::usecases::u501_logbook_entry::{DraftStore, LogbookEntryExecutor};
use anyhow::Context;
use contracts::domain::a002_logbook::Logbook;
use std::sync::Arc;

/// Сервисы приложения и их внешние участники
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<InMemoryLogbookGateway>,
    pub decisions: Arc<InMemoryDecisionLog>,
    pub vessels: VesselService,
    pub review: LogbookReviewService,
    pub entry: LogbookEntryExecutor,
    pub reports: CatchReportService,
    pub overview: OverviewService,
}

impl AppState {
    /// Все логбуки, известные экрану проверки
    pub async fn logbooks(&self) -> Vec<Logbook> {
        self.review.list_all().await
    }
}

/// Собрать приложение и загрузить начальные данные
///
/// Утверждённые логбуки сразу попадают в хранилище проверки, очередь
/// `pending` забирается из шлюза.
pub async fn initialize_app(config: Config) -> anyhow::Result<AppState> {
    let vessels = fixtures::vessels().context("Failed to build vessel fixtures")?;
    let logbooks = fixtures::logbooks().context("Failed to build logbook fixtures")?;
    tracing::info!(
        "Seed data: {} vessels, {} logbooks",
        vessels.len(),
        logbooks.len()
    );

    let reviewed: Vec<Logbook> = logbooks.iter().filter(|l| !l.is_pending()).cloned().collect();
    let gateway = Arc::new(InMemoryLogbookGateway::with_logbooks(logbooks));
    let decisions = Arc::new(InMemoryDecisionLog::new());

    let review = LogbookReviewService::new(LogbookRepository::new(reviewed), decisions.clone());
    let imported = review
        .sync_pending(gateway.as_ref())
        .await
        .context("Failed to load pending logbooks")?;
    tracing::info!("Validation queue: {} logbooks", imported);

    let export_dir = get_export_dir(&config);
    tracing::info!("Export directory: {}", export_dir.display());

    let entry = LogbookEntryExecutor::new(gateway.clone(), Arc::new(DraftStore::new()));
    let reports = CatchReportService::new(
        Arc::new(CsvReportExporter::with_output_dir(export_dir)),
        config.report.thresholds(),
    );
    let overview = OverviewService::new(config.dashboard.recent_logbooks_limit);

    Ok(AppState {
        vessels: VesselService::new(VesselRepository::new(vessels)),
        gateway,
        decisions,
        review,
        entry,
        reports,
        overview,
        config,
    })
}
