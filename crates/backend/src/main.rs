pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;

use chrono::Utc;
use contracts::dashboards::d400_catch_report::{
    CatchReportRequest, ExportFormat, ReportPeriod, ReportType,
};
use contracts::dashboards::d401_overview::OverviewRequest;
use contracts::domain::a001_vessel::VesselId;
use contracts::domain::a002_logbook::{LogbookListQuery, LogbookStatus};
use contracts::enums::{CatchUnit, FishSpecies, FishingGear};
use contracts::system::navigation::{NavigationState, Role, ViewId};
use contracts::usecases::u501_logbook_entry::TripForm;
use shared::format::{format_percent, format_quantity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_file = system::tracing::initialize()?;
    tracing::info!("SiLog backend starting, log file: {}", log_file.display());

    let config = shared::config::load_config()?;
    let state = system::initialization::initialize_app(config).await?;

    // Навигация администратора
    let pending = state.review.pending_count().await;
    let nav = NavigationState::new(Role::Admin).select_view(ViewId::Validation)?;
    for item in nav.menu(pending) {
        tracing::info!(
            "Menu: {}{}{}",
            item.label,
            item.badge.map(|b| format!(" [{}]", b)).unwrap_or_default(),
            if item.active { " *" } else { "" }
        );
    }

    // Очередь проверки
    let queue = state
        .review
        .list(&LogbookListQuery::default().with_status(LogbookStatus::Pending))
        .await;
    for logbook in &queue {
        tracing::info!(
            "Pending: {} {} ({}), {} kg",
            logbook.vessel_name,
            logbook.trip,
            logbook.location.label(),
            format_quantity(logbook.total_quantity())
        );
    }

    // Оператор отправляет новый логбук
    let vessel = state.vessels.get_by_id(VesselId(1)).await?;
    let mut draft = state.entry.open_draft(&vessel).await;
    draft.set_trip(TripForm {
        departure_date: "2024-03-20".into(),
        return_date: "2024-03-24".into(),
        latitude: "-6.175".into(),
        longitude: "106.827".into(),
        fishing_ground: "Laut Jawa".into(),
    });
    draft.fill_catch_form(
        FishSpecies::from_code("tuna"),
        "210",
        CatchUnit::Kg,
        FishingGear::from_code("pancing_tonda"),
    );
    draft.add_catch_entry()?;
    let submitted = state.entry.submit_draft(&mut draft).await?;
    state.review.sync_pending(state.gateway.as_ref()).await?;
    tracing::info!("Submitted logbook {}", submitted);

    // Решения проверяющего
    state.review.approve(submitted).await?;
    if let Some(first) = queue.first() {
        state
            .review
            .request_revision(first.base.id, "Lengkapi foto hasil tangkapan")
            .await?;
    }
    let counts = state.review.status_counts().await;
    tracing::info!(
        "Validation: {} menunggu, {} disetujui, {} ditolak, {} perlu revisi",
        counts.pending,
        counts.approved,
        counts.rejected,
        counts.revision
    );

    // Сводка за месяц последнего рейса
    let logbooks = state.logbooks().await;
    let vessels = state.vessels.list_all().await;
    let anchor = logbooks
        .iter()
        .map(|l| l.trip.return_date)
        .max()
        .unwrap_or_else(|| Utc::now().date_naive());
    let overview = state.overview.get_overview(
        OverviewRequest::containing(anchor),
        &vessels,
        &logbooks,
    );
    tracing::info!(
        "Overview {}: {} logbooks ({}), catch {} kg, {} active vessels, {} pending",
        overview.period,
        overview.logbooks_this_month,
        overview
            .logbooks_change_pct
            .map(format_percent)
            .unwrap_or_else(|| "-".into()),
        format_quantity(overview.total_catch),
        overview.active_vessels,
        overview.pending_validation
    );
    tracing::debug!("Overview payload: {}", serde_json::to_string(&overview)?);

    // Отчёт за период по умолчанию
    let period = match state.config.report.default_period {
        ReportPeriod::Custom => ReportPeriod::Quarterly,
        period => period,
    };
    let request = CatchReportRequest::for_period(ReportType::Summary, period, anchor)?;
    let report = state.reports.get_report(&request, &logbooks)?;
    for share in &report.species {
        tracing::info!(
            "{}: {} kg ({})",
            share.species,
            format_quantity(share.quantity),
            format_percent(share.percentage)
        );
    }

    let by_vessel = CatchReportRequest::custom(ReportType::ByVessel, request.date_from, request.date_to)?;
    match state
        .reports
        .export(&by_vessel, ExportFormat::Excel, &logbooks)
        .await
    {
        Ok(file) => tracing::info!("Exported {} ({} bytes)", file.file_name, file.content.len()),
        Err(e) => tracing::warn!("Export skipped: {}", e),
    }

    tracing::info!(
        "Decisions recorded: {}",
        state.decisions.records().await.len()
    );
    Ok(())
}
