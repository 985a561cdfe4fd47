use crate::shared::collaborators::{ExportedFile, ReportExporter};
use chrono::Datelike;
use contracts::dashboards::d400_catch_report::{
    CatchReport, CatchReportRequest, EfficiencyThresholds, ExportFormat, ExportRequest,
    LogbookRow, MonthlyPoint, ReportType, SpeciesShare, VesselPerformance,
};
use contracts::domain::a001_vessel::VesselId;
use contracts::domain::a002_logbook::Logbook;
use contracts::enums::FishSpecies;
use contracts::shared::WorkflowError;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the catch report from logbooks
///
/// Pure read: logbooks are not modified, the result depends only on the inputs.
/// Weights are in kg; tons are converted and per-piece entries are totalled separately.
pub fn build_report(
    request: &CatchReportRequest,
    logbooks: &[Logbook],
    thresholds: &EfficiencyThresholds,
) -> Result<CatchReport, WorkflowError> {
    request.validate()?;

    let included: Vec<&Logbook> = logbooks
        .iter()
        .filter(|l| request.report_type.includes(l.status))
        .filter(|l| request.contains(l.trip.return_date))
        .collect();

    let total_quantity: f64 = included.iter().map(|l| l.weight_kg()).sum();
    let total_count: f64 = included.iter().map(|l| l.count_total()).sum();
    let trip_count = included.len();
    let active_vessels = included
        .iter()
        .map(|l| l.vessel_id)
        .collect::<HashSet<_>>()
        .len();
    let avg_per_trip = if trip_count == 0 {
        0.0
    } else {
        total_quantity / trip_count as f64
    };

    let rows = if request.report_type == ReportType::Detailed {
        included.iter().map(|l| LogbookRow::from(*l)).collect()
    } else {
        Vec::new()
    };

    Ok(CatchReport {
        request: request.clone(),
        total_quantity,
        total_count,
        trip_count,
        active_vessels,
        avg_per_trip: round1(avg_per_trip),
        species: species_shares(&included),
        vessels: vessel_performance(&included, thresholds),
        monthly: monthly_series(&included),
        rows,
    })
}

/// Per-species weight in kg, largest first
pub fn species_shares(logbooks: &[&Logbook]) -> Vec<SpeciesShare> {
    let mut totals: HashMap<FishSpecies, f64> = HashMap::new();
    for logbook in logbooks {
        for entry in &logbook.entries {
            if let Some(kg) = entry.weight_kg() {
                *totals.entry(entry.species).or_insert(0.0) += kg;
            }
        }
    }
    let grand_total: f64 = totals.values().sum();

    let mut shares: Vec<SpeciesShare> = totals
        .into_iter()
        .map(|(species, quantity)| SpeciesShare {
            species,
            quantity,
            percentage: if grand_total > 0.0 {
                round1(quantity / grand_total * 100.0)
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| {
        b.quantity
            .total_cmp(&a.quantity)
            .then_with(|| a.species.cmp(&b.species))
    });
    shares
}

fn vessel_performance(
    logbooks: &[&Logbook],
    thresholds: &EfficiencyThresholds,
) -> Vec<VesselPerformance> {
    // vessel_id -> (name, trips, total)
    let mut by_vessel: HashMap<VesselId, (String, usize, f64)> = HashMap::new();
    for logbook in logbooks {
        let slot = by_vessel
            .entry(logbook.vessel_id)
            .or_insert_with(|| (logbook.vessel_name.clone(), 0, 0.0));
        slot.1 += 1;
        slot.2 += logbook.weight_kg();
    }

    let mut rows: Vec<(VesselId, String, usize, f64, f64)> = by_vessel
        .into_iter()
        .map(|(id, (name, trips, total))| (id, name, trips, total, total / trips as f64))
        .collect();
    rows.sort_by(|a, b| b.4.total_cmp(&a.4).then_with(|| a.1.cmp(&b.1)));

    rows.into_iter()
        .enumerate()
        .map(|(i, (vessel_id, vessel_name, trips, total, avg))| VesselPerformance {
            rank: i + 1,
            vessel_id,
            vessel_name,
            trips,
            total_quantity: total,
            avg_per_trip: round1(avg),
            efficiency: thresholds.classify(avg),
        })
        .collect()
}

fn monthly_series(logbooks: &[&Logbook]) -> Vec<MonthlyPoint> {
    // (year, month) -> (total, vessels, trips)
    let mut by_month: BTreeMap<(i32, u32), (f64, HashSet<VesselId>, usize)> = BTreeMap::new();
    for logbook in logbooks {
        let date = logbook.trip.return_date;
        let slot = by_month
            .entry((date.year(), date.month()))
            .or_insert_with(|| (0.0, HashSet::new(), 0));
        slot.0 += logbook.weight_kg();
        slot.1.insert(logbook.vessel_id);
        slot.2 += 1;
    }

    by_month
        .into_iter()
        .map(|((year, month), (total, vessels, trips))| MonthlyPoint {
            period: format!("{:04}-{:02}", year, month),
            total_quantity: total,
            vessels: vessels.len(),
            trips,
        })
        .collect()
}

/// Report screen: aggregation with configured thresholds and export
pub struct CatchReportService {
    exporter: Arc<dyn ReportExporter>,
    thresholds: EfficiencyThresholds,
}

impl CatchReportService {
    pub fn new(exporter: Arc<dyn ReportExporter>, thresholds: EfficiencyThresholds) -> Self {
        Self {
            exporter,
            thresholds,
        }
    }

    pub fn get_report(
        &self,
        request: &CatchReportRequest,
        logbooks: &[Logbook],
    ) -> Result<CatchReport, WorkflowError> {
        let report = build_report(request, logbooks, &self.thresholds)?;
        tracing::info!(
            "Report {} {}..{}: {} trips, {} vessels, total {:.1}",
            request.report_type.code(),
            request.date_from,
            request.date_to,
            report.trip_count,
            report.active_vessels,
            report.total_quantity
        );
        Ok(report)
    }

    /// Build the report and hand it to the exporter
    pub async fn export(
        &self,
        request: &CatchReportRequest,
        format: ExportFormat,
        logbooks: &[Logbook],
    ) -> Result<ExportedFile, WorkflowError> {
        let report = self.get_report(request, logbooks)?;
        let export_request = ExportRequest {
            report_type: request.report_type,
            date_from: request.date_from,
            date_to: request.date_to,
            format,
        };
        self.exporter
            .export_report(&export_request, &report)
            .await
            .map_err(|e| {
                tracing::error!("Export as {} failed: {}", format.code(), e);
                WorkflowError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collaborators::csv_exporter::render_csv;
    use crate::shared::collaborators::CsvReportExporter;
    use crate::shared::data::fixtures;
    use chrono::NaiveDate;
    use contracts::dashboards::d400_catch_report::{Efficiency, ReportPeriod};
    use contracts::domain::a002_logbook::{CatchEntry, LogbookStatus};
    use contracts::enums::CatchUnit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn q1(report_type: ReportType) -> CatchReportRequest {
        CatchReportRequest::for_period(report_type, ReportPeriod::Quarterly, date(2024, 2, 1)).unwrap()
    }

    #[test]
    fn test_summary_counts_approved_only() {
        let logbooks = fixtures::logbooks().unwrap();
        let report =
            build_report(&q1(ReportType::Summary), &logbooks, &EfficiencyThresholds::default()).unwrap();

        // approved: 3200 + 160 + 120
        assert_eq!(report.total_quantity, 3480.0);
        assert_eq!(report.trip_count, 3);
        assert_eq!(report.active_vessels, 3);
        assert_eq!(report.avg_per_trip, 1160.0);
        assert!(report.rows.is_empty());

        let months: Vec<&str> = report.monthly.iter().map(|m| m.period.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(report.monthly[2].total_quantity, 3200.0);
    }

    #[test]
    fn test_species_shares_sum_to_hundred() {
        let logbooks = fixtures::logbooks().unwrap();
        let report =
            build_report(&q1(ReportType::BySpecies), &logbooks, &EfficiencyThresholds::default()).unwrap();
        assert_eq!(report.species[0].species, FishSpecies::Tongkol);
        assert_eq!(report.species[0].quantity, 1800.0);
        let sum: f64 = report.species.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1 * report.species.len() as f64);
    }

    #[test]
    fn test_detailed_includes_every_status() {
        let logbooks = fixtures::logbooks().unwrap();
        let report =
            build_report(&q1(ReportType::Detailed), &logbooks, &EfficiencyThresholds::default()).unwrap();
        assert_eq!(report.trip_count, 6);
        assert_eq!(report.rows.len(), 6);
        assert!(report.rows.iter().any(|r| r.status == LogbookStatus::Pending));
        assert_eq!(report.rows[0].code, "LB-0001");
        assert_eq!(report.rows[0].trip, "2024-03-10 - 2024-03-15");
    }

    #[test]
    fn test_vessel_ranking_and_efficiency() {
        let logbooks = fixtures::logbooks().unwrap();
        let thresholds = EfficiencyThresholds {
            high: 1000.0,
            medium: 150.0,
        };
        let report = build_report(&q1(ReportType::ByVessel), &logbooks, &thresholds).unwrap();
        let ranked: Vec<(usize, &str, Efficiency)> = report
            .vessels
            .iter()
            .map(|v| (v.rank, v.vessel_name.as_str(), v.efficiency))
            .collect();
        assert_eq!(
            ranked,
            vec![
                (1, "Nelayan Maju", Efficiency::High),
                (2, "Bahari Jaya I", Efficiency::Medium),
                (3, "Samudra Indah", Efficiency::Low),
            ]
        );
    }

    #[test]
    fn test_empty_period() {
        let logbooks = fixtures::logbooks().unwrap();
        let request =
            CatchReportRequest::custom(ReportType::Summary, date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        let report = build_report(&request, &logbooks, &EfficiencyThresholds::default()).unwrap();
        assert_eq!(report.total_quantity, 0.0);
        assert_eq!(report.trip_count, 0);
        assert_eq!(report.avg_per_trip, 0.0);
        assert!(report.species.is_empty());
        assert!(report.vessels.is_empty());
    }

    #[test]
    fn test_tons_are_converted_and_pieces_kept_apart() {
        let mut logbook = fixtures::logbooks().unwrap().remove(3);
        logbook.entries = vec![
            CatchEntry::new(FishSpecies::Tuna, 2.0, CatchUnit::Ton, None).unwrap(),
            CatchEntry::new(FishSpecies::Kembung, 50.0, CatchUnit::Count, None).unwrap(),
        ];
        let logbooks = vec![logbook];

        let report =
            build_report(&q1(ReportType::ByVessel), &logbooks, &EfficiencyThresholds::default()).unwrap();
        assert_eq!(report.total_quantity, 2000.0);
        assert_eq!(report.total_count, 50.0);
        assert_eq!(report.avg_per_trip, 2000.0);
        assert_eq!(report.species.len(), 1);
        assert_eq!(report.species[0].quantity, 2000.0);
        assert_eq!(report.species[0].percentage, 100.0);
        assert_eq!(report.vessels[0].total_quantity, 2000.0);
        assert_eq!(report.vessels[0].efficiency, Efficiency::High);
        assert_eq!(report.monthly[0].total_quantity, 2000.0);

        let csv = String::from_utf8(render_csv(ReportType::ByVessel, &report).unwrap()).unwrap();
        assert!(csv.contains("1,Nelayan Maju,1,2000.0,2000.0,Tinggi"));
    }

    #[test]
    fn test_report_does_not_modify_logbooks() {
        let logbooks = fixtures::logbooks().unwrap();
        let before = logbooks.clone();
        build_report(&q1(ReportType::Detailed), &logbooks, &EfficiencyThresholds::default()).unwrap();
        assert_eq!(logbooks, before);
    }

    #[tokio::test]
    async fn test_export_through_collaborator() {
        let service = CatchReportService::new(
            Arc::new(CsvReportExporter::new()),
            EfficiencyThresholds::default(),
        );
        let logbooks = fixtures::logbooks().unwrap();
        let file = service
            .export(&q1(ReportType::ByVessel), ExportFormat::Excel, &logbooks)
            .await
            .unwrap();
        assert_eq!(file.file_name, "laporan_by_vessel_2024-01-01_2024-03-31.csv");

        let err = service
            .export(&q1(ReportType::ByVessel), ExportFormat::Pdf, &logbooks)
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::CollaboratorUnavailable(_)));
    }
}
