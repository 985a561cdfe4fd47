use crate::domain::a001_vessel::VesselId;
use crate::domain::a002_logbook::{Logbook, LogbookStatus};
use crate::domain::common::AggregateRoot;
use crate::enums::FishSpecies;
use crate::shared::WorkflowError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Report layout selected on the "Laporan & Export" screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Summary,
    /// Every logbook of the period regardless of review status
    Detailed,
    ByVessel,
    BySpecies,
}

impl ReportType {
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::Detailed => "detailed",
            ReportType::ByVessel => "by_vessel",
            ReportType::BySpecies => "by_species",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::Summary => "Ringkasan",
            ReportType::Detailed => "Detail Lengkap",
            ReportType::ByVessel => "Per Kapal",
            ReportType::BySpecies => "Per Jenis Ikan",
        }
    }

    /// Whether a logbook with this status is counted in the report
    pub fn includes(&self, status: LogbookStatus) -> bool {
        match self {
            ReportType::Detailed => true,
            _ => status == LogbookStatus::Approved,
        }
    }
}

/// Reporting period preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Monthly,
    Quarterly,
    Yearly,
    Custom,
}

impl ReportPeriod {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "monthly" => Some(ReportPeriod::Monthly),
            "quarterly" => Some(ReportPeriod::Quarterly),
            "yearly" => Some(ReportPeriod::Yearly),
            "custom" => Some(ReportPeriod::Custom),
            _ => None,
        }
    }

    /// Date range of the preset containing `anchor`; `None` for custom
    pub fn date_range(&self, anchor: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let year = anchor.year();
        let (first_month, last_month) = match self {
            ReportPeriod::Monthly => (anchor.month(), anchor.month()),
            ReportPeriod::Quarterly => {
                let first = (anchor.month0() / 3) * 3 + 1;
                (first, first + 2)
            }
            ReportPeriod::Yearly => (1, 12),
            ReportPeriod::Custom => return None,
        };
        let from = NaiveDate::from_ymd_opt(year, first_month, 1)?;
        let to = last_day_of_month(year, last_month)?;
        Some((from, to))
    }
}

/// Calculate the last day of a month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Export document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn code(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }
}

/// Request for the catch report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchReportRequest {
    pub report_type: ReportType,
    pub period: ReportPeriod,
    /// Inclusive, compared with the trip return date
    pub date_from: NaiveDate,
    /// Inclusive
    pub date_to: NaiveDate,
}

impl CatchReportRequest {
    /// Request for a preset period around `anchor`
    pub fn for_period(
        report_type: ReportType,
        period: ReportPeriod,
        anchor: NaiveDate,
    ) -> Result<Self, WorkflowError> {
        let (date_from, date_to) = period.date_range(anchor).ok_or_else(|| {
            WorkflowError::invalid_input("custom period requires an explicit date range")
        })?;
        Ok(Self {
            report_type,
            period,
            date_from,
            date_to,
        })
    }

    /// Request for an explicit date range
    pub fn custom(
        report_type: ReportType,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Self, WorkflowError> {
        let request = Self {
            report_type,
            period: ReportPeriod::Custom,
            date_from,
            date_to,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.date_to < self.date_from {
            return Err(WorkflowError::invalid_input(
                "report end date must not be earlier than start date",
            ));
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.date_from && date <= self.date_to
    }
}

/// Efficiency label of a vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Efficiency {
    High,
    Medium,
    Low,
}

impl Efficiency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Efficiency::High => "Tinggi",
            Efficiency::Medium => "Sedang",
            Efficiency::Low => "Rendah",
        }
    }
}

/// Average-catch-per-trip thresholds for efficiency labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyThresholds {
    /// avg >= high → High
    pub high: f64,
    /// avg >= medium → Medium, otherwise Low
    pub medium: f64,
}

impl Default for EfficiencyThresholds {
    fn default() -> Self {
        Self {
            high: 130.0,
            medium: 110.0,
        }
    }
}

impl EfficiencyThresholds {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if !self.high.is_finite() || !self.medium.is_finite() || self.medium > self.high {
            return Err(WorkflowError::invalid_input(
                "efficiency thresholds must be finite with medium <= high",
            ));
        }
        Ok(())
    }

    pub fn classify(&self, avg_per_trip: f64) -> Efficiency {
        if avg_per_trip >= self.high {
            Efficiency::High
        } else if avg_per_trip >= self.medium {
            Efficiency::Medium
        } else {
            Efficiency::Low
        }
    }
}

/// Total and share of one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesShare {
    pub species: FishSpecies,
    /// Weight in kg
    pub quantity: f64,
    /// Percentage of the report total, one decimal
    pub percentage: f64,
}

/// Performance row of one vessel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselPerformance {
    /// 1-based, by average catch per trip descending
    pub rank: usize,
    pub vessel_id: VesselId,
    pub vessel_name: String,
    pub trips: usize,
    /// Weight in kg
    pub total_quantity: f64,
    pub avg_per_trip: f64,
    pub efficiency: Efficiency,
}

/// One point of the monthly trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Period in format "YYYY-MM"
    pub period: String,
    /// Weight in kg
    pub total_quantity: f64,
    pub vessels: usize,
    pub trips: usize,
}

/// Flat logbook row for tables and exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookRow {
    pub code: String,
    pub vessel_name: String,
    pub captain: String,
    /// "YYYY-MM-DD - YYYY-MM-DD"
    pub trip: String,
    pub location: String,
    /// Weight in kg, ton entries converted
    pub total_quantity: f64,
    /// Catch recorded per piece ("ekor")
    pub total_count: f64,
    pub species: Vec<FishSpecies>,
    pub status: LogbookStatus,
}

impl From<&Logbook> for LogbookRow {
    fn from(logbook: &Logbook) -> Self {
        Self {
            code: logbook.code().to_string(),
            vessel_name: logbook.vessel_name.clone(),
            captain: logbook.captain.clone(),
            trip: logbook.trip.to_string(),
            location: logbook.location.label(),
            total_quantity: logbook.weight_kg(),
            total_count: logbook.count_total(),
            species: logbook.species(),
            status: logbook.status,
        }
    }
}

/// Response of the catch report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchReport {
    pub request: CatchReportRequest,
    /// Weight in kg. Entries counted per piece are kept out of every weight total.
    pub total_quantity: f64,
    /// Catch recorded per piece ("ekor")
    pub total_count: f64,
    pub trip_count: usize,
    /// Distinct vessels with at least one counted trip
    pub active_vessels: usize,
    /// total / trips, 0 when there are no trips
    pub avg_per_trip: f64,
    /// Sorted by quantity descending
    pub species: Vec<SpeciesShare>,
    pub vessels: Vec<VesselPerformance>,
    pub monthly: Vec<MonthlyPoint>,
    /// Filled for `ReportType::Detailed` only
    pub rows: Vec<LogbookRow>,
}

/// Request passed to the export collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub report_type: ReportType,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub format: ExportFormat,
}

impl ExportRequest {
    /// File name like "laporan_summary_2024-01-01_2024-03-31.xlsx"
    pub fn file_stem(&self) -> String {
        format!(
            "laporan_{}_{}_{}",
            self.report_type.code(),
            self.date_from,
            self.date_to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_ranges() {
        let anchor = date(2024, 2, 14);
        assert_eq!(
            ReportPeriod::Monthly.date_range(anchor),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            ReportPeriod::Quarterly.date_range(anchor),
            Some((date(2024, 1, 1), date(2024, 3, 31)))
        );
        assert_eq!(
            ReportPeriod::Quarterly.date_range(date(2024, 12, 5)),
            Some((date(2024, 10, 1), date(2024, 12, 31)))
        );
        assert_eq!(
            ReportPeriod::Yearly.date_range(anchor),
            Some((date(2024, 1, 1), date(2024, 12, 31)))
        );
        assert_eq!(ReportPeriod::Custom.date_range(anchor), None);
    }

    #[test]
    fn test_custom_request_validates_order() {
        assert!(CatchReportRequest::custom(ReportType::Summary, date(2024, 3, 31), date(2024, 1, 1)).is_err());
        let request =
            CatchReportRequest::custom(ReportType::Summary, date(2024, 1, 1), date(2024, 3, 31)).unwrap();
        assert!(request.contains(date(2024, 3, 31)));
        assert!(!request.contains(date(2024, 4, 1)));
        assert!(CatchReportRequest::for_period(ReportType::Summary, ReportPeriod::Custom, date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_efficiency_thresholds() {
        let thresholds = EfficiencyThresholds::default();
        assert_eq!(thresholds.classify(133.3), Efficiency::High);
        assert_eq!(thresholds.classify(130.0), Efficiency::High);
        assert_eq!(thresholds.classify(116.7), Efficiency::Medium);
        assert_eq!(thresholds.classify(100.0), Efficiency::Low);

        let tuned = EfficiencyThresholds {
            high: 120.0,
            medium: 100.0,
        };
        assert_eq!(tuned.classify(122.6), Efficiency::High);
        assert_eq!(tuned.classify(100.0), Efficiency::Medium);

        let broken = EfficiencyThresholds {
            high: 100.0,
            medium: 110.0,
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_report_type_inclusion() {
        assert!(ReportType::Summary.includes(LogbookStatus::Approved));
        assert!(!ReportType::Summary.includes(LogbookStatus::Pending));
        assert!(ReportType::Detailed.includes(LogbookStatus::Rejected));
    }
}
